// Page element ids and DOM-facing settings.

pub const BACKGROUND_CANVAS_ID: &str = "pixel-bg";
pub const GLOW_CANVAS_ID: &str = "glow-canvas";
pub const CURSOR_CANVAS_ID: &str = "cur";
pub const COORDS_ID: &str = "coords";
pub const CLOCK_ID: &str = "clock";
pub const FORM_ID: &str = "nform";
pub const SUCCESS_ID: &str = "successMsg";

// Elements that switch the cursor into its hover look
pub const HOVER_SELECTOR: &str = "button, input, a";
pub const TOUCH_BODY_CLASS: &str = "touch-device";

pub const CLOCK_INTERVAL_MS: i32 = 1000;
pub const TAB_TITLE_INTERVAL_MS: i32 = 650;

/// Keyframes for burst particles plus the ring/flash animations.
pub const BURST_STYLESHEET: &str = "\
@keyframes pixelBurst {
  0%   { transform: translate(-50%,-50%) translate(0,0) scale(1); opacity: 1; }
  100% { transform: translate(-50%,-50%) translate(var(--tx),var(--ty)) scale(0); opacity: 0; }
}
@keyframes tapRipple {
  0%   { transform: translate(-50%,-50%) scale(0.2); opacity: 1; }
  100% { transform: translate(-50%,-50%) scale(1); opacity: 0; }
}
@keyframes tapFlash {
  0%   { transform: translate(-50%,-50%) scale(0.6); opacity: 1; }
  100% { transform: translate(-50%,-50%) scale(1.6); opacity: 0; }
}
.tap-ripple { position: fixed; border-radius: 50%; pointer-events: none; z-index: 9997;
  animation: tapRipple 0.9s ease-out both; }
.tap-flash { position: fixed; border-radius: 50%; pointer-events: none; z-index: 9997;
  animation: tapFlash 0.5s ease-out forwards; }
";
