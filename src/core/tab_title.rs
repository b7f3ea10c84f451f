//! Title rotation while the tab is hidden.

pub const RESTING_TITLE: &str = "Graft Studios";

pub const AWAY_FRAMES: [&str; 4] = [
    "ERR: user_left",
    "> reconnecting_",
    "[ signal lost ]",
    "> awaiting input_",
];

#[derive(Clone, Debug)]
pub struct TabTitle {
    frames: &'static [&'static str],
    resting: &'static str,
    index: usize,
}

impl Default for TabTitle {
    fn default() -> Self {
        Self::new(&AWAY_FRAMES, RESTING_TITLE)
    }
}

impl TabTitle {
    pub fn new(frames: &'static [&'static str], resting: &'static str) -> Self {
        Self {
            frames,
            resting,
            index: 0,
        }
    }

    /// Next title in the away rotation; wraps around.
    pub fn next_frame(&mut self) -> &'static str {
        if self.frames.is_empty() {
            return self.resting;
        }
        let frame = self.frames[self.index % self.frames.len()];
        self.index = self.index.wrapping_add(1);
        frame
    }

    /// Restart the rotation and return the title to restore.
    pub fn reset(&mut self) -> &'static str {
        self.index = 0;
        self.resting
    }
}
