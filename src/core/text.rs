/// `HH:MM:SS` in 24-hour time.
pub fn clock_label(hours: u32, minutes: u32, seconds: u32) -> String {
    format!("{:02}:{:02}:{:02}", hours % 24, minutes % 60, seconds % 60)
}

/// Pointer readout, rounded and zero-padded to three digits.
pub fn coords_label(x: f32, y: f32) -> String {
    format!("X:{:03} Y:{:03}", x.round() as i64, y.round() as i64)
}
