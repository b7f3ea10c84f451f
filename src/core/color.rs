use std::fmt;

/// 8-bit RGB color with a floating point alpha, formatted as CSS.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    /// Opaque color from a `0xRRGGBB` literal.
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xFF) as u8,
            g: ((rgb >> 8) & 0xFF) as u8,
            b: (rgb & 0xFF) as u8,
            a: 1.0,
        }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a.max(0.0))
        }
    }
}

pub const GREEN: Rgba = Rgba::hex(0x7fff5f);
pub const LIME: Rgba = Rgba::hex(0xc8ff80);
pub const ORANGE: Rgba = Rgba::hex(0xff9933);
pub const SKY: Rgba = Rgba::hex(0xa8d8ff);
pub const WHITE: Rgba = Rgba::hex(0xffffff);
pub const TRANSPARENT: Rgba = Rgba::rgba(0, 0, 0, 0.0);

/// Shared four-color palette for cells, trail points and touch bursts.
pub const PALETTE: [Rgba; 4] = [GREEN, LIME, ORANGE, SKY];
