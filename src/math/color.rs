/// An RGB color (0-255 domain, not enforced) plus `lustre`, the accumulated
/// illumination in [0, 1] that scales the base channels at composition time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub lustre: f32,
}

impl Color {
    pub const fn new(r: i32, g: i32, b: i32, lustre: f32) -> Color {
        Color { r, g, b, lustre }
    }

    /// The background color: fully lit white.
    pub const WHITE: Color = Color::new(255, 255, 255, 1.0);

    /// Add illumination. Negative amounts contribute nothing and the
    /// accumulator saturates at 1.
    pub fn illuminate(&mut self, amount: f32) {
        self.lustre = (self.lustre + amount.max(0.0)).min(1.0);
    }

    /// Compose the displayable color: each channel scaled by the lustre and
    /// rounded to the nearest integer. Kept separate from accumulation so
    /// illumination is gathered once per hit no matter how many lights exist.
    pub fn shaded(self) -> Color {
        Color {
            r: (self.r as f32 * self.lustre + 0.5) as i32,
            g: (self.g as f32 * self.lustre + 0.5) as i32,
            b: (self.b as f32 * self.lustre + 0.5) as i32,
            lustre: self.lustre,
        }
    }
}
