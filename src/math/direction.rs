use std::ops::Mul;

use super::Position;

/// An un-normalized vector. Callers must not assume unit length; magnitude
/// only ever cancels out through [`Direction::cos_angle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Direction {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Direction {
    pub const fn new(x: f32, y: f32, z: f32) -> Direction {
        Direction { x, y, z }
    }

    /// Approximate to a position, for constructing intersection points.
    pub fn approximate(self) -> Position {
        Position::new(self.x, self.y, self.z)
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    pub fn dot(&self, other: Direction) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cosine of the angle to `other`. A degenerate (zero-length) vector on
    /// either side yields 0.0, i.e. no illumination contribution.
    pub fn cos_angle(&self, other: Direction) -> f32 {
        let denominator = self.length() * other.length();
        if denominator <= f32::EPSILON {
            return 0.0;
        }
        self.dot(other) / denominator
    }
}

impl Mul<f32> for Direction {
    type Output = Direction;
    fn mul(self, coefficient: f32) -> Direction {
        Direction::new(
            self.x * coefficient,
            self.y * coefficient,
            self.z * coefficient,
        )
    }
}

impl Mul<Direction> for f32 {
    type Output = Direction;
    fn mul(self, direction: Direction) -> Direction {
        direction * self
    }
}
