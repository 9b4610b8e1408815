use std::ops::{Add, Sub};

use super::Direction;

/// Squared-distance threshold under which two computed positions count as
/// the same point. Intersection points come out of quadratic root solving
/// with floating-point noise, so exact equality would miss matches.
pub const CLOSENESS_TOLERANCE: f32 = 10.0;

/// A point in world space. Equality is exact; use [`Position::too_close`]
/// when comparing points produced by intersection arithmetic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Position {
        Position { x, y, z }
    }

    pub const ORIGIN: Position = Position::new(0.0, 0.0, 0.0);

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Promote to a direction vector for ray arithmetic.
    pub fn promote(self) -> Direction {
        Direction::new(self.x, self.y, self.z)
    }

    pub fn too_close(&self, other: Position) -> bool {
        (*self - other).length_squared() <= CLOSENESS_TOLERANCE
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::ORIGIN
    }
}

impl Add for Position {
    type Output = Position;
    fn add(self, other: Position) -> Position {
        Position::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Position {
    type Output = Position;
    fn sub(self, other: Position) -> Position {
        Position::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_too_close_boundary() {
        let a = Position::new(0.0, 0.0, 0.0);
        // squared distance exactly at the tolerance counts as the same point
        assert!(a.too_close(Position::new(3.0, 1.0, 0.0)));
        assert!(!a.too_close(Position::new(3.0, 1.5, 0.0)));
        assert!(a.too_close(a));
    }

    #[test]
    fn test_arithmetic() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Position::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Position::new(3.0, 3.0, 3.0));
        assert_eq!(Position::new(3.0, 4.0, 0.0).length(), 5.0);
    }
}
