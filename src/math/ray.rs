use super::{Direction, Position};

/// The parametric line origin + t * direction.
#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: Position,
    pub direction: Direction,
}

impl Ray {
    pub const fn new(origin: Position, direction: Direction) -> Self {
        Ray { origin, direction }
    }

    /// The point at parameter `t`. The scaled direction is approximated to a
    /// position before the addition; this is where floating noise enters and
    /// why intersection points are compared with the closeness tolerance.
    pub fn point_at(&self, t: f32) -> Position {
        self.origin + (self.direction * t).approximate()
    }
}

impl Default for Ray {
    fn default() -> Self {
        Ray::new(Position::ORIGIN, Direction::new(0.0, 0.0, 1.0))
    }
}
