use crate::geometry::Hit;
use crate::math::{Color, Direction, Position, Ray};

/// Rays whose direction is closer to perpendicular to the normal than this
/// produce no candidate instead of a near-degenerate division.
const PARALLEL_EPSILON: f32 = 1e-6;

/// A plane in point-normal form. The normal is not required to be unit
/// length.
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    pub point: Position,
    pub normal: Direction,
    pub color: Color,
}

impl Plane {
    pub const fn new(point: Position, normal: Direction, color: Color) -> Plane {
        Plane {
            point,
            normal,
            color,
        }
    }

    pub fn intersect(&self, ray: Ray, out: &mut Vec<Hit>) {
        let denominator = ray.direction.dot(self.normal);
        if denominator.abs() < PARALLEL_EPSILON {
            log::trace!("ray parallel to plane, no candidate");
            return;
        }
        let t = self.normal.dot((self.point - ray.origin).promote()) / denominator;
        if t >= 0.0 {
            out.push(Hit {
                color: self.color,
                point: ray.point_at(t),
                normal: self.normal,
            });
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ground() -> Plane {
        Plane::new(
            Position::new(0.0, -50.0, 0.0),
            Direction::new(0.0, 1.0, 0.0),
            Color::new(128, 128, 128, 0.3),
        )
    }

    #[test]
    fn test_forward_hit() {
        let ray = Ray::new(Position::ORIGIN, Direction::new(0.0, -1.0, 1.0));
        let mut hits = Vec::new();
        ground().intersect(ray, &mut hits);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].point, Position::new(0.0, -50.0, 50.0));
        assert_eq!(hits[0].normal, Direction::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_parallel_ray_yields_nothing() {
        let ray = Ray::new(Position::ORIGIN, Direction::new(1.0, 0.0, 1.0));
        let mut hits = Vec::new();
        ground().intersect(ray, &mut hits);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_plane_behind_origin_yields_nothing() {
        let ray = Ray::new(Position::ORIGIN, Direction::new(0.0, 1.0, 0.0));
        let mut hits = Vec::new();
        ground().intersect(ray, &mut hits);
        assert!(hits.is_empty());
    }
}
