use crate::geometry::Hit;
use crate::math::{solve_quadratic, Color, Position, QuadraticRoots, Ray};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub color: Color,
    pub center: Position,
    pub radius: i32,
}

impl Sphere {
    pub const fn new(color: Color, center: Position, radius: i32) -> Sphere {
        Sphere {
            color,
            center,
            radius,
        }
    }

    /// Ray-sphere intersection via the quadratic in t. Roots behind the ray
    /// origin are discarded.
    pub fn intersect(&self, ray: Ray, out: &mut Vec<Hit>) {
        let offset = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(offset.promote());
        let c = offset.length_squared() - (self.radius as f32).powi(2);

        let mut push = |t: f32| {
            if t >= 0.0 {
                let point = ray.point_at(t);
                out.push(Hit {
                    color: self.color,
                    point,
                    normal: (point - self.center).promote(),
                });
            }
        };

        match solve_quadratic(a, b, c) {
            QuadraticRoots::NoRoot => {}
            QuadraticRoots::OneRoot(t) => push(t),
            QuadraticRoots::TwoRoots(t1, t2) => {
                push(t1);
                push(t2);
            }
        }
    }
}
