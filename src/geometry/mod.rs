use crate::math::{Color, Direction, Position, Ray};

mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

/// A candidate surface hit: the surface's base color (before illumination),
/// the hit point, and the outward normal. The normal is un-normalized;
/// magnitude cancels in the cosine computation.
#[derive(Copy, Clone, Debug)]
pub struct Hit {
    pub color: Color,
    pub point: Position,
    pub normal: Direction,
}

#[derive(Copy, Clone, Debug)]
pub enum Primitive {
    Sphere(Sphere),
    Plane(Plane),
}

impl Primitive {
    /// Append every forward (t >= 0) intersection of `ray` with this
    /// primitive to `out`. A sphere contributes up to two candidates, a
    /// plane up to one.
    pub fn intersect(&self, ray: Ray, out: &mut Vec<Hit>) {
        match self {
            Primitive::Sphere(sphere) => sphere.intersect(ray, out),
            Primitive::Plane(plane) => plane.intersect(ray, out),
        }
    }
}
