use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::geometry::{Hit, Plane, Primitive, Sphere};
use crate::math::{Position, Ray};

/// Everything a render pass reads: the primitive list plus point light
/// positions. Primitive order does not affect the result; candidates are
/// ordered by distance, not discovery.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub plane: Plane,
    pub lights: Vec<Position>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, plane: Plane, lights: Vec<Position>) -> Scene {
        Scene {
            spheres,
            plane,
            lights,
        }
    }

    fn primitives(&self) -> impl Iterator<Item = Primitive> + '_ {
        self.spheres
            .iter()
            .copied()
            .map(Primitive::Sphere)
            .chain(std::iter::once(Primitive::Plane(self.plane)))
    }

    /// All forward intersections of `ray` with the scene, farthest first, so
    /// popping from the back repeatedly yields the nearest remaining
    /// candidate.
    pub fn candidate_hits(&self, ray: Ray) -> Vec<Hit> {
        let mut hits = Vec::new();
        for primitive in self.primitives() {
            primitive.intersect(ray, &mut hits);
        }
        hits.sort_unstable_by_key(|hit| Reverse(OrderedFloat((hit.point - ray.origin).length())));
        hits
    }

    /// The nearest candidate that does not coincide with the ray's own
    /// origin. A shadow ray starts on a surface; without the tolerance check
    /// it would immediately re-detect that surface.
    pub fn nearest_hit(&self, ray: Ray) -> Option<Hit> {
        let mut hits = self.candidate_hits(ray);
        while let Some(hit) = hits.pop() {
            if !hit.point.too_close(ray.origin) {
                return Some(hit);
            }
        }
        None
    }
}
