//! The shadow and illumination engine: one shadow ray per light, hard
//! shadows, Lambertian cosine accumulation into the hit color's lustre.

use crate::geometry::Hit;
use crate::math::{Color, Position, Ray};
use crate::scene::Scene;

/// Whether `light` is visible from `point`. Candidates on the shadow ray are
/// dropped when they are self-intersections of the originating surface (too
/// close to `point`) or lie at or beyond the light; an occluder only counts
/// when it sits strictly between the surface and the light. An empty list
/// after filtering is unambiguously "unoccluded".
pub fn light_visible(scene: &Scene, point: Position, light: Position) -> bool {
    let shadow_ray = Ray::new(point, (light - point).promote());
    let light_distance_squared = (light - point).length_squared();
    let mut blockers = scene.candidate_hits(shadow_ray);
    blockers.retain(|hit| {
        !hit.point.too_close(point)
            && (hit.point - point).length_squared() < light_distance_squared
    });
    blockers.is_empty()
}

/// Accumulate one light's contribution into the hit's lustre. A shadowed
/// light contributes zero; so does one below the surface's horizon, via the
/// negative-amount clamp in `illuminate`.
pub fn illuminate_hit(scene: &Scene, hit: &mut Hit, light: Position) {
    if !light_visible(scene, hit.point, light) {
        return;
    }
    let to_light = (light - hit.point).promote();
    hit.color.illuminate(hit.normal.cos_angle(to_light));
}

/// Shade one primary ray: the nearest surface lit by every light in turn,
/// or the background when the ray escapes the scene.
pub fn shoot_ray(scene: &Scene, background: Color, ray: Ray) -> Color {
    match scene.nearest_hit(ray) {
        None => background,
        Some(mut hit) => {
            for &light in scene.lights.iter() {
                illuminate_hit(scene, &mut hit, light);
            }
            hit.color
        }
    }
}
