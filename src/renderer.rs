use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use log::info;
use pbr::ProgressBar;
use rayon::iter::ParallelIterator;
use rayon::prelude::*;

use crate::film::Film;
use crate::math::{Color, Direction, Position, Ray};
use crate::scene::Scene;
use crate::shading::shoot_ray;

/// Render parameters. The eye sits at `eye` and every primary ray for plane
/// coordinate (x, y) heads toward (x, y, plane_z).
#[derive(Copy, Clone, Debug)]
pub struct RenderConfig {
    pub plane_start_x: f32,
    pub plane_end_x: f32,
    pub plane_start_y: f32,
    pub plane_end_y: f32,
    pub plane_z: f32,
    /// Supersampling multiplier applied to both image axes.
    pub resolution_factor: u32,
    pub eye: Position,
    pub background: Color,
    /// Drive a progress bar from a monitor thread during the pass.
    pub progress: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            plane_start_x: -50.0,
            plane_end_x: 50.0,
            plane_start_y: -50.0,
            plane_end_y: 50.0,
            plane_z: 100.0,
            resolution_factor: 10,
            eye: Position::ORIGIN,
            background: Color::WHITE,
            progress: false,
        }
    }
}

impl RenderConfig {
    pub fn width(&self) -> usize {
        (self.plane_end_x - self.plane_start_x) as usize * self.resolution_factor as usize
    }

    pub fn height(&self) -> usize {
        (self.plane_end_y - self.plane_start_y) as usize * self.resolution_factor as usize
    }
}

/// Cast one primary ray per supersampled pixel and store the resulting
/// color. Pixels are independent: each cell reads the immutable scene and
/// writes only itself, so the loop runs on the rayon pool.
pub fn render(scene: &Scene, config: &RenderConfig) -> Film<Color> {
    let (width, height) = (config.width(), config.height());
    let mut film = Film::new(width, height, config.background);
    let total_pixels = film.total_pixels();
    info!("starting render with film resolution {}x{}", width, height);

    let pixel_count = Arc::new(AtomicUsize::new(0));
    let monitor = if config.progress {
        let counter = pixel_count.clone();
        Some(thread::spawn(move || {
            let mut pb = ProgressBar::new(total_pixels as u64);
            let mut local_index = 0;
            while local_index < total_pixels {
                let pixels_to_add = counter.load(Ordering::Relaxed) - local_index;
                pb.add(pixels_to_add as u64);
                local_index += pixels_to_add;
                thread::sleep(Duration::from_millis(250));
            }
            pb.finish();
        }))
    } else {
        None
    };

    let factor = config.resolution_factor as f32;
    film.buffer
        .par_iter_mut()
        .enumerate()
        .for_each(|(index, pixel)| {
            let x = index % width;
            let y = index / width;
            let plane_x = x as f32 / factor + config.plane_start_x;
            let plane_y = y as f32 / factor + config.plane_start_y;
            let ray = Ray::new(
                config.eye,
                Direction::new(plane_x, plane_y, config.plane_z),
            );
            *pixel = shoot_ray(scene, config.background, ray);
            pixel_count.fetch_add(1, Ordering::Relaxed);
        });

    if let Some(handle) = monitor {
        let _ = handle.join();
    }
    info!("render pass complete");
    film
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{Plane, Sphere};
    use crate::scene::Scene;

    const AMBIENT: f32 = 0.3;

    fn small_config() -> RenderConfig {
        RenderConfig {
            plane_start_x: -5.0,
            plane_end_x: 5.0,
            plane_start_y: -5.0,
            plane_end_y: 5.0,
            resolution_factor: 1,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn test_plane_only_scene_renders_uniform_ambient_color() {
        // a backdrop facing the eye, no spheres, no lights
        let backdrop = Plane::new(
            Position::new(0.0, 0.0, 500.0),
            Direction::new(0.0, 0.0, -1.0),
            Color::new(120, 80, 40, AMBIENT),
        );
        let scene = Scene::new(vec![], backdrop, vec![]);
        let film = render(&scene, &small_config());
        for pixel in &film.buffer {
            assert_eq!(*pixel, Color::new(120, 80, 40, AMBIENT));
        }
        let shaded = film.at(0, 0).shaded();
        assert_eq!((shaded.r, shaded.g, shaded.b), (36, 24, 12));
    }

    #[test]
    fn test_red_sphere_scenario() {
        // red sphere from the built-in fixture; the eye ray passes through
        // its center, and the light sits on the eye's side so the sampled
        // near surface is actually lit
        let sphere = Sphere::new(
            Color::new(255, 0, 0, AMBIENT),
            Position::new(50.0, 50.0, 300.0),
            20,
        );
        let backdrop = Plane::new(
            Position::new(0.0, 0.0, 5000.0),
            Direction::new(0.0, 0.0, -1.0),
            Color::new(128, 128, 128, AMBIENT),
        );
        let scene = Scene::new(
            vec![sphere],
            backdrop,
            vec![Position::new(-500.0, -500.0, -500.0)],
        );

        // plane coordinate (50/3, 50/3) at depth 100 aims through the center
        let ray = Ray::new(
            Position::ORIGIN,
            Direction::new(50.0 / 3.0, 50.0 / 3.0, 100.0),
        );
        let hit = scene.nearest_hit(ray).unwrap();
        // near surface: on the sphere, eye side of the center
        assert!(((hit.point - sphere.center).length() - 20.0).abs() < 0.1);
        assert!(hit.point.z < 300.0);

        let color = shoot_ray(&scene, Color::WHITE, ray);
        assert!(color.lustre > AMBIENT, "light should reach the near surface");
        let shaded = color.shaded();
        assert!(shaded.r > 0);
        assert_eq!(shaded.g, 0);
        assert_eq!(shaded.b, 0);
    }

    #[test]
    fn test_film_dimensions_follow_resolution_factor() {
        let mut config = small_config();
        config.resolution_factor = 3;
        assert_eq!(config.width(), 30);
        assert_eq!(config.height(), 30);
    }
}
