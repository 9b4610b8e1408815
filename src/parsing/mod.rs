use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::geometry::{Plane, Sphere};
use crate::math::{Color, Direction, Position};
use crate::scene::Scene;

/// Lustre every surface carries before any light reaches it; the minimum
/// brightness of a fully shadowed surface.
pub const DEFAULT_AMBIENT: f32 = 0.3;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct SphereData {
    pub color: [i32; 3],
    pub center: [f32; 3],
    pub radius: i32,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct PlaneData {
    pub point: [f32; 3],
    pub normal: [f32; 3],
    pub color: [i32; 3],
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SceneData {
    pub spheres: Vec<SphereData>,
    pub plane: PlaneData,
    pub lights: Vec<[f32; 3]>,
    pub ambient: Option<f32>,
}

fn position(p: [f32; 3]) -> Position {
    Position::new(p[0], p[1], p[2])
}

fn color(c: [i32; 3], ambient: f32) -> Color {
    Color::new(c[0], c[1], c[2], ambient)
}

impl From<SceneData> for Scene {
    fn from(data: SceneData) -> Self {
        let ambient = data.ambient.unwrap_or(DEFAULT_AMBIENT);
        let spheres = data
            .spheres
            .iter()
            .map(|s| Sphere::new(color(s.color, ambient), position(s.center), s.radius))
            .collect();
        let plane = Plane::new(
            position(data.plane.point),
            position(data.plane.normal).promote(),
            color(data.plane.color, ambient),
        );
        let lights = data.lights.iter().copied().map(position).collect();
        Scene::new(spheres, plane, lights)
    }
}

pub fn load_json<T>(path: PathBuf) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
{
    let mut input = String::new();
    File::open(path).and_then(|mut f| f.read_to_string(&mut input))?;
    let data: T = serde_json::from_str(&input)?;
    Ok(data)
}

/// The built-in test fixture: two spheres, two lights, a gray ground plane.
pub fn example_scene() -> Scene {
    Scene::new(
        vec![
            Sphere::new(
                Color::new(255, 0, 0, DEFAULT_AMBIENT),
                Position::new(50.0, 50.0, 300.0),
                20,
            ),
            Sphere::new(
                Color::new(0, 255, 0, DEFAULT_AMBIENT),
                Position::new(100.0, 100.0, 600.0),
                60,
            ),
        ],
        Plane::new(
            Position::new(0.0, -50.0, 0.0),
            Direction::new(0.0, 1.0, 0.0),
            Color::new(128, 128, 128, DEFAULT_AMBIENT),
        ),
        vec![
            Position::new(500.0, 500.0, 500.0),
            Position::new(-500.0, -500.0, 500.0),
        ],
    )
}
