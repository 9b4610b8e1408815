//! A minimal ray tracer: spheres and a ground plane lit by point lights,
//! with hard shadows and a Lambertian cosine illumination model. Primary
//! rays leave a fixed eye point through a supersampled image plane; the
//! resulting pixel buffer is handed to an image writer.

pub mod film;
pub mod geometry;
pub mod math;
pub mod output;
pub mod parsing;
pub mod renderer;
pub mod scene;
pub mod shading;
