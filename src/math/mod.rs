mod color;
mod direction;
mod position;
mod quadratic;
mod ray;

pub use color::*;
pub use direction::*;
pub use position::*;
pub use quadratic::*;
pub use ray::*;
