//! Plane geometry for circular dials, in screen coordinates (y grows downward).

pub mod circle;
pub mod macros;
pub mod point;

pub use circle::{angle_between, distance, point_in_circle, point_on_circle_border};
pub use point::{Degrees, Point};
