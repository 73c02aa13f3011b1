//! Mathematical structs and functions.

use cgmath::Point2;
pub use util::*;

mod util;

/// A 2D point
pub type Point2d = Point2<f64>;
