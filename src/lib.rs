//! A Rapidly-exploring Random Tree (RRT) path planner for a 2D plane
//! populated with axis-aligned rectangular obstacles.

pub use cgmath;
pub use config::{Bounds, Config};
pub use error::ConfigError;
pub use obstacle::Obstacle;
pub use planner::{Planner, Search};
pub use tree::{NodeId, Tree, TreeNode};
pub use util::Interval;

pub mod config;
mod debug;
mod error;
pub mod math;
mod obstacle;
mod planner;
mod tree;
mod util;
