use std::time::Duration;

use crate::error::ConfigError;
use crate::math::Point2d;
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The default maximum edge length.
pub const DEFAULT_STEP_SIZE: f64 = 1.0;

/// The default number of sampling iterations per search.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// The default probability of sampling the goal directly.
pub const DEFAULT_GOAL_SAMPLE_RATE: f64 = 0.1;

/// The default radius around the goal which counts as reaching it.
pub const DEFAULT_GOAL_TOLERANCE: f64 = 0.5;

/// The widest range that can still be sampled uniformly without overflowing.
const MAX_SAMPLE_WIDTH: f64 = f64::MAX / 2.0;

/// The parameters of a single search.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The maximum length of an edge added to the tree.
    pub step_size: f64,
    /// The number of samples drawn before giving up.
    pub max_iterations: usize,
    /// The probability that a sample is the goal itself.
    pub goal_sample_rate: f64,
    /// A node within this distance of the goal may connect to it directly.
    pub goal_tolerance: f64,
    /// An optional wall-clock budget, checked once per iteration.
    pub time_limit: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: DEFAULT_STEP_SIZE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            goal_sample_rate: DEFAULT_GOAL_SAMPLE_RATE,
            goal_tolerance: DEFAULT_GOAL_TOLERANCE,
            time_limit: None,
        }
    }
}

impl Config {
    /// Checks that the parameters describe a usable search.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(ConfigError::StepSize(self.step_size));
        }
        if !(0.0..=1.0).contains(&self.goal_sample_rate) {
            return Err(ConfigError::GoalSampleRate(self.goal_sample_rate));
        }
        if !(self.goal_tolerance.is_finite() && self.goal_tolerance >= 0.0) {
            return Err(ConfigError::GoalTolerance(self.goal_tolerance));
        }
        Ok(())
    }
}

/// The rectangular region that samples are drawn from.
/// Points outside of it are never part of a path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Bounds {
    /// The range of valid x-coordinates.
    pub x: Interval<f64>,
    /// The range of valid y-coordinates.
    pub y: Interval<f64>,
}

impl Bounds {
    /// Creates a sampling region without checking it.
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            x: Interval::new(min_x, max_x),
            y: Interval::new(min_y, max_y),
        }
    }

    /// Creates a sampling region, rejecting ranges that are inverted, empty or too wide to sample.
    pub fn try_new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Result<Self, ConfigError> {
        let bounds = Self::new(min_x, max_x, min_y, max_y);
        if bounds.is_sampleable() && bounds.x.length() > 0.0 && bounds.y.length() > 0.0 {
            Ok(bounds)
        } else {
            Err(ConfigError::Bounds {
                min_x,
                max_x,
                min_y,
                max_y,
            })
        }
    }

    /// Returns true if points can be drawn uniformly from the region:
    /// both ranges are ordered, finite, and narrow enough that their width is finite.
    pub fn is_sampleable(&self) -> bool {
        let sampleable = |int: Interval<f64>| {
            int.is_finite() && int.is_ordered() && int.length() <= MAX_SAMPLE_WIDTH
        };
        sampleable(self.x) && sampleable(self.y)
    }

    /// Returns true if the point lies within the region, boundary included.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x.contains(point.x) && self.y.contains(point.y)
    }
}
