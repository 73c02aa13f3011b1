use self::sampler::Sampler;
use crate::config::{Bounds, Config};
use crate::debug::DebugFrame;
use crate::error::ConfigError;
use crate::math::{distance, interpolate, Point2d};
use crate::obstacle::Obstacle;
use crate::tree::Tree;
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

mod sampler;

/// A Rapidly-exploring Random Tree path planner.
///
/// The obstacles, configuration and bounds are fixed between searches.
/// Each search grows a fresh [Tree] which is discarded (or handed back
/// via [Planner::search]) once the search ends.
///
/// The planner owns its random source, so a single instance must not be
/// shared between threads without external synchronisation.
pub struct Planner<R = StdRng> {
    /// The obstacles which paths must avoid.
    obstacles: Vec<Obstacle>,
    /// The search parameters.
    config: Config,
    /// The region that samples are drawn from, if it has been set.
    bounds: Option<Bounds>,
    /// The random source used for sampling.
    rng: R,
    /// Debugging information from the previous search.
    #[cfg(feature = "debug")]
    debug: serde_json::Value,
}

/// The outcome of a single search.
#[derive(Clone, Debug)]
pub struct Search {
    /// The waypoints from start to goal, or empty if no path was found.
    pub path: Vec<Point2d>,
    /// The number of samples drawn.
    pub iterations: usize,
    /// The tree grown during the search.
    pub tree: Tree,
}

impl Search {
    fn failure(tree: Tree, iterations: usize) -> Self {
        Self {
            path: vec![],
            iterations,
            tree,
        }
    }

    /// Returns true if a path was found.
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

impl Planner<StdRng> {
    /// Creates a planner whose random source is seeded from system entropy.
    pub fn new(obstacles: Vec<Obstacle>, config: Config) -> Self {
        Self::with_rng(obstacles, config, StdRng::from_entropy())
    }

    /// Creates a planner with a deterministic random source.
    pub fn seeded(obstacles: Vec<Obstacle>, config: Config, seed: u64) -> Self {
        Self::with_rng(obstacles, config, StdRng::seed_from_u64(seed))
    }

    /// Creates a planner, rejecting unusable parameters and obstacles with a negative size.
    pub fn try_new(obstacles: Vec<Obstacle>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let negative = obstacles
            .iter()
            .position(|obs| !(obs.width >= 0.0 && obs.height >= 0.0));
        if let Some(index) = negative {
            return Err(ConfigError::Obstacle {
                index,
                width: obstacles[index].width,
                height: obstacles[index].height,
            });
        }
        Ok(Self::new(obstacles, config))
    }
}

impl<R> Planner<R> {
    /// Creates a planner which samples using the given random source.
    pub fn with_rng(obstacles: Vec<Obstacle>, config: Config, rng: R) -> Self {
        Self {
            obstacles,
            config,
            bounds: None,
            rng,
            #[cfg(feature = "debug")]
            debug: serde_json::Value::Null,
        }
    }

    /// Sets the sampling region. The ranges are not checked.
    pub fn set_bounds(&mut self, min_x: f64, max_x: f64, min_y: f64, max_y: f64) {
        self.bounds = Some(Bounds::new(min_x, max_x, min_y, max_y));
    }

    /// Sets the sampling region, rejecting inverted, empty or infinite ranges.
    pub fn try_set_bounds(
        &mut self,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    ) -> Result<(), ConfigError> {
        self.bounds = Some(Bounds::try_new(min_x, max_x, min_y, max_y)?);
        Ok(())
    }

    /// Gets the sampling region, if it has been set.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Gets the obstacles.
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Gets the search parameters.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the search parameters used by subsequent searches.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Returns true if the point is within the bounds and outside every obstacle.
    /// No point is valid until the bounds have been set.
    pub fn is_valid_point(&self, point: Point2d) -> bool {
        match &self.bounds {
            Some(bounds) => {
                bounds.contains(point) && !self.obstacles.iter().any(|obs| obs.contains(point))
            }
            None => false,
        }
    }

    /// Returns true if no obstacle (conservatively) intersects the segment.
    pub fn is_path_valid(&self, start: Point2d, end: Point2d) -> bool {
        !self.obstacles.iter().any(|obs| obs.intersects(start, end))
    }

    /// Gets the debugging information for the previous search as a JSON array.
    #[cfg(feature = "debug")]
    pub fn debug(&self) -> serde_json::Value {
        self.debug.clone()
    }
}

impl<R: Rng> Planner<R> {
    /// Finds a collision-free path from `start` to `goal`.
    ///
    /// Returns the waypoints from `start` to `goal`, or an empty vector if either
    /// end point is invalid or the iteration budget ran out.
    pub fn find_path(&mut self, start: Point2d, goal: Point2d) -> Vec<Point2d> {
        self.search(start, goal).path
    }

    /// Runs a search like [Self::find_path] and also returns the grown tree.
    pub fn search(&mut self, start: Point2d, goal: Point2d) -> Search {
        let mut frame = DebugFrame::default();
        let search = self.grow(start, goal, &mut frame);
        frame.outcome(search.found(), search.iterations, search.tree.len());

        #[cfg(feature = "debug")]
        {
            self.debug = frame.into_json();
        }

        search
    }

    /// Grows a tree from `start` until it connects to `goal` or the budget runs out.
    fn grow(&mut self, start: Point2d, goal: Point2d, frame: &mut DebugFrame) -> Search {
        let bounds = match self.bounds {
            Some(bounds) if self.is_valid_point(start) && self.is_valid_point(goal) => bounds,
            _ => {
                debug!("Start {:?} or goal {:?} is not a valid point", start, goal);
                return Search::failure(Tree::default(), 0);
            }
        };

        let tolerance = self.config.goal_tolerance;
        if distance(start, goal) <= tolerance {
            return Search {
                path: vec![start, goal],
                iterations: 0,
                tree: Tree::default(),
            };
        }

        if !bounds.is_sampleable() {
            warn!("Cannot sample uniformly from region {:?}", bounds);
            return Search::failure(Tree::default(), 0);
        }

        debug!("Searching from {:?} to {:?}", start, goal);
        frame.goal_region(goal, tolerance);

        let sampler = Sampler::new(&bounds, goal, self.config.goal_sample_rate);
        let started = Instant::now();
        let mut tree = Tree::new(start);

        for iteration in 0..self.config.max_iterations {
            if let Some(limit) = self.config.time_limit {
                if started.elapsed() >= limit {
                    debug!("Time limit reached after {} iterations", iteration);
                    return Search::failure(tree, iteration);
                }
            }

            let sample = sampler.sample(&mut self.rng);
            let nearest = match tree.nearest(sample) {
                Some(id) => id,
                None => break,
            };
            let from = tree[nearest].point;
            let candidate = steer(from, sample, self.config.step_size);

            if !self.is_valid_point(candidate) || !self.is_path_valid(from, candidate) {
                trace!("Rejected edge {:?} -> {:?}", from, candidate);
                continue;
            }
            let id = tree.push(candidate, nearest);
            frame.edge(id, nearest, from, candidate);

            if distance(candidate, goal) <= tolerance && self.is_path_valid(candidate, goal) {
                let goal_id = tree.push(goal, id);
                frame.edge(goal_id, id, candidate, goal);
                let path = tree.path_to(goal_id);
                debug!(
                    "Found path with {} waypoints after {} iterations ({} nodes)",
                    path.len(),
                    iteration + 1,
                    tree.len()
                );
                return Search {
                    path,
                    iterations: iteration + 1,
                    tree,
                };
            }
        }

        debug!(
            "No path found after {} iterations ({} nodes)",
            self.config.max_iterations,
            tree.len()
        );
        Search::failure(tree, self.config.max_iterations)
    }
}

/// Moves from `from` towards `to`, travelling at most `step_size`.
fn steer(from: Point2d, to: Point2d, step_size: f64) -> Point2d {
    let dist = distance(from, to);
    if dist <= step_size {
        to
    } else {
        interpolate(from, to, step_size / dist)
    }
}
