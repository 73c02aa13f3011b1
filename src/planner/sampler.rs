use crate::config::Bounds;
use crate::math::Point2d;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Draws the random targets that the tree is grown towards.
pub(crate) struct Sampler {
    goal: Point2d,
    goal_sample_rate: f64,
    x: Uniform<f64>,
    y: Uniform<f64>,
}

impl Sampler {
    /// Creates a sampler over `bounds`, which must be ordered.
    pub fn new(bounds: &Bounds, goal: Point2d, goal_sample_rate: f64) -> Self {
        Self {
            goal,
            goal_sample_rate,
            x: Uniform::new_inclusive(bounds.x.min, bounds.x.max),
            y: Uniform::new_inclusive(bounds.y.min, bounds.y.max),
        }
    }

    /// Returns the goal with probability `goal_sample_rate`,
    /// otherwise a point drawn uniformly from the bounds.
    pub fn sample(&self, rng: &mut impl Rng) -> Point2d {
        if rng.gen::<f64>() < self.goal_sample_rate {
            return self.goal;
        }
        Point2d::new(self.x.sample(rng), self.y.sample(rng))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_in_bounds() {
        let mut rng = StdRng::from_seed(*b"Vegemite sandwhich is not fun...");
        let bounds = Bounds::new(-3.0, 7.0, 2.0, 4.0);
        let sampler = Sampler::new(&bounds, Point2d::new(100.0, 100.0), 0.0);
        for _ in 0..1000 {
            assert!(bounds.contains(sampler.sample(&mut rng)));
        }
    }

    #[test]
    fn always_samples_goal_at_full_rate() {
        let mut rng = StdRng::seed_from_u64(7);
        let goal = Point2d::new(9.0, 9.0);
        let sampler = Sampler::new(&Bounds::new(0.0, 10.0, 0.0, 10.0), goal, 1.0);
        for _ in 0..100 {
            assert_eq!(sampler.sample(&mut rng), goal);
        }
    }

    #[test]
    fn goal_bias_is_roughly_honoured() {
        let mut rng = StdRng::seed_from_u64(42);
        let goal = Point2d::new(9.0, 9.0);
        let sampler = Sampler::new(&Bounds::new(0.0, 10.0, 0.0, 10.0), goal, 0.25);
        let hits = (0..10_000)
            .filter(|_| sampler.sample(&mut rng) == goal)
            .count();
        assert!((2000..3000).contains(&hits), "{} goal samples", hits);
    }
}
