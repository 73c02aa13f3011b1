//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

use cgmath::num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval on the real number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd + Copy> Interval<T> {
    /// Creates the smallest interval containing both values, in either order.
    pub fn spanning(a: T, b: T) -> Self {
        if a <= b {
            Self::new(a, b)
        } else {
            Self::new(b, a)
        }
    }

    /// Returns true if this interval shares at least one value with the other.
    /// Touching end points count as overlapping.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.max >= other.min && other.max >= self.min
    }

    /// Returns true if this interval contains the value, end points included.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if the interval is ordered, i.e. `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }
}

impl<T: std::ops::Sub<T, Output = T> + Copy> Interval<T> {
    /// Gets the magnitude of the interval.
    pub fn length(&self) -> T {
        self.max - self.min
    }
}

impl<T: Float> Interval<T> {
    /// Returns true if both end points are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;

    #[test]
    fn contains_is_inclusive() {
        let int = Interval::new(2.0, 4.0);
        assert!(int.contains(2.0));
        assert!(int.contains(3.0));
        assert!(int.contains(4.0));
        assert!(!int.contains(1.999));
        assert!(!int.contains(4.001));
    }

    #[test]
    fn touching_intervals_overlap() {
        let a = Interval::new(0.0, 1.0);
        assert!(a.overlaps(&Interval::new(1.0, 2.0)));
        assert!(a.overlaps(&Interval::new(-1.0, 0.0)));
        assert!(a.overlaps(&Interval::new(0.25, 0.5)));
        assert!(!a.overlaps(&Interval::new(1.01, 2.0)));
    }

    #[test]
    fn spanning_orders_end_points() {
        assert_eq!(Interval::spanning(5.0, 1.0), Interval::new(1.0, 5.0));
        assert_eq!(Interval::spanning(1.0, 5.0), Interval::new(1.0, 5.0));
        assert!(!Interval::new(3.0, 1.0).is_ordered());
    }

    #[test]
    fn length_and_finiteness() {
        let int = Interval::new(10.0, 20.0);
        assert_eq!(int.length(), 10.0);
        assert!(int.is_finite());
        assert!(!Interval::new(0.0, f64::INFINITY).is_finite());
    }
}
