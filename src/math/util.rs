use super::Point2d;
use cgmath::prelude::*;

/// Computes the Euclidean distance between two points.
#[inline(always)]
pub fn distance(a: Point2d, b: Point2d) -> f64 {
    a.distance(b)
}

/// Linearly interpolates from `from` towards `to`.
///
/// # Parameters
/// * `from` - The point returned when `ratio` is 0
/// * `to` - The point returned when `ratio` is 1
/// * `ratio` - The fraction of the way along the segment, usually in [0, 1]
pub fn interpolate(from: Point2d, to: Point2d, ratio: f64) -> Point2d {
    from + (to - from) * ratio
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn distance_is_euclidean() {
        let a = Point2d::new(1.0, 1.0);
        let b = Point2d::new(4.0, 5.0);
        assert_approx_eq!(distance(a, b), 5.0);
        assert_approx_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn interpolate_endpoints_and_midpoint() {
        let a = Point2d::new(-2.0, 3.0);
        let b = Point2d::new(6.0, -1.0);
        assert_eq!(interpolate(a, b, 0.0), a);
        assert_eq!(interpolate(a, b, 1.0), b);

        let mid = interpolate(a, b, 0.5);
        assert_approx_eq!(mid.x, 2.0);
        assert_approx_eq!(mid.y, 1.0);
    }
}
