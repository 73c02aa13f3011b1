use crate::math::Point2d;
use crate::util::Interval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular obstacle.
///
/// A rectangle with zero width or height is degenerate but still blocks
/// the points on it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    /// The x-coordinate of the lower-left corner.
    pub x: f64,
    /// The y-coordinate of the lower-left corner.
    pub y: f64,
    /// The extent along the x-axis.
    pub width: f64,
    /// The extent along the y-axis.
    pub height: f64,
}

impl Obstacle {
    /// Creates an obstacle from its lower-left corner and its size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The range of x-coordinates covered by the obstacle.
    pub fn x_extent(&self) -> Interval<f64> {
        Interval::new(self.x, self.x + self.width)
    }

    /// The range of y-coordinates covered by the obstacle.
    pub fn y_extent(&self) -> Interval<f64> {
        Interval::new(self.y, self.y + self.height)
    }

    /// Returns true if the point lies inside the obstacle or on its boundary.
    pub fn contains(&self, point: Point2d) -> bool {
        self.x_extent().contains(point.x) && self.y_extent().contains(point.y)
    }

    /// Conservatively checks whether the segment from `start` to `end` touches the obstacle.
    ///
    /// Only the segment's bounding box is compared against the rectangle, so a segment
    /// that slips diagonally past a corner is still reported as intersecting. A segment
    /// whose bounding box is disjoint from the rectangle never intersects it.
    pub fn intersects(&self, start: Point2d, end: Point2d) -> bool {
        let seg_x = Interval::spanning(start.x, end.x);
        let seg_y = Interval::spanning(start.y, end.y);
        if !seg_x.overlaps(&self.x_extent()) || !seg_y.overlaps(&self.y_extent()) {
            return false;
        }
        // Exact segment/rectangle clipping is not attempted; any bounding box
        // overlap is treated as a hit.
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn square() -> Obstacle {
        Obstacle::new(2.0, 2.0, 2.0, 2.0)
    }

    #[test]
    fn contains_includes_boundary() {
        let obs = square();
        assert!(obs.contains(Point2d::new(3.0, 3.0)));
        assert!(obs.contains(Point2d::new(2.0, 2.0)));
        assert!(obs.contains(Point2d::new(4.0, 3.0)));
        assert!(obs.contains(Point2d::new(4.0, 4.0)));
        assert!(!obs.contains(Point2d::new(1.99, 3.0)));
        assert!(!obs.contains(Point2d::new(3.0, 4.01)));
    }

    #[test]
    fn degenerate_obstacle_blocks_its_line() {
        let obs = Obstacle::new(1.0, 0.0, 0.0, 5.0);
        assert!(obs.contains(Point2d::new(1.0, 2.5)));
        assert!(!obs.contains(Point2d::new(1.1, 2.5)));
        assert!(obs.intersects(Point2d::new(0.0, 1.0), Point2d::new(2.0, 1.0)));
    }

    #[test]
    fn disjoint_bounding_boxes_do_not_intersect() {
        let obs = square();
        // Entirely to the left
        assert!(!obs.intersects(Point2d::new(0.0, 0.0), Point2d::new(1.5, 5.0)));
        // Entirely above
        assert!(!obs.intersects(Point2d::new(0.0, 4.5), Point2d::new(6.0, 5.0)));
    }

    #[test]
    fn crossing_segment_intersects() {
        let obs = square();
        assert!(obs.intersects(Point2d::new(0.0, 3.0), Point2d::new(6.0, 3.0)));
        assert!(obs.intersects(Point2d::new(3.0, 3.0), Point2d::new(3.5, 3.5)));
        // Touching the boundary counts
        assert!(obs.intersects(Point2d::new(0.0, 4.0), Point2d::new(6.0, 4.0)));
    }

    #[test]
    fn corner_gap_is_conservatively_rejected() {
        let obs = square();
        // Passes outside the lower-right corner, but its bounding box overlaps.
        let start = Point2d::new(3.5, 0.0);
        let end = Point2d::new(6.0, 2.5);
        assert!(!obs.contains(start) && !obs.contains(end));
        assert!(obs.intersects(start, end));
        assert!(obs.intersects(end, start));
    }
}
