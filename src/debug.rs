use crate::math::Point2d;
use crate::tree::NodeId;
#[cfg(feature = "debug")]
use serde_json::json;

/// A record of how one search grew its tree, for visualisation.
///
/// Without the `debug` feature nothing is stored and every method is a no-op.
#[derive(Default)]
pub(crate) struct DebugFrame {
    #[cfg(feature = "debug")]
    items: Vec<serde_json::Value>,
}

impl DebugFrame {
    /// Records the region around the goal which ends the search.
    #[allow(unused)]
    pub fn goal_region(&mut self, goal: Point2d, tolerance: f64) {
        #[cfg(feature = "debug")]
        self.items.push(json!({
            "type": "goal",
            "centre": [goal.x, goal.y],
            "radius": tolerance,
        }))
    }

    /// Records the edge from `parent` to the newly appended `node`.
    #[allow(unused)]
    pub fn edge(&mut self, node: NodeId, parent: NodeId, from: Point2d, to: Point2d) {
        #[cfg(feature = "debug")]
        self.items.push(json!({
            "type": "edge",
            "node": node,
            "parent": parent,
            "from": [from.x, from.y],
            "to": [to.x, to.y],
        }))
    }

    /// Records how the search ended.
    #[allow(unused)]
    pub fn outcome(&mut self, found: bool, iterations: usize, nodes: usize) {
        #[cfg(feature = "debug")]
        self.items.push(json!({
            "type": "outcome",
            "found": found,
            "iterations": iterations,
            "nodes": nodes,
        }))
    }

    /// Converts the recorded items into a JSON array.
    #[cfg(feature = "debug")]
    pub fn into_json(self) -> serde_json::Value {
        serde_json::Value::Array(self.items)
    }
}

#[cfg(all(test, feature = "debug"))]
mod test {
    use super::*;

    #[test]
    fn records_in_order() {
        let mut frame = DebugFrame::default();
        frame.goal_region(Point2d::new(9.0, 9.0), 0.5);
        frame.edge(1, 0, Point2d::new(1.0, 1.0), Point2d::new(2.0, 1.0));
        frame.outcome(false, 10, 2);

        let json = frame.into_json();
        let items = json.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["type"], "goal");
        assert_eq!(items[0]["radius"], 0.5);
        assert_eq!(items[1]["node"], 1);
        assert_eq!(items[1]["parent"], 0);
        assert_eq!(items[1]["to"][0], 2.0);
        assert_eq!(items[2]["found"], false);
        assert_eq!(items[2]["iterations"], 10);
    }
}
