use crate::math::{distance, Point2d};
use itertools::{unfold, Itertools};
use std::ops::Index;

/// The index of a node within a [Tree].
pub type NodeId = usize;

/// A single configuration reached by the planner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeNode {
    /// The position of the node.
    pub point: Point2d,
    /// The node this one was grown from, or `None` for the root.
    pub parent: Option<NodeId>,
}

/// An append-only tree of reachable points, rooted at index 0.
///
/// Nodes are addressed by index only and every node's parent
/// has a strictly smaller index than the node itself.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

impl Tree {
    /// Creates a tree containing only the root.
    pub fn new(root: Point2d) -> Self {
        Self {
            nodes: vec![TreeNode {
                point: root,
                parent: None,
            }],
        }
    }

    /// Gets the number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the node with the given index.
    pub fn get(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Returns an iterator over the nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TreeNode> {
        self.nodes.iter()
    }

    /// Appends a node grown from `parent` and returns its index.
    pub(crate) fn push(&mut self, point: Point2d, parent: NodeId) -> NodeId {
        debug_assert!(parent < self.nodes.len());
        self.nodes.push(TreeNode {
            point,
            parent: Some(parent),
        });
        self.nodes.len() - 1
    }

    /// Finds the node closest to `point`.
    /// When several nodes are equally close, the one with the lowest index wins.
    pub fn nearest(&self, point: Point2d) -> Option<NodeId> {
        self.nodes
            .iter()
            .map(|node| distance(node.point, point))
            .position_min_by(|a, b| a.total_cmp(b))
    }

    /// Collects the points from the root down to the given node.
    pub fn path_to(&self, id: NodeId) -> Vec<Point2d> {
        let mut path = unfold(Some(id), |next| {
            let node = self.nodes.get((*next)?)?;
            *next = node.parent;
            Some(node.point)
        })
        .collect::<Vec<_>>();
        path.reverse();
        path
    }
}

impl Index<NodeId> for Tree {
    type Output = TreeNode;

    fn index(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id]
    }
}
