//! FILENAME: core/cost-tree/src/tree.rs
//! Cost Tree - The finished, read-only aggregation tree.
//!
//! Every `CostNode` a caller can hold was produced by `TreeBuilder`, so its
//! `total_cost` is always final:
//!
//!   total_cost(node) = direct_cost(node) + Σ total_cost(child)
//!
//! Nodes own their children by value. There are no parent links; consumers
//! that need to go upward keep the path and resolve it with `find`.

use serde::Serialize;

/// A node in the cost tree. Sibling names are unique, children are kept in
/// first-encounter order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostNode {
    name: String,
    depth: usize,
    direct_cost: f64,
    total_cost: f64,
    children: Vec<CostNode>,
}

impl CostNode {
    /// Assembles a node whose children are already final, deriving its total.
    pub(crate) fn finalized(
        name: String,
        depth: usize,
        direct_cost: f64,
        children: Vec<CostNode>,
    ) -> Self {
        let total_cost = direct_cost + children.iter().map(|c| c.total_cost).sum::<f64>();
        CostNode {
            name,
            depth,
            direct_cost,
            total_cost,
            children,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Depth below the root (root = 0).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Amount from rows whose category path ended exactly here.
    pub fn direct_cost(&self) -> f64 {
        self.direct_cost
    }

    /// Direct cost plus the totals of all children.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn children(&self) -> &[CostNode] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Looks up a direct child by exact name.
    pub fn child(&self, name: &str) -> Option<&CostNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Resolves a path of names below this node. An empty path is the node
    /// itself.
    pub fn find<S: AsRef<str>>(&self, path: &[S]) -> Option<&CostNode> {
        path.iter()
            .try_fold(self, |node, segment| node.child(segment.as_ref()))
    }

    /// Pre-order traversal, starting with this node.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels below this node (0 for a leaf).
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.height() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a CostNode {
    type Item = &'a CostNode;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Pre-order iterator over a subtree.
pub struct Iter<'a> {
    stack: Vec<&'a CostNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a CostNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
