//! FILENAME: core/cost-tree/src/index.rs
//! Category Index - Flattens the upper levels of a cost tree into options.
//!
//! The output is a pre-order listing of nodes inside the policy's depth
//! window whose total cost is positive. Each option borrows its node from
//! the tree; the tree keeps ownership and is never modified.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use smallvec::SmallVec;

use crate::definition::IndexPolicy;
use crate::error::CostTreeError;
use crate::tree::CostNode;

/// Path segments from depth 1 down to a node. Inline up to the default
/// maximum depth.
pub type CategoryPath = SmallVec<[String; 3]>;

// ============================================================================
// CATEGORY OPTION
// ============================================================================

/// A selectable category: a navigational entry pointing into the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption<'a> {
    /// Depth of the node (0 only for the whole-tree option).
    pub depth: usize,

    /// Path joined with the policy separator, e.g. `"Food > Lunch"`.
    pub display_label: String,

    /// Ancestor names from depth 1 down to the node, inclusive.
    pub path: CategoryPath,

    pub node: &'a CostNode,
}

impl CategoryOption<'_> {
    pub fn total_cost(&self) -> f64 {
        self.node.total_cost()
    }

    pub fn is_whole_tree(&self) -> bool {
        self.depth == 0
    }
}

impl Serialize for CategoryOption<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CategoryOption", 4)?;
        state.serialize_field("level", &self.depth)?;
        state.serialize_field("display_label", &self.display_label)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("total_cost", &self.node.total_cost())?;
        state.end()
    }
}

// ============================================================================
// CATEGORY INDEXER
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct CategoryIndexer {
    policy: IndexPolicy,
}

impl CategoryIndexer {
    pub fn new(policy: IndexPolicy) -> Result<Self, CostTreeError> {
        policy.validate()?;
        Ok(CategoryIndexer { policy })
    }

    pub fn policy(&self) -> &IndexPolicy {
        &self.policy
    }

    /// Lists the selectable categories of a built tree, in pre-order.
    ///
    /// The root itself is never listed; see `index_with_whole_tree`.
    pub fn index<'a>(&self, root: &'a CostNode) -> Vec<CategoryOption<'a>> {
        debug_assert_eq!(root.depth(), 0, "index expects the root of a built tree");

        let mut options = Vec::new();
        let mut path = CategoryPath::new();
        for child in root.children() {
            self.visit(child, &mut path, &mut options);
        }
        options
    }

    /// Same as `index`, preceded by an option for the whole tree.
    pub fn index_with_whole_tree<'a>(&self, root: &'a CostNode) -> Vec<CategoryOption<'a>> {
        let mut options = vec![CategoryOption {
            depth: 0,
            display_label: root.name().to_string(),
            path: CategoryPath::new(),
            node: root,
        }];
        options.extend(self.index(root));
        options
    }

    fn visit<'a>(
        &self,
        node: &'a CostNode,
        path: &mut CategoryPath,
        options: &mut Vec<CategoryOption<'a>>,
    ) {
        path.push(node.name().to_string());

        if self.policy.contains_depth(node.depth()) && node.total_cost() > 0.0 {
            options.push(CategoryOption {
                depth: node.depth(),
                display_label: path.join(self.policy.separator.as_str()),
                path: path.clone(),
                node,
            });
        }

        if node.depth() < self.policy.max_depth {
            for child in node.children() {
                self.visit(child, path, options);
            }
        }

        path.pop();
    }
}
