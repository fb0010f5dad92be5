//! FILENAME: core/cost-tree/src/builder.rs
//! Tree Builder - Turns flat ledger rows into a cost tree.
//!
//! Algorithm:
//! 1. Ingest: for each row, walk the level columns in schema order, creating
//!    missing children on the way, and add the row's amount to the node where
//!    the walk stopped. A blank level ends the walk even if deeper columns of
//!    the same row are filled in.
//! 2. Finalize: one post-order pass derives every node's total.
//!
//! Data-quality problems never fail a build: unparsable amounts count as zero
//! and blank categories stop descent. Only a bad schema is rejected, and that
//! happens in `TreeBuilder::new`, before any row is read.

use rustc_hash::FxHashMap;

use ledger::{LedgerSchema, RowAccess};

use crate::definition::ROOT_NAME;
use crate::error::CostTreeError;
use crate::tree::CostNode;

// ============================================================================
// INGESTION TREE
// ============================================================================

/// A node while rows are still being ingested. Carries a name → position
/// index over `children` that is dropped at finalization.
#[derive(Debug)]
struct PendingNode {
    name: String,
    depth: usize,
    direct_cost: f64,
    children: Vec<PendingNode>,
    positions: FxHashMap<String, usize>,
}

impl PendingNode {
    fn new(name: String, depth: usize) -> Self {
        PendingNode {
            name,
            depth,
            direct_cost: 0.0,
            children: Vec::new(),
            positions: FxHashMap::default(),
        }
    }

    /// Returns the child with this name, appending it if this is the first
    /// time it is seen.
    fn child_mut(&mut self, name: String) -> &mut PendingNode {
        let position = match self.positions.get(name.as_str()) {
            Some(&position) => position,
            None => {
                let position = self.children.len();
                self.children.push(PendingNode::new(name.clone(), self.depth + 1));
                self.positions.insert(name, position);
                position
            }
        };
        &mut self.children[position]
    }

    /// Post-order: children are finalized before their parent's total is
    /// derived from them.
    fn finalize(self) -> CostNode {
        let children = self
            .children
            .into_iter()
            .map(PendingNode::finalize)
            .collect();
        CostNode::finalized(self.name, self.depth, self.direct_cost, children)
    }
}

// ============================================================================
// TREE BUILDER
// ============================================================================

/// Builds cost trees from rows laid out according to a `LedgerSchema`.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    schema: LedgerSchema,
}

impl TreeBuilder {
    /// Creates a builder, rejecting schemas that could only produce a
    /// degenerate tree.
    pub fn new(schema: LedgerSchema) -> Result<Self, CostTreeError> {
        schema.validate()?;
        Ok(TreeBuilder { schema })
    }

    pub fn schema(&self) -> &LedgerSchema {
        &self.schema
    }

    /// Consumes all rows and returns the finished root.
    pub fn build<I>(&self, rows: I) -> CostNode
    where
        I: IntoIterator,
        I::Item: RowAccess,
    {
        let mut root = PendingNode::new(ROOT_NAME.to_string(), 0);
        let mut row_count = 0usize;
        let mut zeroed = 0usize;

        for row in rows {
            if !self.ingest(&mut root, &row, row_count) {
                zeroed += 1;
            }
            row_count += 1;
        }

        let tree = root.finalize();
        log::debug!(
            "[COST_TREE] built from {} rows ({} amounts read as zero): {} nodes, total {}",
            row_count,
            zeroed,
            tree.node_count(),
            tree.total_cost()
        );
        tree
    }

    /// Adds one row to the ingestion tree. Returns `false` when the row's
    /// amount fell back to zero.
    fn ingest<R: RowAccess>(&self, root: &mut PendingNode, row: &R, row_index: usize) -> bool {
        let cell = row.cell(&self.schema.amount_key);
        let parsed = cell.and_then(|value| value.try_amount());
        if parsed.is_none() {
            log::trace!(
                "[COST_TREE] row {}: amount {:?} is not a number, using 0",
                row_index,
                cell
            );
        }

        let mut current = root;
        for key in &self.schema.level_keys {
            let name = match row.cell(key).and_then(|value| value.category()) {
                Some(name) => name,
                None => break,
            };
            current = current.child_mut(name);
        }
        current.direct_cost += parsed.unwrap_or(0.0);

        parsed.is_some()
    }
}
