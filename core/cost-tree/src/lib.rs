//! FILENAME: core/cost-tree/src/lib.rs
//! Cost aggregation subsystem.
//!
//! Turns flat ledger rows (see the `ledger` crate) into a rooted tree of
//! category nodes with bottom-up totals, then flattens the upper levels of
//! that tree into a list of selectable category options.
//!
//! Layers:
//! - `definition`: Serializable configuration (index policy, shared constants)
//! - `tree`: The finished, read-only cost tree (WHAT a consumer reads)
//! - `builder`: Row ingestion and total finalization (HOW the tree is built)
//! - `index`: Flattened category options (WHAT a selection list displays)

pub mod builder;
pub mod definition;
pub mod error;
pub mod index;
pub mod tree;

pub use builder::TreeBuilder;
pub use definition::*;
pub use error::CostTreeError;
pub use index::{CategoryIndexer, CategoryOption};
pub use tree::CostNode;

pub use ledger::{LedgerSchema, LedgerValue, RowAccess, RowRecord};

// ============================================================================
// PUBLIC API
// ============================================================================

/// Builds a cost tree from rows laid out with the default schema
/// (`L1`..`L6` and `amount`).
pub fn build_tree<I>(rows: I) -> CostNode
where
    I: IntoIterator,
    I::Item: RowAccess,
{
    TreeBuilder::default().build(rows)
}

/// Indexes a built tree with the default policy (depths 1..=3, `" > "`).
pub fn index_categories(root: &CostNode) -> Vec<CategoryOption<'_>> {
    CategoryIndexer::default().index(root)
}
