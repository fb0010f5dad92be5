//! FILENAME: core/ledger/src/lib.rs
//! PURPOSE: Shared row-level types for cost ledgers.
//! CONTEXT: The aggregation crate (`cost-tree`) depends on this crate only for
//! the shape of its input: loosely typed cells, map-shaped rows, and the
//! schema naming which columns hold category levels and the amount.

pub mod error;
pub mod row;
pub mod schema;
pub mod value;

pub use error::SchemaError;
pub use row::{RowAccess, RowRecord};
pub use schema::{LedgerSchema, MAX_LEVELS};
pub use value::{parse_amount, LedgerValue};
