//! FILENAME: core/cost-tree/src/error.rs

use ledger::SchemaError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostTreeError {
    #[error("Invalid ledger schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("Invalid index policy: {0}")]
    InvalidPolicy(String),
}
