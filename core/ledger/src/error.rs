//! FILENAME: core/ledger/src/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema has no level keys")]
    NoLevels,

    #[error("schema has {count} level keys, at most {max} are supported")]
    TooManyLevels { count: usize, max: usize },

    #[error("level key at position {position} is blank")]
    BlankLevelKey { position: usize },

    #[error("level key appears more than once: {0}")]
    DuplicateLevelKey(String),

    #[error("amount key is blank")]
    BlankAmountKey,

    #[error("amount key is also used as a level key: {0}")]
    AmountKeyIsLevel(String),
}
