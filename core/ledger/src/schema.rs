//! FILENAME: core/ledger/src/schema.rs
//! PURPOSE: Which columns of a row hold the category levels and the amount.
//! CONTEXT: The order of `level_keys` defines the hierarchy: the first key is
//! depth 1, the second depth 2, and so on. Columns not named here are never
//! read.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Maximum number of category levels a ledger may declare.
pub const MAX_LEVELS: usize = 6;

/// Column layout of a cost ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSchema {
    /// Ordered category columns, outermost first.
    #[serde(default = "default_level_keys")]
    pub level_keys: Vec<String>,

    /// The column holding the monetary amount.
    #[serde(default = "default_amount_key")]
    pub amount_key: String,
}

fn default_level_keys() -> Vec<String> {
    (1..=MAX_LEVELS).map(|n| format!("L{}", n)).collect()
}

fn default_amount_key() -> String {
    "amount".to_string()
}

impl Default for LedgerSchema {
    fn default() -> Self {
        LedgerSchema {
            level_keys: default_level_keys(),
            amount_key: default_amount_key(),
        }
    }
}

impl LedgerSchema {
    pub fn new<I, S>(level_keys: I, amount_key: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        LedgerSchema {
            level_keys: level_keys.into_iter().map(Into::into).collect(),
            amount_key: amount_key.into(),
        }
    }

    pub fn depth(&self) -> usize {
        self.level_keys.len()
    }

    /// Checks the schema before any row is read.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.level_keys.is_empty() {
            return Err(SchemaError::NoLevels);
        }
        if self.level_keys.len() > MAX_LEVELS {
            return Err(SchemaError::TooManyLevels {
                count: self.level_keys.len(),
                max: MAX_LEVELS,
            });
        }

        let mut seen = FxHashSet::default();
        for (position, key) in self.level_keys.iter().enumerate() {
            if key.trim().is_empty() {
                return Err(SchemaError::BlankLevelKey { position });
            }
            if !seen.insert(key.as_str()) {
                return Err(SchemaError::DuplicateLevelKey(key.clone()));
            }
        }

        if self.amount_key.trim().is_empty() {
            return Err(SchemaError::BlankAmountKey);
        }
        if seen.contains(self.amount_key.as_str()) {
            return Err(SchemaError::AmountKeyIsLevel(self.amount_key.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schema_is_valid() {
        let schema = LedgerSchema::default();
        assert_eq!(schema.level_keys, vec!["L1", "L2", "L3", "L4", "L5", "L6"]);
        assert_eq!(schema.amount_key, "amount");
        assert_eq!(schema.validate(), Ok(()));
    }

    #[test]
    fn test_empty_levels_rejected() {
        let schema = LedgerSchema::new(Vec::<String>::new(), "amount");
        assert_eq!(schema.validate(), Err(SchemaError::NoLevels));
    }

    #[test]
    fn test_too_many_levels_rejected() {
        let schema = LedgerSchema::new((1..=7).map(|n| format!("L{}", n)), "amount");
        assert_eq!(
            schema.validate(),
            Err(SchemaError::TooManyLevels { count: 7, max: MAX_LEVELS })
        );
    }

    #[test]
    fn test_bad_keys_rejected() {
        assert_eq!(
            LedgerSchema::new(["Dept", " "], "amount").validate(),
            Err(SchemaError::BlankLevelKey { position: 1 })
        );
        assert_eq!(
            LedgerSchema::new(["Dept", "Dept"], "amount").validate(),
            Err(SchemaError::DuplicateLevelKey("Dept".to_string()))
        );
        assert_eq!(
            LedgerSchema::new(["Dept"], "").validate(),
            Err(SchemaError::BlankAmountKey)
        );
        assert_eq!(
            LedgerSchema::new(["Dept", "Cost"], "Cost").validate(),
            Err(SchemaError::AmountKeyIsLevel("Cost".to_string()))
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let schema: LedgerSchema = serde_json::from_str(r#"{"amount_key": "Cost"}"#).unwrap();
        assert_eq!(schema.depth(), MAX_LEVELS);
        assert_eq!(schema.amount_key, "Cost");
    }
}
