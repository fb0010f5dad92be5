//! FILENAME: core/cost-tree/src/definition.rs
//! Cost Tree Definition - The serializable configuration.
//!
//! The ledger layout itself lives in `ledger::LedgerSchema`. This module
//! holds what the cost tree adds on top: the root label and the policy that
//! decides which nodes become selectable category options.

use serde::{Deserialize, Serialize};

use crate::error::CostTreeError;

/// Label of the synthetic root node.
pub const ROOT_NAME: &str = "Total";

/// Separator between path segments in an option's display label.
pub const DEFAULT_SEPARATOR: &str = " > ";

/// Shallowest depth listed as a category option.
pub const DEFAULT_MIN_DEPTH: usize = 1;

/// Deepest depth listed as a category option. Children of nodes at this
/// depth are not visited.
pub const DEFAULT_MAX_DEPTH: usize = 3;

// ============================================================================
// INDEX POLICY
// ============================================================================

/// Which nodes of a cost tree become category options, and how their labels
/// are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexPolicy {
    #[serde(default = "default_min_depth")]
    pub min_depth: usize,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_min_depth() -> usize {
    DEFAULT_MIN_DEPTH
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl Default for IndexPolicy {
    fn default() -> Self {
        IndexPolicy {
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            separator: default_separator(),
        }
    }
}

impl IndexPolicy {
    /// The root (depth 0) is never a traversable category.
    pub fn validate(&self) -> Result<(), CostTreeError> {
        if self.min_depth == 0 {
            return Err(CostTreeError::InvalidPolicy(
                "min_depth must be at least 1".to_string(),
            ));
        }
        if self.min_depth > self.max_depth {
            return Err(CostTreeError::InvalidPolicy(format!(
                "min_depth {} exceeds max_depth {}",
                self.min_depth, self.max_depth
            )));
        }
        if self.separator.is_empty() {
            return Err(CostTreeError::InvalidPolicy(
                "separator must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn contains_depth(&self, depth: usize) -> bool {
        (self.min_depth..=self.max_depth).contains(&depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = IndexPolicy::default();
        assert_eq!(policy.validate(), Ok(()));
        assert!(!policy.contains_depth(0));
        assert!(policy.contains_depth(1));
        assert!(policy.contains_depth(3));
        assert!(!policy.contains_depth(4));
    }

    #[test]
    fn test_invalid_policies() {
        let mut policy = IndexPolicy::default();
        policy.min_depth = 0;
        assert!(policy.validate().is_err());

        let mut policy = IndexPolicy::default();
        policy.min_depth = 4;
        assert!(policy.validate().is_err());

        let mut policy = IndexPolicy::default();
        policy.separator.clear();
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_deserialize_with_defaults() {
        let policy: IndexPolicy = serde_json::from_str(r#"{"separator": " / "}"#).unwrap();
        assert_eq!(policy.min_depth, 1);
        assert_eq!(policy.max_depth, 3);
        assert_eq!(policy.separator, " / ");
    }
}
