//! FILENAME: core/ledger/src/value.rs
//! PURPOSE: The loosely typed cell value handed over by row sources.
//! CONTEXT: Ledger exports are dirty. Amounts arrive as text or numbers,
//! category cells may be numeric (years, cost-centre codes) or padded with
//! whitespace. Everything here resolves to a definite value and never fails.

use std::fmt;

use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Serialize;

/// A single cell of a ledger row.
///
/// Deserializes from any JSON-like scalar. Nested arrays and objects carry
/// nothing usable and read as `Empty`, so one malformed cell never rejects
/// the rest of the batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LedgerValue {
    #[default]
    Empty,
    Boolean(bool),
    Number(f64),
    Text(String),
}

impl LedgerValue {
    pub fn text(s: impl Into<String>) -> Self {
        LedgerValue::Text(s.into())
    }

    /// Reads the cell as a monetary amount.
    ///
    /// Numbers are used as-is, text is trimmed and parsed as a float.
    /// Every other case (empty, boolean, unparsable, NaN or infinite) is `0.0`.
    pub fn amount(&self) -> f64 {
        self.try_amount().unwrap_or(0.0)
    }

    /// Like [`LedgerValue::amount`], but reports `None` where the zero
    /// fallback would apply.
    pub fn try_amount(&self) -> Option<f64> {
        match self {
            LedgerValue::Number(n) if n.is_finite() => Some(*n),
            LedgerValue::Text(s) => match s.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Some(n),
                _ => None,
            },
            _ => None,
        }
    }

    /// Reads the cell as a category name.
    ///
    /// Returns the trimmed name, or `None` when the cell is empty or blank.
    pub fn category(&self) -> Option<String> {
        match self {
            LedgerValue::Empty => None,
            LedgerValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            LedgerValue::Number(n) => Some(n.to_string()),
            LedgerValue::Boolean(b) => Some(b.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category().is_none()
    }
}

impl From<&str> for LedgerValue {
    fn from(value: &str) -> Self {
        LedgerValue::Text(value.to_string())
    }
}

impl From<String> for LedgerValue {
    fn from(value: String) -> Self {
        LedgerValue::Text(value)
    }
}

impl From<f64> for LedgerValue {
    fn from(value: f64) -> Self {
        LedgerValue::Number(value)
    }
}

impl From<bool> for LedgerValue {
    fn from(value: bool) -> Self {
        LedgerValue::Boolean(value)
    }
}

// ============================================================================
// DESERIALIZATION
// ============================================================================

struct LedgerValueVisitor;

impl<'de> Visitor<'de> for LedgerValueVisitor {
    type Value = LedgerValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a ledger cell")
    }

    fn visit_unit<E>(self) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Empty)
    }

    fn visit_none<E>(self) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<LedgerValue, D::Error> {
        LedgerValue::deserialize(deserializer)
    }

    fn visit_bool<E>(self, v: bool) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Boolean(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Number(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Text(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<LedgerValue, E> {
        Ok(LedgerValue::Text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<LedgerValue, A::Error> {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(LedgerValue::Empty)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<LedgerValue, A::Error> {
        while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
        Ok(LedgerValue::Empty)
    }
}

impl<'de> Deserialize<'de> for LedgerValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LedgerValueVisitor)
    }
}

/// Parses a textual amount as a locale-agnostic float, defaulting to `0.0`.
///
/// Surrounding whitespace is ignored. Thousands separators, currency symbols
/// and anything else `f64::from_str` rejects yield zero, as do `NaN` and
/// infinities.
pub fn parse_amount(raw: &str) -> f64 {
    LedgerValue::Text(raw.to_string()).amount()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_plain_and_padded() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount("  12.5 "), 12.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_amount_falls_back_to_zero() {
        assert_eq!(parse_amount("N/A"), 0.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("   "), 0.0);
        assert_eq!(parse_amount("1,234"), 0.0);
        assert_eq!(parse_amount("$50"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_amount_by_variant() {
        assert_eq!(LedgerValue::Number(80.0).amount(), 80.0);
        assert_eq!(LedgerValue::Number(f64::NAN).amount(), 0.0);
        assert_eq!(LedgerValue::text("20").amount(), 20.0);
        assert_eq!(LedgerValue::Boolean(true).amount(), 0.0);
        assert_eq!(LedgerValue::Empty.amount(), 0.0);
    }

    #[test]
    fn test_try_amount_reports_fallback() {
        assert_eq!(LedgerValue::text("0").try_amount(), Some(0.0));
        assert_eq!(LedgerValue::text("N/A").try_amount(), None);
        assert_eq!(LedgerValue::Empty.try_amount(), None);
    }

    #[test]
    fn test_category_trims_and_rejects_blank() {
        assert_eq!(LedgerValue::text("  Food ").category(), Some("Food".to_string()));
        assert_eq!(LedgerValue::text(" \t ").category(), None);
        assert_eq!(LedgerValue::Empty.category(), None);
        assert_eq!(LedgerValue::Number(2024.0).category(), Some("2024".to_string()));
        assert_eq!(LedgerValue::Number(1.5).category(), Some("1.5".to_string()));
    }

    #[test]
    fn test_deserialize_untagged() {
        let values: Vec<LedgerValue> =
            serde_json::from_str(r#"[null, true, 42, "Lunch"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                LedgerValue::Empty,
                LedgerValue::Boolean(true),
                LedgerValue::Number(42.0),
                LedgerValue::text("Lunch"),
            ]
        );
    }

    #[test]
    fn test_nested_shapes_read_as_empty() {
        let values: Vec<LedgerValue> =
            serde_json::from_str(r#"[[1, 2], {"a": {"b": 3}}, "after"]"#).unwrap();
        assert_eq!(
            values,
            vec![LedgerValue::Empty, LedgerValue::Empty, LedgerValue::text("after")]
        );
    }

    #[test]
    fn test_is_empty() {
        assert!(LedgerValue::Empty.is_empty());
        assert!(LedgerValue::text("  ").is_empty());
        assert!(!LedgerValue::text("Food").is_empty());
        assert!(!LedgerValue::Number(0.0).is_empty());
        assert!(LedgerValue::default().is_empty());
    }

    #[test]
    fn test_serialize_round_trips_scalars() {
        let json = serde_json::to_string(&vec![
            LedgerValue::Empty,
            LedgerValue::Number(1.5),
            LedgerValue::text("x"),
        ])
        .unwrap();
        assert_eq!(json, r#"[null,1.5,"x"]"#);
    }
}
