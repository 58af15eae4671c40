//! Tag-level cost records.

use serde::{Deserialize, Serialize};

/// Daily cost attributed to a resource tag within a billing group.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TagCost {
    /// Billing group the cost belongs to.
    #[serde(default)]
    pub group: String,
    /// Tag key/value in `key:value` form.
    pub tag: String,
    /// Usage date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub usage_amount: f64,
    #[serde(default)]
    pub cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_defaults_to_zero() {
        let c: TagCost =
            serde_json::from_str(r#"{"tag":"env:prod","date":"2024-10-01"}"#).unwrap();
        assert_eq!(c.cost, 0.0);
        assert_eq!(c.usage_amount, 0.0);
    }
}
