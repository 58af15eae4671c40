//! Organization types.

use serde::{Deserialize, Serialize};

/// Organization information for the authenticated caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OrgInfo {
    pub id: String,
    #[serde(default)]
    pub email: String,
    /// Subscription plan identifier, e.g. `STANDARD`.
    #[serde(default)]
    pub plan: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}
