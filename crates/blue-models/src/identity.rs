//! Caller identity and IAM user types.

use serde::{Deserialize, Serialize};

/// Identity of the authenticated caller, as reported by `whoami`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserIdentity {
    /// User id within the parent organization.
    pub id: String,
    /// Owning organization or parent account id.
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub email: String,
    /// Free-form attributes attached to the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

/// An IAM subuser under the caller's organization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IamUser {
    pub id: String,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_tolerates_missing_optional_fields() {
        let who: UserIdentity = serde_json::from_str(r#"{"id":"user-1"}"#).unwrap();
        assert_eq!(who.id, "user-1");
        assert!(who.parent.is_empty());
        assert!(who.metadata.is_none());
    }
}
