//! Key-value store types.

use serde::{Deserialize, Serialize};

/// One entry in the platform key-value store.
///
/// # Examples
///
/// ```
/// use blue_models::KvEntry;
///
/// let entry = KvEntry::new("report/latest", "2024-10");
/// assert_eq!(entry.key, "report/latest");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
}

impl KvEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
