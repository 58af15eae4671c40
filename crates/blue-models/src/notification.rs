//! Notification channel types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A configured notification target (email, Slack webhook, etc.).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NotificationChannel {
    pub id: String,
    /// Channel kind, e.g. `email`, `slack`.
    #[serde(default)]
    pub channel_type: String,
    /// Destination address or webhook URL.
    #[serde(default)]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
