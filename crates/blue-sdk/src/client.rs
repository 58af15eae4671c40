//! Authenticated HTTP client for the Blue API.
//!
//! [`BlueClient`] owns the transport and a [`Session`]; every request
//! fetches a fresh bearer token through the session at call time (the
//! per-call credential supplier), so there is no token state to refresh
//! or invalidate. Supplying a fixed access token in the credentials
//! bypasses the login round-trip entirely.

use std::time::Duration;

use async_trait::async_trait;
use blue_models::{
    IamUser, KvEntry, NotificationChannel, Operation, OrgInfo, TagCost, UserIdentity,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::credentials::Credentials;
use crate::error::SdkError;
use crate::ops::OperationsApi;
use crate::session::Session;

/// Blue API endpoint behind the global load balancer.
pub const BLUE_API_ENDPOINT: &str = "https://api.alphaus.cloud/m/blue";
/// Blue API endpoint on the beta ("next") environment.
pub const BLUE_API_ENDPOINT_NEXT: &str = "https://apinext.alphaus.cloud/m/blue";

/// An authenticated Blue API client.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Examples
///
/// ```rust,no_run
/// use blue_sdk::{BlueClient, Credentials};
///
/// # async fn run() -> Result<(), blue_sdk::SdkError> {
/// let client = BlueClient::new(Credentials::from_env());
/// for user in client.list_users().await? {
///     println!("{} {}", user.id, user.email);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlueClient {
    http: reqwest::Client,
    session: Session,
    base_url: String,
}

impl BlueClient {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Build a client for the endpoint matching the credentials.
    ///
    /// Targets the beta endpoint when the login URL points at the "next"
    /// environment, the global endpoint otherwise.
    pub fn new(creds: Credentials) -> Self {
        let base_url = if creds.login_url().contains("next") {
            BLUE_API_ENDPOINT_NEXT
        } else {
            BLUE_API_ENDPOINT
        };
        Self::with_base_url(creds, base_url)
    }

    /// Build a client against an explicit API base URL.
    pub fn with_base_url(creds: Credentials, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            session: Session::new(creds),
            base_url: base_url.into(),
        }
    }

    /// The session used to authenticate outbound calls.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ------------------------------------------------------------------
    // Identity & IAM
    // ------------------------------------------------------------------

    /// Identity of the authenticated caller.
    pub async fn whoami(&self) -> Result<UserIdentity, SdkError> {
        self.get_json("/iam/v1/whoami").await
    }

    /// IAM subusers under the caller's organization.
    pub async fn list_users(&self) -> Result<Vec<IamUser>, SdkError> {
        self.get_json("/iam/v1/users").await
    }

    /// A single IAM subuser.
    pub async fn get_user(&self, id: &str) -> Result<IamUser, SdkError> {
        let id = required(id, "user id")?;
        self.get_json(&format!("/iam/v1/users/{id}")).await
    }

    /// Organization information of the caller.
    pub async fn get_org(&self) -> Result<OrgInfo, SdkError> {
        self.get_json("/org/v1").await
    }

    // ------------------------------------------------------------------
    // Cost
    // ------------------------------------------------------------------

    /// Tag costs for a billing group over an inclusive date range
    /// (`YYYYMMDD`).
    pub async fn tag_costs(
        &self,
        group: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<TagCost>, SdkError> {
        let group = required(group, "billing group")?;
        self.get_json_query(
            &format!("/cost/v1/tags/{group}"),
            &[("startTime", start), ("endTime", end)],
        )
        .await
    }

    // ------------------------------------------------------------------
    // Key-value store
    // ------------------------------------------------------------------

    /// Scan keys, optionally filtered by a SQL-LIKE pattern.
    pub async fn scan_kv(&self, like: Option<&str>) -> Result<Vec<KvEntry>, SdkError> {
        match like {
            Some(pattern) => {
                self.get_json_query("/kvstore/v1", &[("like", pattern)])
                    .await
            }
            None => self.get_json("/kvstore/v1").await,
        }
    }

    /// Read one key.
    pub async fn read_kv(&self, key: &str) -> Result<KvEntry, SdkError> {
        let key = required(key, "key")?;
        self.get_json(&format!("/kvstore/v1/{key}")).await
    }

    /// Write (create or update) one entry.
    pub async fn write_kv(&self, entry: &KvEntry) -> Result<KvEntry, SdkError> {
        required(&entry.key, "key")?;
        self.post_json("/kvstore/v1", entry).await
    }

    /// Delete one key.
    pub async fn delete_kv(&self, key: &str) -> Result<(), SdkError> {
        let key = required(key, "key")?;
        self.delete(&format!("/kvstore/v1/{key}")).await
    }

    // ------------------------------------------------------------------
    // Notifications
    // ------------------------------------------------------------------

    /// Configured notification channels.
    pub async fn list_channels(&self) -> Result<Vec<NotificationChannel>, SdkError> {
        self.get_json("/admin/v1/notifications/channels").await
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// All long-running operations visible to the caller.
    pub async fn list_operations(&self) -> Result<Vec<Operation>, SdkError> {
        self.get_json("/ops/v1").await
    }

    /// A single long-running operation.
    pub async fn get_operation(&self, name: &str) -> Result<Operation, SdkError> {
        let name = required(name, "operation name")?;
        self.get_json(&format!("/ops/v1/{name}")).await
    }

    /// Delete a long-running operation.
    pub async fn delete_operation(&self, name: &str) -> Result<(), SdkError> {
        let name = required(name, "operation name")?;
        self.delete(&format!("/ops/v1/{name}")).await
    }

    // ------------------------------------------------------------------
    // Request plumbing
    // ------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.base_url))
            .bearer_auth(self.session.bearer().await?)
            .send()
            .await?;
        decode(resp).await
    }

    async fn get_json_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, SdkError> {
        let resp = self
            .http
            .get(format!("{}{path}", self.base_url))
            .query(query)
            .bearer_auth(self.session.bearer().await?)
            .send()
            .await?;
        decode(resp).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SdkError> {
        let resp = self
            .http
            .post(format!("{}{path}", self.base_url))
            .bearer_auth(self.session.bearer().await?)
            .json(body)
            .send()
            .await?;
        decode(resp).await
    }

    async fn delete(&self, path: &str) -> Result<(), SdkError> {
        let resp = self
            .http
            .delete(format!("{}{path}", self.base_url))
            .bearer_auth(self.session.bearer().await?)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}

#[async_trait]
impl OperationsApi for BlueClient {
    /// Long-poll the server for completion of `name`.
    ///
    /// The timeout rides along as a duration hint (`"240s"`); the server
    /// holds the request open up to that long before answering
    /// `done=false`.
    async fn wait_operation(
        &self,
        name: &str,
        timeout: Duration,
    ) -> Result<Operation, SdkError> {
        let name = required(name, "operation name")?;
        let hint = format!("{}s", timeout.as_secs());
        self.post_json(
            &format!("/ops/v1/{name}:wait"),
            &serde_json::json!({ "timeout": hint }),
        )
        .await
    }
}

fn required<'a>(value: &'a str, what: &str) -> Result<&'a str, SdkError> {
    if value.is_empty() {
        return Err(SdkError::InvalidArgument(format!("{what} cannot be empty")));
    }
    Ok(value)
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, SdkError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let line = match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    };
    let body = resp.text().await.unwrap_or_default();
    Err(SdkError::ApiStatus { status: line, body })
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, SdkError> {
    let resp = check_status(resp).await?;
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}
