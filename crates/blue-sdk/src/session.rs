//! OAuth2 session / token provider for the Blue login endpoint.
//!
//! A [`Session`] performs one form-encoded POST per
//! [`access_token`](Session::access_token) call and extracts the
//! `access_token` field from the JSON response. There is no token cache
//! and no retry: every invocation re-authenticates, and failures
//! propagate to the caller immediately.

use std::time::Duration;

use crate::credentials::Credentials;
use crate::error::SdkError;

/// Client-side bound on the token request, matching the platform default.
const LOGIN_TIMEOUT: Duration = Duration::from_secs(60);

/// Token provider for the Blue login endpoint.
///
/// # Examples
///
/// ```rust,no_run
/// use blue_sdk::{Credentials, Session};
///
/// # async fn run() -> Result<(), blue_sdk::SdkError> {
/// let session = Session::new(Credentials::from_env());
/// let token = session.access_token().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    creds: Credentials,
    http: reqwest::Client,
}

impl Session {
    /// Build a session over the given credentials.
    pub fn new(creds: Credentials) -> Self {
        Self {
            creds,
            http: reqwest::Client::new(),
        }
    }

    /// Credentials this session authenticates with.
    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    /// Fetch a fresh access token from the login endpoint.
    ///
    /// Sends `client_id`, `client_secret`, `grant_type` and `scope`
    /// form-encoded, plus `username`/`password` for the password grant.
    /// Fails with [`SdkError::AuthenticationFailed`] on a non-2xx status
    /// (carrying the status line) and [`SdkError::InvalidResponse`] when
    /// the 2xx body is not JSON or has no `access_token`.
    pub async fn access_token(&self) -> Result<String, SdkError> {
        let grant = self.creds.grant_type();
        let mut form = vec![
            ("client_id", self.creds.client_id.as_str()),
            ("client_secret", self.creds.client_secret.as_str()),
            ("grant_type", grant.as_str()),
            ("scope", self.creds.scope()),
        ];
        if grant == crate::credentials::GrantType::Password {
            form.push(("username", self.creds.username.as_str()));
            form.push(("password", self.creds.password.as_str()));
        }

        let resp = self
            .http
            .post(self.creds.login_url())
            .timeout(LOGIN_TIMEOUT)
            .form(&form)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SdkError::AuthenticationFailed(status_line(status)));
        }

        let text = resp.text().await?;
        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|_| SdkError::InvalidResponse("response body is not valid JSON".into()))?;

        body["access_token"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| SdkError::InvalidResponse("cannot find access token".into()))
    }

    /// Produce the token to attach to an outbound call.
    ///
    /// Returns the fixed token without any network round-trip when one was
    /// supplied in the credentials; fetches fresh otherwise.
    pub async fn bearer(&self) -> Result<String, SdkError> {
        match &self.creds.access_token {
            Some(token) => Ok(token.clone()),
            None => self.access_token().await,
        }
    }
}

/// Render a status line like `401 Unauthorized`.
fn status_line(status: reqwest::StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {reason}", status.as_u16()),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use httpmock::prelude::*;
    use serde_json::json;

    fn session_for(server: &MockServer, username: &str, password: &str) -> Session {
        Session::new(Credentials {
            client_id: "cid".into(),
            client_secret: "sec".into(),
            username: username.into(),
            password: password.into(),
            login_url: format!("{}/access_token", server.base_url()),
            ..Credentials::default()
        })
    }

    #[tokio::test]
    async fn client_credentials_request_shape() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/access_token")
                .body_includes("grant_type=client_credentials")
                .body_includes("client_id=cid")
                .body_includes("client_secret=sec")
                .body_includes("scope=openid");
            then.status(200).json_body(json!({"access_token": "tok"}));
        });

        let token = session_for(&server, "", "").access_token().await.unwrap();
        assert_eq!(token, "tok");
        mock.assert();
    }

    #[tokio::test]
    async fn password_grant_sends_username_and_password() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/access_token")
                .body_includes("grant_type=password")
                .body_includes("username=user%40example.com")
                .body_includes("password=hunter2");
            then.status(200).json_body(json!({"access_token": "tok"}));
        });

        let token = session_for(&server, "user@example.com", "hunter2")
            .access_token()
            .await
            .unwrap();
        assert_eq!(token, "tok");
        mock.assert();
    }

    #[tokio::test]
    async fn client_credentials_request_omits_user_fields() {
        let server = MockServer::start_async().await;
        // Exact body match: proves username/password are absent.
        let mock = server.mock(|when, then| {
            when.method(POST).path("/access_token").body(
                "client_id=cid&client_secret=sec&grant_type=client_credentials&scope=openid",
            );
            then.status(200).json_body(json!({"access_token": "tok"}));
        });

        session_for(&server, "", "").access_token().await.unwrap();
        mock.assert();
    }

    #[tokio::test]
    async fn non_2xx_fails_with_status_line() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/access_token");
            then.status(401).json_body(json!({}));
        });

        let err = session_for(&server, "", "").access_token().await.unwrap_err();
        match &err {
            SdkError::AuthenticationFailed(line) => assert!(line.contains("401")),
            other => panic!("expected AuthenticationFailed, got {other:?}"),
        }
        assert!(err.to_string().contains("401"));
    }

    #[tokio::test]
    async fn missing_token_field_is_invalid_response() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/access_token");
            then.status(200).json_body(json!({"foo": "bar"}));
        });

        let err = session_for(&server, "", "").access_token().await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn non_json_body_is_invalid_response() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/access_token");
            then.status(200).body("<html>welcome</html>");
        });

        let err = session_for(&server, "", "").access_token().await.unwrap_err();
        assert!(matches!(err, SdkError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn token_success_returns_exact_token() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/access_token");
            then.status(200).json_body(json!({"access_token": "abc123"}));
        });

        let token = session_for(&server, "", "").access_token().await.unwrap();
        assert_eq!(token, "abc123");
    }

    #[tokio::test]
    async fn fixed_token_bypasses_login() {
        let server = MockServer::start_async().await;
        let login = server.mock(|when, then| {
            when.method(POST).path("/access_token");
            then.status(200).json_body(json!({"access_token": "fresh"}));
        });

        let session = Session::new(Credentials {
            login_url: format!("{}/access_token", server.base_url()),
            access_token: Some("pinned".into()),
            ..Credentials::default()
        });

        assert_eq!(session.bearer().await.unwrap(), "pinned");
        assert_eq!(login.hits(), 0);
    }
}
