//! Credential resolution for the Blue login endpoint.
//!
//! A [`Credentials`] bundle is built once per command and passed by value
//! into [`Session`](crate::Session) / [`BlueClient`](crate::BlueClient);
//! nothing here touches global state. Resolution precedence for every
//! field is: explicit value > environment variable > built-in default.
//!
//! | Variable                       | Description                         |
//! |--------------------------------|-------------------------------------|
//! | `ALPHAUS_CLIENT_ID` / `_SECRET`| generic credentials                 |
//! | `ALPHAUS_USERNAME` / `_PASSWORD`| user credentials (password grant)  |
//! | `ALPHAUS_AUTH_URL`             | login URL override                  |
//! | `ALPHAUS_RIPPLE_*`             | Ripple-specific fallback chain      |
//! | `ALPHAUS_WAVE_*`               | Wave-specific fallback chain        |

use std::env;
use std::fmt;

/// Login endpoint for Ripple accounts.
pub const LOGIN_URL_RIPPLE: &str = "https://login.alphaus.cloud/ripple/access_token";
/// Login endpoint for Wave accounts.
pub const LOGIN_URL_WAVE: &str = "https://login.alphaus.cloud/access_token";
/// Ripple login endpoint on the beta ("next") environment.
pub const LOGIN_URL_RIPPLE_NEXT: &str = "https://loginnext.alphaus.cloud/ripple/access_token";
/// Wave login endpoint on the beta ("next") environment.
pub const LOGIN_URL_WAVE_NEXT: &str = "https://loginnext.alphaus.cloud/access_token";

/// OAuth2 flow variant used to obtain a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrantType {
    /// Machine-to-machine flow using client id/secret only.
    ClientCredentials,
    /// User-credential flow; sends `username` and `password` in the form.
    Password,
}

impl GrantType {
    /// Wire value sent as `grant_type` in the token request.
    pub fn as_str(self) -> &'static str {
        match self {
            GrantType::ClientCredentials => "client_credentials",
            GrantType::Password => "password",
        }
    }
}

impl fmt::Display for GrantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential bundle for authenticating against the Blue login endpoint.
///
/// Held in memory for the process lifetime only; never persisted.
///
/// # Examples
///
/// ```
/// use blue_sdk::{Credentials, GrantType};
///
/// let creds = Credentials {
///     client_id: "cid".into(),
///     client_secret: "secret".into(),
///     ..Credentials::default()
/// };
/// assert_eq!(creds.grant_type(), GrantType::ClientCredentials);
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
    pub username: String,
    pub password: String,
    /// OAuth2 scope; empty means the default `openid`.
    pub scope: String,
    /// Explicit grant type; `None` derives it from username/password.
    pub grant_type: Option<GrantType>,
    /// Login URL; empty means [`LOGIN_URL_RIPPLE`].
    pub login_url: String,
    /// Fixed bearer token. When set, token fetches are bypassed entirely.
    pub access_token: Option<String>,
}

impl Credentials {
    /// Resolve credentials from the environment.
    ///
    /// Tries the generic `ALPHAUS_*` variables first, then the Ripple
    /// chain, then the Wave chain; the login URL follows whichever chain
    /// supplied the credentials unless `ALPHAUS_AUTH_URL` overrides it.
    pub fn from_env() -> Self {
        let mut creds = Self {
            client_id: env_or_empty("ALPHAUS_CLIENT_ID"),
            client_secret: env_or_empty("ALPHAUS_CLIENT_SECRET"),
            username: env_or_empty("ALPHAUS_USERNAME"),
            password: env_or_empty("ALPHAUS_PASSWORD"),
            login_url: env_or_empty("ALPHAUS_AUTH_URL"),
            ..Self::default()
        };

        if creds.client_id.is_empty() || creds.client_secret.is_empty() {
            creds.client_id = env_or_empty("ALPHAUS_RIPPLE_CLIENT_ID");
            creds.client_secret = env_or_empty("ALPHAUS_RIPPLE_CLIENT_SECRET");
            if !creds.client_id.is_empty() && !creds.client_secret.is_empty() {
                creds.username = env_or_empty("ALPHAUS_RIPPLE_USERNAME");
                creds.password = env_or_empty("ALPHAUS_RIPPLE_PASSWORD");
            }
        }

        if creds.client_id.is_empty() || creds.client_secret.is_empty() {
            creds.client_id = env_or_empty("ALPHAUS_WAVE_CLIENT_ID");
            creds.client_secret = env_or_empty("ALPHAUS_WAVE_CLIENT_SECRET");
            if !creds.client_id.is_empty() && !creds.client_secret.is_empty() {
                creds.username = env_or_empty("ALPHAUS_WAVE_USERNAME");
                creds.password = env_or_empty("ALPHAUS_WAVE_PASSWORD");
                if creds.login_url.is_empty() {
                    creds.login_url = LOGIN_URL_WAVE.to_string();
                }
            }
        }

        creds
    }

    /// Effective grant type.
    ///
    /// An explicit override wins; otherwise forced to
    /// [`GrantType::Password`] when both username and password are
    /// non-empty, [`GrantType::ClientCredentials`] otherwise.
    pub fn grant_type(&self) -> GrantType {
        if let Some(grant) = self.grant_type {
            return grant;
        }
        if !self.username.is_empty() && !self.password.is_empty() {
            GrantType::Password
        } else {
            GrantType::ClientCredentials
        }
    }

    /// Effective OAuth2 scope (`openid` unless overridden).
    pub fn scope(&self) -> &str {
        if self.scope.is_empty() {
            "openid"
        } else {
            &self.scope
        }
    }

    /// Effective login URL ([`LOGIN_URL_RIPPLE`] unless overridden).
    pub fn login_url(&self) -> &str {
        if self.login_url.is_empty() {
            LOGIN_URL_RIPPLE
        } else {
            &self.login_url
        }
    }
}

// Secrets stay out of logs; only shapes are shown.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("grant_type", &self.grant_type())
            .field("scope", &self.scope())
            .field("login_url", &self.login_url())
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn env_or_empty(key: &str) -> String {
    env::var(key).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grant_type_defaults_to_client_credentials() {
        let creds = Credentials {
            client_id: "cid".into(),
            client_secret: "secret".into(),
            ..Credentials::default()
        };
        assert_eq!(creds.grant_type(), GrantType::ClientCredentials);
    }

    #[test]
    fn user_and_password_force_password_grant() {
        let creds = Credentials {
            client_id: "cid".into(),
            client_secret: "secret".into(),
            username: "user@example.com".into(),
            password: "hunter2".into(),
            ..Credentials::default()
        };
        assert_eq!(creds.grant_type(), GrantType::Password);
    }

    #[test]
    fn explicit_grant_type_wins_over_derivation() {
        let creds = Credentials {
            username: "user@example.com".into(),
            password: "hunter2".into(),
            grant_type: Some(GrantType::ClientCredentials),
            ..Credentials::default()
        };
        assert_eq!(creds.grant_type(), GrantType::ClientCredentials);
    }

    #[test]
    fn username_alone_is_not_enough_for_password_grant() {
        let creds = Credentials {
            username: "user@example.com".into(),
            ..Credentials::default()
        };
        assert_eq!(creds.grant_type(), GrantType::ClientCredentials);
    }

    #[test]
    fn login_url_falls_back_to_ripple() {
        let creds = Credentials::default();
        assert_eq!(creds.login_url(), LOGIN_URL_RIPPLE);

        let creds = Credentials {
            login_url: "http://localhost:4000/access_token".into(),
            ..Credentials::default()
        };
        assert_eq!(creds.login_url(), "http://localhost:4000/access_token");
    }

    #[test]
    fn scope_falls_back_to_openid() {
        assert_eq!(Credentials::default().scope(), "openid");
        let creds = Credentials {
            scope: "admin".into(),
            ..Credentials::default()
        };
        assert_eq!(creds.scope(), "admin");
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials {
            client_secret: "very-secret".into(),
            password: "hunter2".into(),
            ..Credentials::default()
        };
        let shown = format!("{creds:?}");
        assert!(!shown.contains("very-secret"));
        assert!(!shown.contains("hunter2"));
    }
}
