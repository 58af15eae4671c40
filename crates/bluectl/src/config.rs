//! Credential resolution for the CLI.
//!
//! Layers, weakest first: built-in defaults, environment variables
//! (resolved by the SDK), the selected profile in
//! `~/.config/alphaus/config.toml`, explicit command-line flags.
//!
//! The profile file is a TOML table of named profiles:
//!
//! ```toml
//! [default]
//! client-id = "..."
//! client-secret = "..."
//!
//! [staging]
//! client-id = "..."
//! client-secret = "..."
//! auth-url = "https://loginnext.alphaus.cloud/ripple/access_token"
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use blue_sdk::Credentials;
use serde::Deserialize;

use crate::cli::Cli;

#[derive(Deserialize, Debug, Default)]
struct ProfileEntry {
    #[serde(rename = "client-id")]
    client_id: Option<String>,
    #[serde(rename = "client-secret")]
    client_secret: Option<String>,
    #[serde(rename = "auth-url")]
    auth_url: Option<String>,
}

/// Location of the profile file, `~/.config/alphaus/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("alphaus").join("config.toml"))
}

/// Resolve effective credentials for this invocation.
///
/// Starts from the environment, overlays the selected profile (or
/// `default` when the file exists and none was named), then overlays
/// explicit flags. Naming a profile that the file does not contain is an
/// error.
pub fn resolve_credentials(cli: &Cli) -> Result<Credentials> {
    let mut creds = Credentials::from_env();

    let path = config_path();
    let file_exists = path.as_deref().is_some_and(std::path::Path::exists);
    let profile = match (&cli.profile, file_exists) {
        (Some(name), _) => Some(name.clone()),
        (None, true) => Some("default".to_string()),
        (None, false) => None,
    };

    if let Some(name) = profile {
        let path = path.context("cannot determine home directory")?;
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        apply_profile(&mut creds, &text, &name)
            .with_context(|| format!("in {}", path.display()))?;
    }

    if let Some(v) = &cli.client_id {
        creds.client_id = v.clone();
    }
    if let Some(v) = &cli.client_secret {
        creds.client_secret = v.clone();
    }
    if let Some(v) = &cli.auth_url {
        creds.login_url = v.clone();
    }

    Ok(creds)
}

/// Overlay one named profile from the given TOML text onto `creds`.
fn apply_profile(creds: &mut Credentials, text: &str, name: &str) -> Result<()> {
    let profiles: HashMap<String, ProfileEntry> =
        toml::from_str(text).context("profile file is not valid TOML")?;

    let Some(entry) = profiles.get(name) else {
        bail!("[{name}] profile not found");
    };

    if let Some(v) = &entry.client_id {
        creds.client_id = v.clone();
    }
    if let Some(v) = &entry.client_secret {
        creds.client_secret = v.clone();
    }
    if let Some(v) = &entry.auth_url {
        creds.login_url = v.clone();
    }

    Ok(())
}
