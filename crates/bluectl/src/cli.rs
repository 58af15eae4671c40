//! Command-line definitions for `bluectl`.
//!
//! The general form is `bluectl <resource[ subresource...]> <action>
//! [flags]`. Global flags cover credential selection and output shaping;
//! per-command flags stay next to their command.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// How results are rendered.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One JSON object per result (pretty-printed for single results).
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Aligned columns for reading in a terminal.
    Table,
}

#[derive(Parser, Debug)]
#[command(name = "bluectl")]
#[command(version)]
#[command(about = "Command-line interface for Alphaus Blue services")]
#[command(
    long_about = "Command-line interface for Alphaus Blue services.\n\n\
The general form is `bluectl <resource[ subresource...]> <action> [flags]`.\n\
Credentials resolve as: flag > profile in ~/.config/alphaus/config.toml >\n\
environment variable > built-in default."
)]
pub struct Cli {
    /// Profile name in ~/.config/alphaus/config.toml; `default` is assumed
    /// when the file exists and no profile is named.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Authentication URL; falls back to $ALPHAUS_AUTH_URL.
    #[arg(long, global = true)]
    pub auth_url: Option<String>,

    /// Client id; falls back to $ALPHAUS_CLIENT_ID.
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Client secret; falls back to $ALPHAUS_CLIENT_SECRET.
    #[arg(long, global = true)]
    pub client_secret: Option<String>,

    /// API base URL override, for targeting a local mock platform.
    #[arg(long, global = true, env = "ALPHAUS_API_URL")]
    pub api_url: Option<String>,

    /// Output file, if the command supports writing to file.
    #[arg(long, global = true)]
    pub out: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub outfmt: OutputFormat,

    /// Barebones console output, easier for scripting.
    #[arg(long, global = true)]
    pub bare: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get an access token for the configured credentials
    AccessToken,
    /// Get my information as a user
    Whoami,
    /// Subcommands for IAM
    Iam {
        #[command(subcommand)]
        command: IamCommand,
    },
    /// Subcommands for your organization
    Org {
        #[command(subcommand)]
        command: OrgCommand,
    },
    /// Subcommands for costs
    Cost {
        #[command(subcommand)]
        command: CostCommand,
    },
    /// Subcommands for the key-value store
    Kv {
        #[command(subcommand)]
        command: KvCommand,
    },
    /// Subcommands for notifications
    Notifications {
        #[command(subcommand)]
        command: NotificationsCommand,
    },
    /// Subcommands for long-running operations
    Ops {
        #[command(subcommand)]
        command: OpsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum IamCommand {
    /// Subcommands for IAM users
    Users {
        #[command(subcommand)]
        command: IamUsersCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum IamUsersCommand {
    /// List IAM users
    List,
    /// Get a single IAM user
    Get { id: String },
}

#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// Get organization information
    Get,
}

#[derive(Subcommand, Debug)]
pub enum CostCommand {
    /// Read tag costs of a billing group
    Tags(CostTagsArgs),
}

#[derive(Args, Debug)]
pub struct CostTagsArgs {
    /// Billing group id
    pub group: String,
    /// Start date, YYYYMMDD
    #[arg(long)]
    pub start: String,
    /// End date, YYYYMMDD
    #[arg(long)]
    pub end: String,
}

#[derive(Subcommand, Debug)]
pub enum KvCommand {
    /// Scan keys in your store; [like] is translated as SQL's LIKE
    Scan { like: Option<String> },
    /// Read a key:value
    Read { key: String },
    /// Write a key:value
    Write(KvWriteArgs),
    /// Delete a key
    Rm { key: String },
}

#[derive(Args, Debug)]
pub struct KvWriteArgs {
    pub key: String,
    /// Value to store; mutually exclusive with --file
    pub value: Option<String>,
    /// Read the value from this file instead
    #[arg(long, conflicts_with = "value")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum NotificationsCommand {
    /// Subcommands for notification channels
    Channels {
        #[command(subcommand)]
        command: ChannelsCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum ChannelsCommand {
    /// List notification channels
    List,
}

#[derive(Subcommand, Debug)]
pub enum OpsCommand {
    /// List long-running operations
    List,
    /// Query a long-running operation
    Get { name: String },
    /// Wait for a long-running operation to finish
    Wait { name: String },
    /// Delete a long-running operation
    Rm { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ops_wait() {
        let cli = Cli::try_parse_from(["bluectl", "ops", "wait", "operations/calc-1"]).unwrap();
        match cli.command {
            Command::Ops {
                command: OpsCommand::Wait { name },
            } => assert_eq!(name, "operations/calc-1"),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn parses_global_credential_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "bluectl",
            "whoami",
            "--client-id",
            "cid",
            "--client-secret",
            "sec",
            "--outfmt",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.client_id.as_deref(), Some("cid"));
        assert_eq!(cli.outfmt, OutputFormat::Json);
    }

    #[test]
    fn kv_write_value_conflicts_with_file() {
        let err = Cli::try_parse_from([
            "bluectl", "kv", "write", "k", "v", "--file", "path.txt",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn kv_scan_pattern_is_optional() {
        let cli = Cli::try_parse_from(["bluectl", "kv", "scan"]).unwrap();
        match cli.command {
            Command::Kv {
                command: KvCommand::Scan { like },
            } => assert!(like.is_none()),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn outfmt_defaults_to_table() {
        let cli = Cli::try_parse_from(["bluectl", "ops", "list"]).unwrap();
        assert_eq!(cli.outfmt, OutputFormat::Table);
    }
}
