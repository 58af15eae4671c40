//! `bluectl` — command-line interface for Alphaus Blue services.

mod cli;
mod commands;
mod config;
mod output;

use std::process;

use anyhow::Result;
use blue_sdk::BlueClient;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{
    ChannelsCommand, Cli, Command, CostCommand, IamCommand, IamUsersCommand, KvCommand,
    NotificationsCommand, OpsCommand, OrgCommand,
};
use crate::commands::AppContext;
use crate::output::OutputOptions;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.bare);

    if let Err(err) = run(cli).await {
        tracing::error!("{err:#}");
        process::exit(1);
    }
}

fn init_tracing(bare: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);
    if bare {
        builder.without_time().with_level(false).init();
    } else {
        builder.init();
    }
}

async fn run(cli: Cli) -> Result<()> {
    let creds = config::resolve_credentials(&cli)?;
    let client = match &cli.api_url {
        Some(base) => BlueClient::with_base_url(creds, base.clone()),
        None => BlueClient::new(creds),
    };

    let ctx = AppContext {
        client,
        output: OutputOptions {
            format: cli.outfmt,
            out: cli.out.clone(),
        },
    };

    match &cli.command {
        Command::AccessToken => commands::token::access_token(&ctx).await,
        Command::Whoami => commands::identity::whoami(&ctx).await,
        Command::Iam {
            command: IamCommand::Users { command },
        } => match command {
            IamUsersCommand::List => commands::identity::users_list(&ctx).await,
            IamUsersCommand::Get { id } => commands::identity::users_get(&ctx, id).await,
        },
        Command::Org {
            command: OrgCommand::Get,
        } => commands::identity::org_get(&ctx).await,
        Command::Cost {
            command: CostCommand::Tags(args),
        } => commands::cost::tags(&ctx, args).await,
        Command::Kv { command } => match command {
            KvCommand::Scan { like } => commands::kv::scan(&ctx, like.as_deref()).await,
            KvCommand::Read { key } => commands::kv::read(&ctx, key).await,
            KvCommand::Write(args) => commands::kv::write(&ctx, args).await,
            KvCommand::Rm { key } => commands::kv::rm(&ctx, key).await,
        },
        Command::Notifications {
            command:
                NotificationsCommand::Channels {
                    command: ChannelsCommand::List,
                },
        } => commands::notifications::channels_list(&ctx).await,
        Command::Ops { command } => match command {
            OpsCommand::List => commands::ops::list(&ctx).await,
            OpsCommand::Get { name } => commands::ops::get(&ctx, name).await,
            OpsCommand::Wait { name } => commands::ops::wait(&ctx, name).await,
            OpsCommand::Rm { name } => commands::ops::rm(&ctx, name).await,
        },
    }
}
