//! `bluectl ops ...`
//!
//! `ops wait` is the one command with real concurrency: the operation
//! waiter races against a Ctrl-C listener through a shared cancellation
//! token. Interruption is not a failure — the command reports it and
//! exits clean, since the remote operation keeps running either way.

use std::time::Instant;

use anyhow::Result;
use blue_sdk::{wait_for_operation, WaitOptions};
use tokio_util::sync::CancellationToken;

use super::AppContext;

pub async fn list(ctx: &AppContext) -> Result<()> {
    let operations = ctx.client.list_operations().await?;
    ctx.output
        .emit_list(&operations, &["NAME", "DONE"], |op| {
            vec![op.name.clone(), op.done.to_string()]
        })
}

pub async fn get(ctx: &AppContext, name: &str) -> Result<()> {
    let op = ctx.client.get_operation(name).await?;
    ctx.output.emit_one(&op)
}

pub async fn wait(ctx: &AppContext, name: &str) -> Result<()> {
    let started = Instant::now();
    let cancel = CancellationToken::new();

    // Interrupt handler.
    let signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal.cancel();
        }
    });

    tracing::info!("wait for [{name}], this could take some time...");
    match wait_for_operation(ctx.client.clone(), name, cancel, WaitOptions::default()).await? {
        Some(op) => {
            tracing::info!("[{name}] done");
            ctx.output.emit_one(&op)?;
        }
        None => tracing::info!("interrupted"),
    }

    tracing::info!(duration = ?started.elapsed(), "finished");
    Ok(())
}

pub async fn rm(ctx: &AppContext, name: &str) -> Result<()> {
    ctx.client.delete_operation(name).await?;
    tracing::info!("deleted: {name}");
    Ok(())
}
