//! `bluectl kv ...`

use anyhow::{bail, Context, Result};
use blue_models::KvEntry;

use super::AppContext;
use crate::cli::KvWriteArgs;

pub async fn scan(ctx: &AppContext, like: Option<&str>) -> Result<()> {
    let entries = ctx.client.scan_kv(like).await?;
    ctx.output.emit_list(&entries, &["KEY", "VALUE"], |e| {
        vec![e.key.clone(), e.value.clone()]
    })
}

pub async fn read(ctx: &AppContext, key: &str) -> Result<()> {
    let entry = ctx.client.read_kv(key).await?;
    ctx.output.emit_one(&entry)
}

pub async fn write(ctx: &AppContext, args: &KvWriteArgs) -> Result<()> {
    let value = match (&args.value, &args.file) {
        (Some(v), None) => v.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?,
        (None, None) => bail!("either <value> or --file is required"),
        // clap rejects the combination already
        (Some(_), Some(_)) => unreachable!(),
    };

    let written = ctx
        .client
        .write_kv(&KvEntry::new(args.key.clone(), value))
        .await?;
    tracing::info!(key = %written.key, "written");
    Ok(())
}

pub async fn rm(ctx: &AppContext, key: &str) -> Result<()> {
    ctx.client.delete_kv(key).await?;
    tracing::info!(%key, "deleted");
    Ok(())
}
