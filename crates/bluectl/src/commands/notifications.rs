//! `bluectl notifications channels ...`

use anyhow::Result;

use super::AppContext;

pub async fn channels_list(ctx: &AppContext) -> Result<()> {
    let channels = ctx.client.list_channels().await?;
    ctx.output
        .emit_list(&channels, &["ID", "TYPE", "ENDPOINT"], |c| {
            vec![c.id.clone(), c.channel_type.clone(), c.endpoint.clone()]
        })
}
