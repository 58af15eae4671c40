//! `bluectl cost tags`

use anyhow::Result;

use super::AppContext;
use crate::cli::CostTagsArgs;

pub async fn tags(ctx: &AppContext, args: &CostTagsArgs) -> Result<()> {
    let costs = ctx
        .client
        .tag_costs(&args.group, &args.start, &args.end)
        .await?;
    ctx.output.emit_list(
        &costs,
        &["GROUP", "TAG", "DATE", "USAGE", "COST"],
        |c| {
            vec![
                c.group.clone(),
                c.tag.clone(),
                c.date.clone(),
                format!("{:.9}", c.usage_amount),
                format!("{:.9}", c.cost),
            ]
        },
    )
}
