//! `bluectl access-token`

use std::io::Write;

use anyhow::Result;

use super::AppContext;

/// Print a bearer token for the configured credentials.
///
/// No trailing newline so the output can be substituted directly into an
/// `Authorization` header.
pub async fn access_token(ctx: &AppContext) -> Result<()> {
    let token = ctx.client.session().access_token().await?;
    print!("{token}");
    std::io::stdout().flush()?;
    Ok(())
}
