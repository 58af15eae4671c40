//! `bluectl whoami`, `bluectl iam users ...`, `bluectl org get`

use anyhow::Result;

use super::AppContext;

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let who = ctx.client.whoami().await?;
    ctx.output.emit_one(&who)
}

pub async fn users_list(ctx: &AppContext) -> Result<()> {
    let users = ctx.client.list_users().await?;
    ctx.output
        .emit_list(&users, &["ID", "PARENT", "EMAIL"], |u| {
            vec![u.id.clone(), u.parent.clone(), u.email.clone()]
        })
}

pub async fn users_get(ctx: &AppContext, id: &str) -> Result<()> {
    let user = ctx.client.get_user(id).await?;
    ctx.output.emit_one(&user)
}

pub async fn org_get(ctx: &AppContext) -> Result<()> {
    let org = ctx.client.get_org().await?;
    ctx.output.emit_one(&org)
}
