use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    name: String,
    username: String,
}

pub fn handle(args: &LoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx
        .directory
        .authenticate(&args.username, &args.password)
        .context("login failed")?;

    output(
        &LoginResponse {
            authenticated: true,
            name: identity.name,
            username: identity.username,
        },
        flags.format,
    )
}
