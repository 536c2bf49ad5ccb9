use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Catalog(args) => commands::catalog::handle(&args, ctx, flags),
        Commands::Login(args) => commands::login::handle(&args, ctx, flags),
        Commands::Audit(args) => commands::audit::handle(&args, ctx, flags).await,
        Commands::Run(args) => commands::run::handle(&args, ctx, flags).await,
    }
}
