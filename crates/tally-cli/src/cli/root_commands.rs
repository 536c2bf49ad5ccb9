use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List checklist items.
    Catalog(CatalogArgs),
    /// Run an interactive audit from the terminal.
    Audit(AuditArgs),
    /// Run a scripted audit from an answers file.
    Run(RunArgs),
    /// Check auditor credentials.
    Login(LoginArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CatalogArgs {
    /// Only list one tier: zero-tolerance, operational.
    #[arg(long)]
    pub tier: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuditArgs {
    /// Branch to audit: nugegoda, port-city, borella. Falls back to
    /// `general.default_branch`.
    #[arg(short, long)]
    pub branch: Option<String>,
    /// Auditor username (prompted when omitted).
    #[arg(short, long)]
    pub username: Option<String>,
    /// Also write the printable Markdown report to this path.
    #[arg(long)]
    pub print: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct RunArgs {
    /// TOML or JSON file with `[[answers]]` entries.
    #[arg(short, long)]
    pub answers: PathBuf,
    /// Branch to audit: nugegoda, port-city, borella.
    #[arg(short, long)]
    pub branch: String,
    /// Auditor username.
    #[arg(short, long)]
    pub username: String,
    /// Auditor password.
    #[arg(long)]
    pub password: String,
    /// Also write the printable Markdown report to this path.
    #[arg(long)]
    pub print: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct LoginArgs {
    /// Auditor username.
    #[arg(short, long)]
    pub username: String,
    /// Auditor password.
    #[arg(long)]
    pub password: String,
}
