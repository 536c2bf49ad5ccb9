use std::path::Path;

use anyhow::Context;
use tally_session::AuditFlow;
use tally_suggest::FallbackGenerator;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output_report;
use crate::progress::Progress;

/// Finish a completed session, print the report and optionally write the
/// Markdown document to `print`. A suggestion client that cannot be built
/// is logged and replaced by [`FallbackGenerator`].
pub async fn finish_and_report(
    flow: &mut AuditFlow,
    ctx: &AppContext,
    flags: &GlobalFlags,
    print: Option<&Path>,
) -> anyhow::Result<()> {
    let client = match ctx.suggester() {
        Ok(client) => {
            if !client.is_configured() {
                tracing::warn!(
                    "no Gemini API key configured; the report will carry a fallback message"
                );
            }
            Some(client)
        }
        Err(err) => {
            tracing::error!(error = format!("{err:#}"), "suggestion client unavailable");
            None
        }
    };

    let spinner = Progress::spinner("Generating action plan...");
    let report = match &client {
        Some(client) => flow.finish(client).await?,
        None => flow.finish(&FallbackGenerator).await?,
    };
    spinner.finish_clear();

    output_report(report, flags.format)?;

    if let Some(path) = print {
        std::fs::write(path, report.to_markdown())
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        if !flags.quiet {
            eprintln!("Report written to {}", path.display());
        }
    }

    Ok(())
}
