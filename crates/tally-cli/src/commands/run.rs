//! Scripted audits from an answers file.
//!
//! ```toml
//! [[answers]]
//! item = 1
//! status = "pass"
//!
//! [[answers]]
//! item = 14
//! status = "fail"
//! comment = "Bin lid missing"
//! photo = "photos/bin.jpg"   # relative to the answers file
//! ```
//!
//! JSON files use the same shape: `{"answers": [{"item": 1, "status": "pass"}]}`.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Local;
use serde::Deserialize;
use tally_core::entities::AuditResult;
use tally_core::enums::AuditStatus;
use tally_session::AuditFlow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RunArgs;
use crate::commands::shared::finish::finish_and_report;
use crate::commands::shared::parse::resolve_branch;
use crate::commands::shared::photo::encode_photo;
use crate::context::AppContext;

#[derive(Debug, Default, Deserialize)]
struct AnswersFile {
    #[serde(default)]
    answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
struct Answer {
    item: u32,
    status: AuditStatus,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    photo: Option<PathBuf>,
}

pub async fn handle(args: &RunArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx
        .directory
        .authenticate(&args.username, &args.password)
        .context("login failed")?;
    let branch = resolve_branch(Some(&args.branch), &ctx.config.general.default_branch)?;
    let answers = load_answers(&args.answers)?;

    let mut flow = ctx.flow();
    flow.select_branch(branch, &identity, Local::now().fixed_offset())?;

    let base_dir = args.answers.parent().unwrap_or_else(|| Path::new("."));
    apply_answers(&mut flow, &answers, base_dir)?;
    ensure_complete(&flow)?;

    finish_and_report(&mut flow, ctx, flags, args.print.as_deref()).await
}

fn load_answers(path: &Path) -> anyhow::Result<AnswersFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    parse_answers(&raw, is_json).with_context(|| format!("invalid answers file {}", path.display()))
}

fn parse_answers(raw: &str, is_json: bool) -> anyhow::Result<AnswersFile> {
    if is_json {
        Ok(serde_json::from_str(raw)?)
    } else {
        Ok(toml::from_str(raw)?)
    }
}

/// Record every answer in file order. Later answers for the same item
/// overwrite earlier ones; `status = "none"` clears an earlier answer.
fn apply_answers(flow: &mut AuditFlow, file: &AnswersFile, base_dir: &Path) -> anyhow::Result<()> {
    for answer in &file.answers {
        let photo = answer
            .photo
            .as_deref()
            .map(|path| encode_photo(&base_dir.join(path)))
            .transpose()?;

        flow.set_result(AuditResult {
            item_id: answer.item,
            status: answer.status,
            comment: answer.comment.clone(),
            photo,
        })?;
    }
    Ok(())
}

fn ensure_complete(flow: &AuditFlow) -> anyhow::Result<()> {
    if flow.is_complete() {
        return Ok(());
    }
    let card = flow.score_card();
    anyhow::bail!(
        "audit incomplete: {} of {} items answered and no zero-tolerance failure recorded",
        card.answered,
        card.total
    )
}
