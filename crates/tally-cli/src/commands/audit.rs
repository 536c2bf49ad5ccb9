//! Interactive terminal audit.
//!
//! Prompts go to stderr so the final report on stdout can be piped.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Context;
use chrono::Local;
use tally_auth::{AuthError, Directory};
use tally_core::entities::ChecklistItem;
use tally_core::identity::AuditorIdentity;
use tally_session::AuditFlow;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AuditArgs;
use crate::commands::shared::finish::finish_and_report;
use crate::commands::shared::parse::resolve_branch;
use crate::commands::shared::photo::encode_photo;
use crate::context::AppContext;

pub async fn handle(args: &AuditArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let branch = resolve_branch(args.branch.as_deref(), &ctx.config.general.default_branch)?;

    let mut flow = ctx.flow();
    {
        let mut input = std::io::stdin().lock();
        let mut out = std::io::stderr().lock();

        let identity = login(&ctx.directory, args.username.as_deref(), &mut input, &mut out)?;
        let session = flow.select_branch(branch, &identity, Local::now().fixed_offset())?;
        writeln!(
            out,
            "\n{} Branch audit by {} on {} at {}\n",
            branch.label(),
            session.auditor,
            session.audit_date,
            session.start_time
        )?;

        walk_checklist(&mut flow, &mut input, &mut out)?;
    }

    finish_and_report(&mut flow, ctx, flags, args.print.as_deref()).await
}

/// Read one trimmed line. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line).context("failed to read input")? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> anyhow::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;
    read_line(input)?.ok_or_else(|| anyhow::anyhow!("input closed before the audit was complete"))
}

/// Ask for credentials until they check out.
fn login<R: BufRead, W: Write>(
    directory: &Directory,
    username: Option<&str>,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<AuditorIdentity> {
    loop {
        let username = match username {
            Some(name) => name.to_string(),
            None => prompt(input, out, "Username: ")?,
        };
        let password = prompt(input, out, "Password: ")?;

        match directory.authenticate(&username, &password) {
            Ok(identity) => return Ok(identity),
            Err(AuthError::MissingUsername) => writeln!(out, "Username is required.")?,
            Err(AuthError::InvalidCredentials) => {
                writeln!(out, "Invalid credentials. Try again.")?;
            }
        }
    }
}

enum Answer {
    Pass,
    Fail,
    Skip,
}

fn ask_answer<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    item: &ChecklistItem,
) -> anyhow::Result<Answer> {
    let marker = if item.is_zero_tolerance() { "ZT" } else { "OP" };
    writeln!(
        out,
        "[{marker}] #{} {} ({}, {} pts)",
        item.id, item.title, item.category, item.points
    )?;
    if !item.description.is_empty() {
        writeln!(out, "     {}", item.description)?;
    }

    loop {
        match prompt(input, out, "     [p]ass / [f]ail / [s]kip > ")?
            .to_ascii_lowercase()
            .as_str()
        {
            "p" | "pass" => return Ok(Answer::Pass),
            "f" | "fail" => return Ok(Answer::Fail),
            "s" | "skip" => return Ok(Answer::Skip),
            _ => writeln!(out, "     Please answer p, f or s.")?,
        }
    }
}

/// Record a failure with its optional comment and photo.
fn record_failure<R: BufRead, W: Write>(
    flow: &mut AuditFlow,
    item_id: u32,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    let comment = prompt(input, out, "     Comment (blank for none) > ")?;
    flow.mark_fail(item_id, Some(comment).filter(|c| !c.is_empty()))?;

    loop {
        let path = prompt(input, out, "     Photo path (blank for none) > ")?;
        if path.is_empty() {
            return Ok(());
        }
        match encode_photo(Path::new(&path)) {
            Ok(photo) => {
                flow.attach_photo(item_id, photo)?;
                return Ok(());
            }
            Err(error) => writeln!(out, "     {error:#}")?,
        }
    }
}

/// Walk unanswered items in catalog order until the session is complete.
/// Skipped items come around again on the next pass.
fn walk_checklist<R: BufRead, W: Write>(
    flow: &mut AuditFlow,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<()> {
    while !flow.is_complete() {
        let pending: Vec<ChecklistItem> = flow
            .catalog()
            .iter()
            .filter(|item| flow.result(item.id).is_none_or(|r| !r.status.is_answered()))
            .cloned()
            .collect();

        for item in &pending {
            match ask_answer(input, out, item)? {
                Answer::Pass => {
                    flow.mark_pass(item.id)?;
                }
                Answer::Fail => record_failure(flow, item.id, input, out)?,
                Answer::Skip => continue,
            }

            let card = flow.score_card();
            writeln!(
                out,
                "     progress {}/{} ({}%)\n",
                card.answered, card.total, card.progress_percent
            )?;

            if card.complete {
                if card.zero_tolerance_failed {
                    writeln!(out, "Zero tolerance violation recorded. The audit is complete.")?;
                }
                return Ok(());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use chrono::{FixedOffset, TimeZone};
    use pretty_assertions::assert_eq;
    use tally_core::Catalog;
    use tally_core::enums::{AuditStatus, Branch, SessionPhase, Tier};

    use super::*;

    fn item(id: u32, tier: Tier, points: u32) -> ChecklistItem {
        ChecklistItem {
            id,
            category: "Checks".into(),
            title: format!("Item {id}"),
            description: String::new(),
            points,
            tier,
        }
    }

    fn started_flow() -> AuditFlow {
        let catalog = Catalog::new(vec![
            item(1, Tier::ZeroTolerance, 300),
            item(2, Tier::Operational, 5),
            item(3, Tier::Operational, 10),
        ])
        .unwrap();
        let mut flow = AuditFlow::new(Arc::new(catalog));
        let now = FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2026, 10, 16, 10, 0, 0)
            .unwrap();
        let identity = AuditorIdentity {
            name: "Admin User".into(),
            username: "admin".into(),
        };
        flow.select_branch(Branch::Nugegoda, &identity, now).unwrap();
        flow
    }

    #[test]
    fn login_reprompts_until_credentials_match() {
        let mut input = Cursor::new("nope\nadmin\n");
        let mut out = Vec::new();

        let identity = login(&Directory::builtin(), Some("admin"), &mut input, &mut out).unwrap();

        assert_eq!(identity.name, "Admin User");
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed.matches("Password: ").count(), 2);
        assert!(printed.contains("Invalid credentials"));
    }

    #[test]
    fn login_fails_when_input_runs_out() {
        let mut input = Cursor::new("admin\nwrong\n");
        let mut out = Vec::new();
        assert!(login(&Directory::builtin(), None, &mut input, &mut out).is_err());
    }

    #[test]
    fn skipped_items_come_back_around() {
        let mut flow = started_flow();
        // item 1 skip, item 2 pass, item 3 fail "dusty" no photo, then item 1 pass
        let mut input = Cursor::new("s\np\nf\ndusty\n\np\n");
        let mut out = Vec::new();

        walk_checklist(&mut flow, &mut input, &mut out).unwrap();

        assert_eq!(flow.phase(), SessionPhase::Completed);
        assert_eq!(flow.score(), 5);
        let failed = flow.result(3).unwrap();
        assert_eq!(failed.status, AuditStatus::Fail);
        assert_eq!(failed.comment.as_deref(), Some("dusty"));
        assert!(failed.photo.is_none());
    }

    #[test]
    fn zero_tolerance_failure_ends_the_walk() {
        let mut flow = started_flow();
        let mut input = Cursor::new("f\n\n\n");
        let mut out = Vec::new();

        walk_checklist(&mut flow, &mut input, &mut out).unwrap();

        assert!(flow.is_complete());
        assert!(flow.result(2).is_none());
        assert_eq!(flow.result(1).unwrap().comment, None);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("Zero tolerance violation recorded"));
        assert!(!printed.contains("#2"));
    }

    #[test]
    fn unknown_answers_are_asked_again() {
        let mut flow = started_flow();
        let mut input = Cursor::new("maybe\np\np\np\n");
        let mut out = Vec::new();

        walk_checklist(&mut flow, &mut input, &mut out).unwrap();

        assert_eq!(flow.score(), 15);
        assert!(String::from_utf8(out).unwrap().contains("Please answer p, f or s."));
    }

    #[test]
    fn bad_photo_path_can_be_retried() {
        let dir = tempfile::tempdir().unwrap();
        let photo = dir.path().join("bin.png");
        std::fs::write(&photo, b"png").unwrap();

        let mut flow = started_flow();
        let script = format!("p\nf\n\n/definitely/missing.png\n{}\np\n", photo.display());
        let mut input = Cursor::new(script);
        let mut out = Vec::new();

        walk_checklist(&mut flow, &mut input, &mut out).unwrap();

        assert_eq!(
            flow.result(2).unwrap().photo.as_deref(),
            Some("data:image/png;base64,cG5n")
        );
        assert!(flow.is_complete());
    }
}
