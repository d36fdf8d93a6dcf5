//! Git integration for the destination folder.
//!
//! Uses the system git command, which automatically handles whatever the
//! operator has configured: user identity, hooks, credential helpers.
//! Every invocation is checked against its exit status; nothing is inferred
//! from human-readable output.

use std::path::Path;
use std::process::{Command, Output};

use crate::error::{Error, Result};

/// Outcome of a commit attempt.
///
/// Failures of the git invocation itself are reported through
/// `Error::GitCommand`, making the full result a tri-state:
/// committed, no-op, or failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created; `summary` is git's own one-line report.
    Committed { summary: String },
    /// The staged tree matched HEAD, nothing to record.
    NoChanges,
}

/// Initialize a repository in `dir`.
pub fn init(dir: &Path) -> Result<()> {
    run_checked(dir, &["init"])?;
    Ok(())
}

/// Stage every change under `dir`.
pub fn stage_all(dir: &Path) -> Result<()> {
    run_checked(dir, &["add", "-A"])?;
    Ok(())
}

/// Commit the staged changes, or report that there were none.
///
/// No-op detection relies on `git diff --cached --quiet`, which exits 0
/// when the index matches HEAD and 1 when it does not. Parsing commit
/// stdout for "nothing to commit" would break on non-English locales.
pub fn commit(dir: &Path, message: &str) -> Result<CommitOutcome> {
    let diff = run(dir, &["diff", "--cached", "--quiet"])?;
    match diff.status.code() {
        Some(0) => return Ok(CommitOutcome::NoChanges),
        Some(1) => {}
        _ => {
            return Err(Error::GitCommand {
                command: "diff --cached --quiet".to_string(),
                stderr: String::from_utf8_lossy(&diff.stderr).to_string(),
            })
        }
    }

    let output = run_checked(dir, &["commit", "-m", message])?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let summary = stdout.lines().next().unwrap_or_default().to_string();
    Ok(CommitOutcome::Committed { summary })
}

fn run(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .map_err(|e| Error::GitCommand {
            command: args.join(" "),
            stderr: e.to_string(),
        })
}

fn run_checked(dir: &Path, args: &[&str]) -> Result<Output> {
    let output = run(dir, args)?;
    if !output.status.success() {
        return Err(Error::GitCommand {
            command: args.join(" "),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(output)
}
