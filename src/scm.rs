//! Local git queries.
//!
//! Git is the last-resort identity source, so every failure here collapses to
//! `None` and the resolver falls through to its next tier.

use std::process::Command;

use tracing::debug;

/// Read-only view of the local version-control history.
///
/// Implemented by [`GitScm`] in production and by in-memory stubs in tests, so
/// identity resolution can be exercised without spawning processes.
pub trait Scm {
    /// Display name of the most recent committer, spaces replaced with
    /// underscores.
    fn last_committer_name(&self) -> Option<String>;

    /// Abbreviated hash of the most recent revision.
    fn last_revision_short_id(&self) -> Option<String>;
}

/// Queries the git binary found on PATH.
#[derive(Debug, Default)]
pub struct GitScm;

impl GitScm {
    fn log_format(&self, format: &str) -> Option<String> {
        which::which("git").ok()?;

        let output = Command::new("git")
            .args(["log", "-1", &format!("--pretty=format:{format}")])
            .output()
            .ok()?;

        if !output.status.success() {
            debug!("git log exited with {}", output.status);
            return None;
        }

        let text = String::from_utf8(output.stdout).ok()?;
        let text = text.trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}

impl Scm for GitScm {
    fn last_committer_name(&self) -> Option<String> {
        self.log_format("%an").map(|name| name.replace(' ', "_"))
    }

    fn last_revision_short_id(&self) -> Option<String> {
        self.log_format("%h")
    }
}
