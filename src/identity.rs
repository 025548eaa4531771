//! Player and dedup-id resolution.
//!
//! The player name must resolve or the run fails; the unique id degrades to a
//! clock-derived value so a missing git history never blocks a score.

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::{debug, warn};

use crate::config::{Config, ENV_UNIQUE_ID};
use crate::error::{QubooError, Result};
use crate::scm::Scm;

/// Who gets the score, and the token the server dedups it by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub player: String,
    pub unique_id: String,
}

/// Resolve the identity from the config snapshot, asking `scm` only when the
/// environment comes up empty (or when the always-use-git override is set).
pub fn resolve(config: &Config, scm: &dyn Scm) -> Result<Identity> {
    let player = resolve_player(config, scm).ok_or(QubooError::NoPlayer)?;
    let unique_id = resolve_unique_id(config, scm);
    debug!(%player, %unique_id, "resolved identity");
    Ok(Identity { player, unique_id })
}

fn resolve_player(config: &Config, scm: &dyn Scm) -> Option<String> {
    if config.always_use_git {
        return scm.last_committer_name();
    }

    config
        .player_username
        .clone()
        .or_else(|| config.gitlab_username.clone())
        .or_else(|| config.circle_username.clone())
        .or_else(|| scm.last_committer_name())
}

fn resolve_unique_id(config: &Config, scm: &dyn Scm) -> String {
    if let Some(id) = &config.unique_id {
        return id.clone();
    }
    if let Some(hash) = scm.last_revision_short_id() {
        return hash;
    }

    warn!(
        "no unique id found in the environment or git: set {ENV_UNIQUE_ID}, \
         otherwise re-running may duplicate the score"
    );
    synthesize_unique_id()
}

/// Nanosecond wall-clock reading. Not guaranteed unique across runs; callers
/// were already warned.
fn synthesize_unique_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}
