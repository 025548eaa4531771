//! Quboo score reporter.
//!
//! One invocation reports one score event to the Quboo server:
//!
//! ```text
//! env snapshot → identity resolution → payload → HTTPS PUT → exit code
//! ```
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli          # argument parsing (two positionals)
//! ├── config       # one-shot environment snapshot, credential check
//! ├── identity     # player name + dedup id resolution ladders
//! ├── scm          # git queries behind the Scm trait
//! ├── score        # category mapping and the JSON payload
//! ├── client       # Transport trait, blocking HTTP, response mapping
//! └── output       # console helpers
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod identity;
pub mod output;
pub mod scm;
pub mod score;

use client::Transport;
use config::Config;
use error::Result;
use scm::Scm;
use score::{ScoreEvent, ScoreRequest};
use tracing::info;

/// What a successful run reports back to the caller.
#[derive(Debug, Clone)]
pub struct Receipt {
    /// Full URL the score was sent to.
    pub url: String,
    /// Opaque response body from the server.
    pub body: String,
}

/// Run one score submission end to end.
///
/// Pure pipeline over the injected capabilities: resolves the identity, builds
/// the payload, sends it, and maps the response. Every failure is a terminal
/// error for the caller to translate into an exit code.
pub fn run(
    config: &Config,
    event: &ScoreEvent,
    scm: &dyn Scm,
    transport: &dyn Transport,
) -> Result<Receipt> {
    let identity = identity::resolve(config, scm)?;
    let payload = ScoreRequest::build(&identity, event);

    let url = format!(
        "{}{}",
        config.api_url.trim_end_matches('/'),
        event.kind.endpoint()
    );
    info!(%url, player = %identity.player, "sending score");

    let response = transport.put_score(&url, &config.credentials, &payload)?;
    let body = client::handle_response(response)?;

    Ok(Receipt { url, body })
}
