//! Score categories and the wire payload.

use serde::Serialize;

use crate::identity::Identity;

/// What kind of score the first CLI argument asked for.
///
/// `release` and `doc` are fixed one-point categories; anything else is passed
/// through to the generic endpoint as a score value. The server decides
/// whether that value is a usable number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreKind {
    Release,
    Documentation,
    Generic(String),
}

impl ScoreKind {
    pub fn parse(arg: &str) -> Self {
        if arg.eq_ignore_ascii_case("release") {
            Self::Release
        } else if arg.eq_ignore_ascii_case("doc") {
            Self::Documentation
        } else {
            Self::Generic(arg.to_string())
        }
    }

    /// Path under the API base URL.
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Release => "/score/release",
            Self::Documentation => "/score/documentation",
            Self::Generic(_) => "/score/generic",
        }
    }

    /// Score field value. The server ignores it for the fixed categories, but
    /// the payload always carries it as a string.
    pub fn score_value(&self) -> String {
        match self {
            Self::Release | Self::Documentation => "1".to_string(),
            Self::Generic(value) => value.clone(),
        }
    }
}

/// One score submission, as parsed from argv.
#[derive(Debug, Clone)]
pub struct ScoreEvent {
    pub kind: ScoreKind,
    pub description: String,
}

impl ScoreEvent {
    pub fn new(type_or_score: &str, description: &str) -> Self {
        Self {
            kind: ScoreKind::parse(type_or_score),
            description: description.to_string(),
        }
    }
}

/// JSON body of the PUT request. All four fields are strings on the wire.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub player_login: String,
    pub unique_id: String,
    pub description: String,
    pub score: String,
}

impl ScoreRequest {
    pub fn build(identity: &Identity, event: &ScoreEvent) -> Self {
        Self {
            player_login: identity.player.clone(),
            unique_id: identity.unique_id.clone(),
            description: event.description.clone(),
            score: event.kind.score_value(),
        }
    }
}
