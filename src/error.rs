use thiserror::Error;

#[derive(Error, Debug)]
pub enum QubooError {
    #[error(
        "missing Quboo credentials: set the {} and {} environment variables",
        crate::config::ENV_ACCESS_KEY,
        crate::config::ENV_SECRET_KEY
    )]
    MissingCredentials,

    #[error(
        "could not derive a player name from the environment or git: set {} to the player that should receive the score",
        crate::config::ENV_PLAYER_USERNAME
    )]
    NoPlayer,

    #[error("forbidden by the Quboo server: verify your access and secret keys")]
    Forbidden,

    #[error("server rejected the score (status {status}): {body}")]
    ServerRejected { status: u16, body: String },

    #[error("could not send the score: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, QubooError>;
