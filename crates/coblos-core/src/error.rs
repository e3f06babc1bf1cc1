use thiserror::Error;

/// Failures a vote or registration attempt can run into before the
/// server's answer is known.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Server reply was not valid JSON: {0}")]
    MalformedReply(String),

    #[error("Invalid candidate identifier: {0:?}")]
    InvalidCandidate(String),

    #[error("Invalid session cookie: {0}")]
    InvalidSession(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Navigation failed: {0}")]
    Navigation(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
