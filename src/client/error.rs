//! Client Error Types

use thiserror::Error;

use crate::shared::SharedError;

/// Failures seen by the API client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or undecodable response
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error body
    #[error("{message} ({status})")]
    Api { status: u16, message: String },

    /// The call needs a session and none is held
    #[error("not signed in")]
    NotSignedIn,

    /// Input rejected before sending
    #[error(transparent)]
    Shared(#[from] SharedError),
}

impl ClientError {
    /// HTTP status of an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            Self::Shared(e) => e.user_message().to_string(),
            Self::NotSignedIn => "Please sign in".to_string(),
            Self::Http(_) => "Network error".to_string(),
        }
    }
}
