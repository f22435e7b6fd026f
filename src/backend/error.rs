//! Typed errors for the environment-update endpoint

use thiserror::Error;

/// Outcome of a failed environment update.
///
/// The server reports failures as an HTML body whose first heading carries the
/// error title; two titles get dedicated recovery flows, everything else is
/// terminal for the submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateError {
    /// Hard stop: the server refused to persist the archive settings
    #[error("Unable to update environments")]
    UpdateRejected,
    /// The settings were saved but publishing failed; the user may force-proceed
    #[error("Unable to publish changes")]
    PublishConflict,
    /// Any other server-supplied error title
    #[error("{0}")]
    Rejected(String),
    #[error("request failed: {0}")]
    Transport(String),
}

impl UpdateError {
    /// Map a server error title onto the recognized variants
    pub fn from_title(title: String) -> Self {
        match title.as_str() {
            "Unable to update environments" => Self::UpdateRejected,
            "Unable to publish changes" => Self::PublishConflict,
            _ => Self::Rejected(title),
        }
    }
}

impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
