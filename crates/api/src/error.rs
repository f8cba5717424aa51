use quill_types::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Status code: {0}")]
    StatusCode(u16),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid response")]
    InvalidResponse,

    #[error("Invalid url: {0}")]
    InvalidUrl(String),

    #[error("Not signed in")]
    Unauthenticated,

    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Everything except client-side checks counts as a network failure.
    pub fn is_network(&self) -> bool {
        !matches!(self, Error::Validation(_) | Error::Unauthenticated)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::StatusCode(404))
    }
}
