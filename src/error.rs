/// Error types for the Strato Cloud CLI
use thiserror::Error;

/// Errors surfaced by the API client, services, and displayers.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied identifier or payload failed local validation.
    /// Raised before any network call is issued.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Network or HTTP-layer failure (timeout, connection refused,
    /// unparseable body).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API returned a non-2xx status with a structured error body.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A list operation followed "next" links past the safety cap without
    /// reaching a terminal page.
    #[error("pagination did not terminate within {0} pages")]
    PaginationExhausted(usize),

    /// A list response carried a "next" link that could not be parsed into
    /// a page number. The walk fails rather than returning a partial
    /// collection.
    #[error("malformed pagination link: {0}")]
    MalformedPageLink(String),

    /// Serializing a resource for display failed. The underlying operation
    /// may already have completed by the time this is reported.
    #[error("display error: {0}")]
    Display(#[from] serde_json::Error),

    /// Writing rendered output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Action polling hit its deadline before the action reached a
    /// terminal status.
    #[error("timed out after {0} seconds waiting for action {1}")]
    WaitTimeout(u64, i64),

    /// A polled action reached the "errored" terminal status.
    #[error("action {0} ({1}) failed")]
    ActionFailed(i64, String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Validate an integer identifier. IDs start at 1.
    pub fn check_id(name: &str, id: i64) -> Result<()> {
        if id < 1 {
            return Err(Error::InvalidArgument(format!(
                "{} cannot be less than 1",
                name
            )));
        }
        Ok(())
    }

    /// Validate a string identifier. Empty strings are never valid.
    pub fn check_name(name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(Error::InvalidArgument(format!(
                "{} cannot be an empty string",
                name
            )));
        }
        Ok(())
    }
}
