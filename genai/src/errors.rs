use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No API key is configured for the backend. Raised before any request
    /// is made, so callers can report a setup problem instead of a
    /// transient failure.
    #[error("Missing API key: set {0}")]
    MissingApiKey(&'static str),
    /// The request to the backend failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returned a non-OK status code.
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The backend produced no text to parse.
    #[error("No text returned by {0}")]
    NoOutput(&'static str),
    /// The backend returned text that does not conform to the requested
    /// response schema.
    #[error("Schema mismatch from {0}: {1}")]
    Schema(&'static str, String),
}

pub type GenerationResult<T> = Result<T, GenerationError>;
