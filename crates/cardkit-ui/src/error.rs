//! Error types for cardkit

use thiserror::Error;

/// Errors raised at the edges of the component library.
///
/// Rendering itself never fails; these cover parsing and validating
/// configuration coming from outside Rust code.
#[derive(Error, Debug)]
pub enum CardError {
    /// Kind string is neither `simple-card` nor `overlay`
    #[error("Unknown card kind: {0}")]
    UnknownKind(String),

    /// No story is registered under this name
    #[error("Unknown story: {0}")]
    UnknownStory(String),

    /// A width/height value that would break out of the inline style
    #[error("Invalid {field}: {value:?}")]
    InvalidDimension {
        field: &'static str,
        value: String,
    },

    /// An overlay image that would break out of `url(...)`
    #[error("Invalid image: {0:?}")]
    InvalidImage(String),

    /// Error parsing a JSON card configuration
    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for cardkit operations
pub type CardResult<T> = Result<T, CardError>;
