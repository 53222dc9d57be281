//! Error types for wardrobe-models.
//!
//! The state models themselves are total; no transition or derived query
//! can fail. Errors only arise at the wire boundary, when parsing values
//! received from the backend API.

/// Result type alias for wardrobe-models operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from parsing backend wire values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A provenance tag outside the closed `outfit_source` set.
    #[error("unknown outfit source '{0}'")]
    UnknownSource(String),

    /// A date key that is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date key '{value}': {source}")]
    InvalidDateKey {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
