//! Error types for ontograph-objects

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type
///
/// All variants are fatal: the backing graph does not contain the statements
/// a decoding algorithm requires, and retrying cannot help. Errors surface at
/// first content access (or at factory shape detection), never at wrapper
/// construction.
#[derive(Error, Debug)]
pub enum Error {
    /// The graph lacks statements a shape's decoding algorithm requires
    /// (missing property, missing filler, malformed list)
    #[error("Malformed structure: {0}")]
    MalformedStructure(String),

    /// A node reference does not correspond to any known shape
    #[error("Unresolvable reference: {0}")]
    UnresolvableReference(String),

    /// A literal could not be decoded as the scalar a shape requires
    #[error("Invalid literal: {0}")]
    InvalidLiteral(String),
}

impl Error {
    /// Create a malformed structure error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Error::MalformedStructure(msg.into())
    }

    /// Create an unresolvable reference error
    pub fn unresolvable(msg: impl Into<String>) -> Self {
        Error::UnresolvableReference(msg.into())
    }

    /// Create an invalid literal error
    pub fn invalid_literal(msg: impl Into<String>) -> Self {
        Error::InvalidLiteral(msg.into())
    }
}
