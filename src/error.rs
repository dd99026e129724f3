//! Errors produced while reading color input.

use thiserror::Error;

/// Errors produced when parsing a hex color.
///
/// Both variants carry the input exactly as it was given. The numeric
/// conversions themselves never fail.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    /// The input did not have exactly 6 characters after the optional `#`.
    #[error("invalid hex code format: {0:?} must have exactly 6 hex digits")]
    InvalidFormat(String),

    /// The input had the right length but contained non-hex characters.
    #[error("invalid hex characters in {0:?}")]
    InvalidDigits(String),
}

impl ColorError {
    /// The input that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidFormat(input) | Self::InvalidDigits(input) => input,
        }
    }
}
