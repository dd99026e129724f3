//! CLI errors with distinct exit codes.
//!
//! - 0: success
//! - 1: a color could not be parsed
//! - 2: clap argument error (raised by clap before our code runs)
//! - 3: JSON serialization failed

use oklch_theme::ColorError;
use thiserror::Error;

/// Errors produced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// One of the hex inputs was invalid.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Output could not be serialized.
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 1,
            CliError::Json(_) => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_exit_code_is_1() {
        let err = CliError::from(ColorError::InvalidDigits("GGGGGG".into()));
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("GGGGGG"));
    }

    #[test]
    fn json_error_exit_code_is_3() {
        let bad_json = serde_json::from_str::<serde_json::Value>("{invalid");
        let err = CliError::from(bad_json.unwrap_err());
        assert_eq!(err.exit_code(), 3);
    }
}
