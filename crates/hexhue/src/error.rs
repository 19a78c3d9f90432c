//! The error returned when a color string cannot be parsed.

use thiserror::Error;

/// Errors produced when a color string cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not `#RGB` or `#RRGGBB` (leading `#` optional).
    #[error("invalid color format: {input:?}")]
    InvalidColorFormat {
        /// The rejected input, verbatim.
        input: String,
    },
}

impl ColorError {
    pub(crate) fn invalid_format(input: &str) -> Self {
        tracing::debug!(input, "rejected color");
        Self::InvalidColorFormat {
            input: input.to_owned(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ColorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_quotes_input() {
        let err = ColorError::invalid_format("#zz");
        assert_eq!(err.to_string(), "invalid color format: \"#zz\"");
    }

    #[test]
    fn carries_rejected_input() {
        let ColorError::InvalidColorFormat { input } = ColorError::invalid_format("red");
        assert_eq!(input, "red");
    }
}
