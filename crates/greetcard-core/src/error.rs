//! Error types for the greeting card

use thiserror::Error;

use crate::revision::Revision;
use crate::session::CardState;

/// Main error type for greeting card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Operation is not valid in the current card state
    #[error("Cannot {operation} while card is {state}")]
    InvalidTransition {
        operation: &'static str,
        state: CardState,
    },

    /// Operation needs a control this revision does not render
    #[error("{operation} is not available in the {revision} revision")]
    FeatureUnavailable {
        operation: &'static str,
        revision: Revision,
    },

    /// A response was chosen or dismissed without a matching dialog
    #[error("No response dialog is shown")]
    NoDialog,

    /// A response dialog is already on screen
    #[error("A response dialog is already shown")]
    DialogAlreadyShown,

    /// Revision name could not be parsed
    #[error("Unknown revision: {0}")]
    UnknownRevision(String),

    /// Configuration value failed validation
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::InvalidTransition {
            operation: "close",
            state: CardState::Closed,
        };
        assert_eq!(format!("{}", err), "Cannot close while card is closed");

        let err = CardError::FeatureUnavailable {
            operation: "choose a response",
            revision: Revision::Classic,
        };
        assert_eq!(
            format!("{}", err),
            "choose a response is not available in the classic revision"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let card_err: CardError = io_err.into();
        assert!(matches!(card_err, CardError::Io(_)));
    }
}
