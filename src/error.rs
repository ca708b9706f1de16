//! Error type shared by the store, configuration and runners.

use std::fmt;

/// Errors surfaced by console operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// An action is not allowed in the current session state
    /// (e.g. starting the pipeline while disconnected).
    InvalidOperation(String),
    /// Runtime configuration failed validation.
    InvalidConfig(String),
    /// The explorer schema could not be indexed.
    InvalidSchema(String),
    /// Settings file could not be parsed.
    Settings(String),
    /// I/O error while reading input or writing output.
    Io(String),
}

impl fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsoleError::InvalidOperation(msg) => write!(f, "{}", msg),
            ConsoleError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            ConsoleError::InvalidSchema(msg) => write!(f, "Invalid schema: {}", msg),
            ConsoleError::Settings(msg) => write!(f, "Settings error: {}", msg),
            ConsoleError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_operation_displays_bare_message() {
        let err = ConsoleError::InvalidOperation("Please connect first!".to_string());
        assert_eq!(err.to_string(), "Please connect first!");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ConsoleError = io.into();
        assert_eq!(err, ConsoleError::Io("missing".to_string()));
        assert_eq!(err.to_string(), "I/O error: missing");
    }
}
