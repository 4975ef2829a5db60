//! Error types for the NIF core.

use thiserror::Error;

/// Main error type for NIF encoding and decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Decoded length prefix or terminator violates a type's limit
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// Value cannot be encoded without violating a type's limit
    #[error("Encoding constraint violated: {0}")]
    EncodingConstraint(String),

    /// Input ended in the middle of a value
    #[error("Unexpected end of input")]
    UnexpectedEof,

    /// Version string could not be parsed
    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    /// Byte order code other than big (0) or little (1)
    #[error("Invalid byte order code: {0}")]
    InvalidByteOrder(u8),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(std::io::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an "other" error from a string.
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a malformed-input error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Create an encoding-constraint error.
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::EncodingConstraint(msg.into())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::UnexpectedEof
        } else {
            Self::Io(e)
        }
    }
}

/// Result type alias for NIF operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::malformed("short string length 255");
        assert!(e.to_string().contains("Malformed"));
        assert!(e.to_string().contains("255"));

        let e = Error::InvalidByteOrder(7);
        assert!(e.to_string().contains("7"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_from_eof() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::UnexpectedEof));
    }
}
