//! Error types and handling infrastructure for sitepager.
//!
//! Every variant of [`PagerError`] ends the command loop. Its `Display` text is the
//! diagnostic written to standard error before the process exits with failure status,
//! so the wording here is part of the program's observable behavior.
//!
//! Recoverable problems (unrecognized commands, bad post ids) never become errors;
//! the loop reports them inline and keeps reading.

use thiserror::Error;

/// Fatal conditions that terminate the command loop.
#[derive(Error, Debug)]
pub enum PagerError {
    /// A single read filled the whole input buffer, so no line terminator fits
    #[error("...What exactly are you trying to do?")]
    InputTooLong,

    /// The input stream reported end of input
    #[error("**Exiting -> stdin was closed!")]
    InputClosed,

    /// The input stream failed while reading
    #[error("**Exiting -> error reading stdin! errno={code}")]
    ReadFailed {
        code: i32,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output or error stream failed
    #[error("**Exiting -> error writing output: {source}")]
    Output {
        #[source]
        source: std::io::Error,
    },
}

/// Standard Result type for sitepager operations.
pub type Result<T> = std::result::Result<T, PagerError>;

impl PagerError {
    /// Create a ReadFailed error, keeping the OS error number when there is one
    pub fn read_failed(source: std::io::Error) -> Self {
        Self::ReadFailed {
            code: source.raw_os_error().unwrap_or(-1),
            source,
        }
    }
}

// Writes are the only `?`-propagated io operations; reads go through `read_failed`.
impl From<std::io::Error> for PagerError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_fatal_diagnostics() {
        assert_eq!(
            PagerError::InputTooLong.to_string(),
            "...What exactly are you trying to do?"
        );
        assert_eq!(
            PagerError::InputClosed.to_string(),
            "**Exiting -> stdin was closed!"
        );
    }

    #[test]
    fn test_read_failed_keeps_os_code() {
        let err = PagerError::read_failed(io::Error::from_raw_os_error(5));
        assert!(matches!(err, PagerError::ReadFailed { code: 5, .. }));
        assert_eq!(
            err.to_string(),
            "**Exiting -> error reading stdin! errno=5"
        );
    }

    #[test]
    fn test_read_failed_without_os_code() {
        let err = PagerError::read_failed(io::Error::new(io::ErrorKind::Other, "boom"));
        assert_eq!(
            err.to_string(),
            "**Exiting -> error reading stdin! errno=-1"
        );
    }

    #[test]
    fn test_io_error_conversion_is_output() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: PagerError = io_err.into();

        match err {
            PagerError::Output { source } => {
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            _ => panic!("Expected Output variant"),
        }
    }
}
