// SPDX-License-Identifier: MPL-2.0
//! Media library errors.

use std::fmt;

/// Errors reported by a media library or by the task running a library call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// The user (or the platform) refused access to the library.
    AccessDenied,

    /// The library location does not exist or cannot be listed.
    Unavailable(String),

    /// Reading the library failed part way through.
    Io(String),

    /// The background task running the call panicked or was cancelled.
    Task(String),
}

impl fmt::Display for LibraryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied => write!(f, "Access to the media library was denied"),
            LibraryError::Unavailable(msg) => write!(f, "Media library unavailable: {msg}"),
            LibraryError::Io(msg) => write!(f, "Media library I/O error: {msg}"),
            LibraryError::Task(msg) => write!(f, "Media library task failed: {msg}"),
        }
    }
}

impl std::error::Error for LibraryError {}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        LibraryError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_to_io_variant() {
        let err: LibraryError = std::io::Error::other("disk gone").into();
        assert!(matches!(err, LibraryError::Io(msg) if msg.contains("disk gone")));
    }

    #[test]
    fn display_mentions_cause() {
        let err = LibraryError::Unavailable("/nowhere".into());
        assert_eq!(err.to_string(), "Media library unavailable: /nowhere");
    }
}
