//! Error types for the data-loader crate.
//!
//! Only configuration problems (missing, unreadable or empty data
//! directory) abort a load. A single unreadable or malformed
//! data file is reported as `DataLoadError::ParseError`, turned into a skipped
//! `FileOutcome`, and loading carries on with the remaining files.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a `Catalog`
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The data directory does not exist (or is not a directory)
    #[error("Data directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// The data directory exists but holds no matching data files
    #[error("No data files matching '{pattern}' found in {}", path.display())]
    NoDataFiles { path: PathBuf, pattern: String },

    /// The data directory exists but cannot be listed
    #[error("Data directory not readable: {}: {source}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A data file could not be decoded as a catalog document
    #[error("Parse error in {}: {reason}", file.display())]
    ParseError { file: PathBuf, reason: String },
}

impl DataLoadError {
    /// True for the errors that mean the loader was pointed at the wrong place.
    ///
    /// These are fatal to startup: a caller should abort rather than serve
    /// an empty catalog.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            DataLoadError::DirectoryNotFound { .. }
                | DataLoadError::DirectoryUnreadable { .. }
                | DataLoadError::NoDataFiles { .. }
        )
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_kinds() {
        let missing = DataLoadError::DirectoryNotFound {
            path: PathBuf::from("/nope"),
        };
        let empty = DataLoadError::NoDataFiles {
            path: PathBuf::from("data"),
            pattern: "bfi_*.json".to_string(),
        };
        let parse = DataLoadError::ParseError {
            file: PathBuf::from("bfi_a.json"),
            reason: "expected value".to_string(),
        };

        let unreadable = DataLoadError::DirectoryUnreadable {
            path: PathBuf::from("locked"),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };

        assert!(missing.is_configuration());
        assert!(unreadable.is_configuration());
        assert!(empty.is_configuration());
        assert!(!parse.is_configuration());
        assert_eq!(missing.to_string(), "Data directory not found: /nope");
        assert_eq!(
            empty.to_string(),
            "No data files matching 'bfi_*.json' found in data"
        );
    }
}
