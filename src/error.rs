//! Module defining the errors which are exposed to the users of the crate

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An ancestor directory of the output path could not be created
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be created or truncated
    #[error("failed to create {}: {source}", path.display())]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing or flushing the CSV output failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The written file could not be reopened or read back
    #[error("failed to read back {}: {source}", path.display())]
    ReadBack {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file on disk does not hold the lines that were just written
    #[error("read back {actual} lines from {}, expected {expected}", path.display())]
    LineCountMismatch {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

pub(crate) fn create_dir_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::CreateDir {
        path: path.into(),
        source,
    }
}

pub(crate) fn create_file_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::CreateFile {
        path: path.into(),
        source,
    }
}

pub(crate) fn read_back_error(path: impl Into<PathBuf>, source: std::io::Error) -> Error {
    Error::ReadBack {
        path: path.into(),
        source,
    }
}
