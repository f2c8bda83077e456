use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::ReconcileError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Unable to read [{}]: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error
    },
    #[error("Unable to write [{}]: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error
    },
    #[error("Invalid record in [{}]: {source}", .path.display())]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: ReconcileError
    },
    #[error("Unable to flush [{}]: {source}", .path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error
    }
}

impl StorageError {
    pub fn read(path: &Path, source: csv::Error) -> Self {
        Self::Read { path: path.to_path_buf(), source }
    }

    pub fn write(path: &Path, source: csv::Error) -> Self {
        Self::Write { path: path.to_path_buf(), source }
    }

    pub fn invalid_record(path: &Path, source: ReconcileError) -> Self {
        Self::InvalidRecord { path: path.to_path_buf(), source }
    }

    pub fn flush(path: &Path, source: std::io::Error) -> Self {
        Self::Flush { path: path.to_path_buf(), source }
    }
}
