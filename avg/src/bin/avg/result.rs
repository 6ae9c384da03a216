use std::fmt::Display;

use thiserror::Error;

pub(crate) type AvgResult<T> = Result<T, AvgError>;

#[derive(Error, Debug)]
pub(crate) enum AvgError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Failed to open data file {1}, more details: {0}")]
    DataFileOpen(std::io::Error, String),
}

impl AvgError {
    pub(crate) fn data_file_open(error: std::io::Error, path: impl Display) -> Self {
        Self::DataFileOpen(error, format!("{path}"))
    }
}
