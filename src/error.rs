use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error reading from buffer: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid case flag ({0}), expected one of 'L', 'U' or 'K'")]
    InvalidCase(String),

    #[error("Invalid percentage ({0}), must be between 0 and 100")]
    PercentageOutOfRange(u32),

    #[error("Sample size ({requested}) exceeds the number of records ({available})")]
    SampleSizeExceeded { requested: usize, available: usize },

    #[error("Error writing to {}: {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
