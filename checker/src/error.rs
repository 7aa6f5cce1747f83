use std::io;

use thiserror::Error;

/// Failures that end a run. Invalid statements are not errors; they are
/// reported through [`Verdict`](crate::validate::Verdict).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not open file '{path}'")]
    InputUnavailable {
        path: String,
        source: io::Error,
    },
    #[error("could not read line {line}: {source}")]
    Read {
        line: usize,
        source: io::Error,
    },
    #[error("could not write report: {0}")]
    Write(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
