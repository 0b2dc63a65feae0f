use std::io;
use thiserror::Error as ThisError;

/// Errors reported at the boundary of a failing operation.
///
/// A failed load aborts the whole operation: no partial shape or point list
/// is ever returned, and no output file is produced.
#[derive(Debug, ThisError)]
pub enum Error {
    /// File missing, unreadable, or unwritable
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Token stream exhausted or non-numeric where a number was required.
    /// Deliberately generic: the scanner does not track positions.
    #[error("could not read {0}")]
    Parse(&'static str),

    /// Non-positive grid resolution, inverted range, non-positive count
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
