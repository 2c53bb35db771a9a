//! Error types shared by the collector, the placer and the runtime.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Fatal errors. Anything that reaches `main` as one of these ends the run.
#[derive(Error, Debug)]
pub enum Error {
    /// Filesystem operation failed on `path`.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Directory walk failed (unreadable source directory, broken link loop).
    #[error("scanning {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Missing or unusable settings.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Per-file tag read failure. Recoverable: the file is left out of the run.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct TagReadError(String);

impl TagReadError {
    #[cfg(test)]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

impl From<lofty::error::LoftyError> for TagReadError {
    fn from(e: lofty::error::LoftyError) -> Self {
        Self(e.to_string())
    }
}
