use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The listing directory could not be opened or iterated.
    #[error("cannot read directory {}: {source}", .path.display())]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub fn directory_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::DirectoryAccess {
            path: path.into(),
            source,
        }
    }

    /// Platform error kind behind this failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::DirectoryAccess { source, .. } => source.kind(),
            Error::Io(err) => err.kind(),
        }
    }
}
