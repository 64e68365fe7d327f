use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{}: file is not valid UTF-8", .path.display())]
    Decode { path: PathBuf },

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::NotADirectory(_) => "NOT_A_DIRECTORY",
            Error::Decode { .. } => "DECODE_ERROR",
            Error::Io { .. } => "IO_ERROR",
        }
    }
}
