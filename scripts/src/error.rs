use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("scan root {0} does not exist")]
    RootMissing(PathBuf),

    #[error("scan root {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("invalid patch rule: {0}")]
    InvalidRule(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
