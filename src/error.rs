use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("embedded payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to report progress: {0}")]
    Report(#[source] io::Error),
    #[error("payload is not a readable image: {0}")]
    Inspect(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, AssetError>;
