use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with [`HexstickerError`].
pub type HexstickerResult<T> = std::result::Result<T, HexstickerError>;

/// Error types that can occur while producing a sticker.
///
/// Every variant is user facing; nothing is retried internally.
#[derive(Debug, Error)]
pub enum HexstickerError {
    /// File type could not be determined from the file extension, or is not supported.
    #[error("{0}")]
    UnknownFileType(String),
    /// The source image could not be opened or decoded.
    #[error("Failed to load input image {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The resulting image could not be written, or the output path could not be built.
    #[error("Failed to save resulting image {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: SaveFailure,
    },
    /// An option value failed validation.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Underlying cause of a [`HexstickerError::Save`].
#[derive(Debug, Error)]
pub enum SaveFailure {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Encode(#[from] image::ImageError),
    /// No output file name could be derived from the input path.
    #[error("{0}")]
    OutputName(String),
}
