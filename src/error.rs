use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlideshowError {
    #[error("failed to read config file {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("failed to read manifest {path:?}: {source}")]
    ManifestRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse manifest {path:?}: {source}")]
    ManifestParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("invalid color {0:?}, expected #rrggbb")]
    InvalidColor(String),

    #[error("failed to list images: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("no image files found in directory {0:?}")]
    NoImagesFound(PathBuf),

    #[error("failed to load image {path:?}: {reason}")]
    ImageLoad { path: PathBuf, reason: String },

    #[error("a slideshow needs at least one image")]
    EmptySlideshow,
}

pub type Result<T> = std::result::Result<T, SlideshowError>;
