//! Error types for asset-palette.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while sampling, classifying or aggregating colors.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// A hex color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A sample size had a zero width or height.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// An image file could not be opened or decoded.
    #[error("failed to load image {}: {message}", path.display())]
    ImageLoad { path: PathBuf, message: String },

    /// A filesystem operation (directory listing, config read) failed.
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration could not be parsed or holds unusable values.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl PaletteError {
    /// Wraps any displayable decode failure for `path`.
    pub fn image_load(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        PaletteError::ImageLoad {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
