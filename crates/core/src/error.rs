//! Error types for the ez-paster-core library.
//!
//! Most failure paths in the scratchpad are deliberately quiet: rejected
//! input is skipped and environment failures are logged. These variants
//! carry the detail for the places that do propagate.

use thiserror::Error;

/// Errors that can occur within the ez-paster-core library.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (invalid values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Screen capture operation failed.
    #[error("Screen capture failed: {0}")]
    ScreenCapture(String),

    /// No display could be enumerated.
    #[error("No screens detected")]
    NoScreens,

    /// Image bytes or file could not be decoded.
    #[error("Image decoding failed: {0}")]
    ImageDecode(String),

    /// File extension is not on the supported image allow-list.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// The image has zero width or height.
    #[error("Image has no pixels")]
    EmptyImage,

    /// The selection area is empty or has zero dimensions.
    #[error("Selection area is empty or invalid")]
    EmptySelection,

    /// System clipboard access failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// UI-related errors (rendering, window management).
    #[error("UI error: {0}")]
    Ui(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a screen capture error with the given message.
    pub fn capture(msg: impl Into<String>) -> Self {
        Self::ScreenCapture(msg.into())
    }

    /// Creates an image decoding error with the given message.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::ImageDecode(msg.into())
    }

    /// Creates a clipboard error with the given message.
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Creates a UI error with the given message.
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }
}

/// A convenient alias for Result with [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
