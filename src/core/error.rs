//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`PresenterError`] which covers every failure mode of the
//! presentation layer. It uses `thiserror` for ergonomic error definitions and
//! includes specialized error constructors for common failure scenarios.
//!
//! # Public API
//! - [`PresenterError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, PresenterError>`
//!
//! # Error Categories
//! - **Formatting**: Invalid (negative or non-finite) price amounts
//! - **Carousel**: Explicit jumps outside the image-list bounds
//! - **CLI input**: Unknown locale values, missing listing files
//! - **File operations**: I/O errors, JSON parse errors
//!
//! Missing Arabic translations, empty image lists, and absent contact methods
//! are normal fallback paths handled inside the core, never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for listing-presenter
#[derive(Error, Debug)]
pub enum PresenterError {
    // Formatting errors
    #[error("Invalid price amount: {amount} (must be a finite, non-negative number)")]
    InvalidAmount { amount: f64 },

    // Carousel errors
    #[error("Image index {index} is out of range (0-{max} available)")]
    IndexOutOfRange { index: usize, max: usize },

    #[error("Cannot jump within an empty image list")]
    EmptyCarouselJump,

    // CLI input errors
    #[error("Unknown locale: '{value}'. Supported locales: en, ar")]
    InvalidLocale { value: String },

    #[error("Listing file does not exist: {path}")]
    ListingFileNotFound { path: PathBuf },

    #[error("No listings found in file: {path}")]
    NoListingsInFile { path: PathBuf },

    // File operation errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse listing file '{path}': {source}")]
    ListingParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    // JSON serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using PresenterError
pub type Result<T> = std::result::Result<T, PresenterError>;

impl PresenterError {
    /// Create an invalid amount error
    pub fn invalid_amount(amount: f64) -> Self {
        Self::InvalidAmount { amount }
    }

    /// Create an index out of range error
    ///
    /// `size` is the image-list length; the reported valid range is `0..size`.
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            max: size.saturating_sub(1),
        }
    }

    /// Create an invalid locale error
    pub fn invalid_locale(value: impl Into<String>) -> Self {
        Self::InvalidLocale {
            value: value.into(),
        }
    }

    /// Create a listing file not found error
    pub fn listing_file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ListingFileNotFound { path: path.into() }
    }

    /// Create a no listings in file error
    pub fn no_listings_in_file(path: impl Into<PathBuf>) -> Self {
        Self::NoListingsInFile { path: path.into() }
    }

    /// Create a listing parse failed error
    pub fn listing_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ListingParseFailed {
            path: path.into(),
            source,
        }
    }
}
