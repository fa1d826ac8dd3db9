//! Error types for the Bookcase plugin.
//!
//! This module defines the crate-wide error type [`BookcaseError`], the
//! [`ValidationError`] raised when a new book is rejected, and a [`Result`]
//! alias. All errors are implemented with the `thiserror` crate.

use thiserror::Error;

/// Reasons a book candidate or rating selection is rejected.
///
/// The `Display` text of each variant is the message shown in the form's error
/// slot, so it is written for the user rather than for logs.
///
/// # Examples
///
/// ```
/// use bookcase::domain::ValidationError;
///
/// assert_eq!(ValidationError::MissingRating.to_string(), "Select a rating");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title is empty after trimming whitespace.
    #[error("Title is required")]
    EmptyTitle,

    /// Author is empty after trimming whitespace.
    #[error("Author is required")]
    EmptyAuthor,

    /// Page count is missing, unparsable, zero or negative.
    #[error("Page count must be a positive number")]
    InvalidPages,

    /// Page count does not fit a `u32`.
    #[error("Page count must be at most {}", u32::MAX)]
    TooManyPages,

    /// No rating has been chosen in the selector.
    #[error("Select a rating")]
    MissingRating,

    /// A rating outside `1..=5` was offered to the selector.
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    /// The id counter reached `u64::MAX`.
    #[error("No more book ids available")]
    IdsExhausted,
}

/// The main error type for Bookcase plugin operations.
///
/// Most variants wrap underlying errors using `#[from]` for automatic
/// conversion with `?`.
#[derive(Debug, Error)]
pub enum BookcaseError {
    /// A book or rating failed validation.
    ///
    /// Validation failures on the add-book path are handled by the dispatcher
    /// and never reach this variant; it carries the ones that escape, such as an
    /// out-of-range rating produced by a broken key mapping.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme file could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A plugin configuration value could not be interpreted.
    #[error("Config error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Bookcase operations.
pub type Result<T> = std::result::Result<T, BookcaseError>;
