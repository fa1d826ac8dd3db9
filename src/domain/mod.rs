//! Domain layer for the Bookcase plugin.
//!
//! Core types with no dependency on Zellij or on the rendering layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`book`]: Book record, add-book candidate and the seed catalog
//!
//! # Examples
//!
//! ```
//! use bookcase::domain::book::seed_books;
//!
//! let books = seed_books();
//! assert_eq!(books.len(), 5);
//! ```

pub mod book;
pub mod error;

pub use book::{Book, NewBook, GENRES, MAX_RATING};
pub use error::{BookcaseError, Result, ValidationError};
