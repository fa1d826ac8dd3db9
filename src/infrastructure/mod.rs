//! Infrastructure layer for filesystem interactions.
//!
//! Zellij runs plugins in a WASI sandbox where the host filesystem is mounted
//! under `/host`.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir};
