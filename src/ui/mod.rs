//! User interface rendering layer with component-based architecture.
//!
//! This module turns application state into ANSI-styled terminal output. The
//! card and table projections live here too: they are the read-only views the
//! view model is built from.
//!
//! # Architecture
//!
//! ```text
//! AppState → projections + stats → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`projection`]: Card and table projections of the collection
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, width-aware text)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod projection;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use projection::{BookCard, TableRow};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{CardItem, EmptyState, FooterInfo, HeaderInfo, StatsInfo, UIViewModel};
