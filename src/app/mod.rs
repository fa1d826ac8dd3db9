//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain
//! layer. It owns the book collection and turns key presses into catalog
//! mutations.
//!
//! # Architecture
//!
//! Data flows one way:
//!
//! ```text
//! User Input → Events → Event Handler → Store Mutation → Refresh → Render
//!                                            ↓
//!                                         Actions → Timers / Hide pane
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands and refresh sets emitted by the handler
//! - [`form`]: Add-book form buffers and input rules
//! - [`handler`]: Event processing and intent dispatch
//! - [`modes`]: Pane focus and form field cycling
//! - [`state`]: Central application state container and view model computation
//! - [`stats`]: Collection statistics
//! - [`store`]: The book collection and its selection state
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (refresh, _actions) = handle_event(&mut state, &Event::KeyDown)?;
//! assert!(refresh.cards);
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod actions;
pub mod form;
pub mod handler;
pub mod modes;
pub mod state;
pub mod stats;
pub mod store;

pub use actions::{Action, Refresh, Surface};
pub use form::FormState;
pub use handler::{handle_event, Event, Intent};
pub use modes::{Focus, FormField};
pub use state::AppState;
pub use stats::{compute_stats, Stats};
pub use store::{CollectionStore, Selection};
