//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//! use bookcase::ui::render;
//!
//! let state = AppState::default();
//! render(&state, 40, 120);
//! ```

use crate::app::AppState;
use crate::ui::components;

/// Renders the plugin UI to stdout with the active theme.
///
/// Prints ANSI-styled output with `print!`. Does not clear the screen; every
/// line the layout owns is padded to the full width instead.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows, cols);

    components::render_layout(&viewmodel, state.theme(), cols, rows);
}
