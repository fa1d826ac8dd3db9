//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` from the
//! current store, form and focus, and consumed by the renderer. They hold
//! display-ready data only; nothing here mutates state.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//!
//! let state = AppState::default();
//! let vm = state.compute_viewmodel(40, 100);
//! assert_eq!(vm.stats.total, 5);
//! assert_eq!(vm.table.rows.len(), 5);
//! ```

use super::projection::{BookCard, TableRow};
use crate::app::modes::FormField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub stats: StatsInfo,
    pub form: FormInfo,
    pub table: TableInfo,
    pub cards: CardListInfo,
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

/// Summary statistics bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsInfo {
    pub total: usize,
    pub read: usize,
    /// Average rating with one decimal.
    pub average: String,
}

/// Add-book form panel.
#[derive(Debug, Clone)]
pub struct FormInfo {
    pub fields: Vec<FormFieldInfo>,
    /// Message from the last rejected submission.
    pub error: Option<String>,
    pub is_focused: bool,
}

/// One labelled form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldInfo {
    pub field: FormField,
    pub label: &'static str,
    pub value: String,
    pub is_focused: bool,
}

/// Summary table panel.
#[derive(Debug, Clone)]
pub struct TableInfo {
    pub rows: Vec<TableRowItem>,
    pub highlight_label: &'static str,
    /// Narrow terminals drop the genre and pages columns.
    pub compact: bool,
    pub is_focused: bool,
}

/// A table row plus its selection state.
#[derive(Debug, Clone)]
pub struct TableRowItem {
    pub row: TableRow,
    pub is_selected: bool,
}

/// Card list panel, windowed to the rows available.
#[derive(Debug, Clone)]
pub struct CardListInfo {
    /// Cards inside the visible window.
    pub items: Vec<CardItem>,
    /// Cards scrolled out of view above the window.
    pub hidden_above: usize,
    /// Cards scrolled out of view below the window.
    pub hidden_below: usize,
    pub filter_label: &'static str,
    pub is_focused: bool,
    /// Shown instead of the list when no card is visible.
    pub empty_state: Option<EmptyState>,
}

/// A card plus its selection and emphasis state.
#[derive(Debug, Clone)]
pub struct CardItem {
    pub card: BookCard,
    pub is_selected: bool,
    /// Set for two seconds after the card was reached from the table.
    pub is_emphasized: bool,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
    /// `"5 books · 2 read"`
    pub totals: String,
}

/// Empty card list message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
