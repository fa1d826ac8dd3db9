//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the container the plugin shim owns for
//! its whole lifetime. It holds the [`CollectionStore`] (books and selection
//! state) alongside purely presentational state: form buffers, pane focus,
//! cursor positions, the transient card emphasis and the active theme.
//!
//! # View Model Computation
//!
//! [`AppState::compute_viewmodel`] runs the card and table projections first
//! and the statistics calculator after them, then windows the card list around
//! the selected card so it is always on screen.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::AppState;
//!
//! let mut state = AppState::default();
//! state.move_selection_down();
//! assert_eq!(state.selected_card_id(), Some(2));
//! let vm = state.compute_viewmodel(40, 100);
//! assert!(vm.cards.items[1].is_selected);
//! ```

use super::form::FormState;
use super::modes::{Focus, FormField};
use super::stats::compute_stats;
use super::store::CollectionStore;
use crate::domain::MAX_RATING;
use crate::ui::projection::{self, card_projection, table_projection};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardItem, CardListInfo, EmptyState, FooterInfo, FormFieldInfo, FormInfo, HeaderInfo,
    StatsInfo, TableInfo, TableRowItem, UIViewModel,
};

/// How long a card stays emphasised after a jump from the table.
pub const CARD_EMPHASIS_SECONDS: f64 = 2.0;

/// Terminal rows one card occupies.
pub const CARD_HEIGHT: usize = 3;

/// Rows used by everything except table rows and cards: blank line, header,
/// stats bar, three form lines, table header, cards title, footer and the five
/// borders between them.
const CHROME_ROWS: usize = 14;

/// Below this width the table drops its genre and pages columns.
const COMPACT_TABLE_COLS: usize = 90;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Books and selection state. Only the event handler writes to it.
    pub store: CollectionStore,

    /// Add-book form buffers.
    pub form: FormState,

    /// Pane receiving key input.
    pub focus: Focus,

    /// Cursor within the card projection.
    pub selected_card: usize,

    /// Cursor within the table projection.
    pub selected_row: usize,

    /// Book whose card is currently emphasised.
    pub emphasized_card: Option<u64>,

    /// Emphasis timers armed but not yet fired.
    ///
    /// The emphasis clears only when the last one fires, so a second jump
    /// keeps its full duration even though the first jump's timer fires
    /// earlier.
    pub pending_emphasis_timers: usize,

    pub dark_theme: Theme,
    pub light_theme: Theme,

    /// Whether `dark_theme` is active.
    pub dark_mode: bool,
}

impl Default for AppState {
    /// Seeded catalog with the built-in themes.
    fn default() -> Self {
        Self::new(
            CollectionStore::seeded(),
            Theme::default(),
            Theme::default_light(),
        )
    }
}

impl AppState {
    /// Creates application state around an existing store.
    ///
    /// Starts in dark mode with the card list focused.
    #[must_use]
    pub fn new(store: CollectionStore, dark_theme: Theme, light_theme: Theme) -> Self {
        Self {
            store,
            form: FormState::default(),
            focus: Focus::Cards,
            selected_card: 0,
            selected_row: 0,
            emphasized_card: None,
            pending_emphasis_timers: 0,
            dark_theme,
            light_theme,
            dark_mode: true,
        }
    }

    /// Theme currently used for rendering.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        if self.dark_mode {
            &self.dark_theme
        } else {
            &self.light_theme
        }
    }

    /// Swaps between the dark and light theme. Returns `true` when dark.
    pub fn toggle_theme(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    #[must_use]
    pub fn selected_card_id(&self) -> Option<u64> {
        projection::visible_books(&self.store)
            .nth(self.selected_card)
            .map(|b| b.id)
    }

    #[must_use]
    pub fn selected_row_id(&self) -> Option<u64> {
        self.store
            .books()
            .iter()
            .take(projection::TABLE_ROW_LIMIT)
            .nth(self.selected_row)
            .map(|b| b.id)
    }

    fn row_count(&self) -> usize {
        self.store.len().min(projection::TABLE_ROW_LIMIT)
    }

    /// Moves the cursor of the focused pane down, wrapping to the top.
    ///
    /// In the form this moves to the next field.
    pub fn move_selection_down(&mut self) {
        match self.focus {
            Focus::Cards => {
                let count = projection::visible_books(&self.store).count();
                if count > 0 {
                    self.selected_card = (self.selected_card + 1) % count;
                }
            }
            Focus::Table => {
                let count = self.row_count();
                if count > 0 {
                    self.selected_row = (self.selected_row + 1) % count;
                }
            }
            Focus::Form => self.form.focus = self.form.focus.next(),
        }
    }

    /// Moves the cursor of the focused pane up, wrapping to the bottom.
    ///
    /// In the form this moves to the previous field.
    pub fn move_selection_up(&mut self) {
        match self.focus {
            Focus::Cards => {
                let count = projection::visible_books(&self.store).count();
                if count > 0 {
                    self.selected_card = self.selected_card.checked_sub(1).unwrap_or(count - 1);
                }
            }
            Focus::Table => {
                let count = self.row_count();
                if count > 0 {
                    self.selected_row = self.selected_row.checked_sub(1).unwrap_or(count - 1);
                }
            }
            Focus::Form => self.form.focus = self.form.focus.prev(),
        }
    }

    /// Keeps both cursors inside their projections after the collection or
    /// filter changed.
    pub fn clamp_selection(&mut self) {
        let cards = projection::visible_books(&self.store).count();
        self.selected_card = self.selected_card.min(cards.saturating_sub(1));
        self.selected_row = self.selected_row.min(self.row_count().saturating_sub(1));
    }

    /// Moves the card cursor onto `id` and emphasises it.
    ///
    /// Returns `false` and changes nothing when the card is not in the card
    /// projection, e.g. hidden by the read filter.
    pub fn emphasize_card(&mut self, id: u64) -> bool {
        let Some(index) = projection::visible_books(&self.store).position(|b| b.id == id) else {
            return false;
        };
        self.selected_card = index;
        self.emphasized_card = Some(id);
        self.pending_emphasis_timers += 1;
        true
    }

    /// Records that one emphasis timer fired.
    ///
    /// Returns `true` when that was the last pending timer and the emphasis
    /// was cleared.
    pub fn emphasis_elapsed(&mut self) -> bool {
        self.pending_emphasis_timers = self.pending_emphasis_timers.saturating_sub(1);
        if self.pending_emphasis_timers == 0 && self.emphasized_card.is_some() {
            self.emphasized_card = None;
            return true;
        }
        false
    }

    /// Computes a renderable view model from current state and terminal size.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Work out how many cards fit after the chrome and table rows
    /// 2. Centre the window on the selected card
    /// 3. Pull the window back when it would run past the last card
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let cards = card_projection(&self.store);
        let table_rows = table_projection(&self.store);
        let stats = compute_stats(self.store.books());
        let selection = self.store.selection();

        let slots = Self::card_slots(rows, table_rows.len());
        let mut visible_start = self.selected_card.saturating_sub(slots / 2);
        let visible_end = (visible_start + slots).min(cards.len());
        if visible_end - visible_start.min(visible_end) < slots {
            visible_start = visible_end.saturating_sub(slots);
        }
        let visible_start = visible_start.min(visible_end);

        let hidden_above = visible_start;
        let hidden_below = cards.len() - visible_end;
        let empty_state = cards.is_empty().then(|| self.compute_empty_state());

        let items = cards
            .into_iter()
            .enumerate()
            .skip(visible_start)
            .take(visible_end - visible_start)
            .map(|(index, card)| CardItem {
                is_selected: self.focus == Focus::Cards && index == self.selected_card,
                is_emphasized: self.emphasized_card == Some(card.id),
                card,
            })
            .collect();

        let rows_vm = table_rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| TableRowItem {
                row,
                is_selected: self.focus == Focus::Table && index == self.selected_row,
            })
            .collect();

        UIViewModel {
            header: HeaderInfo {
                title: " Bookcase ".to_string(),
            },
            stats: StatsInfo {
                total: stats.total,
                read: stats.read_count,
                average: stats.average_label(),
            },
            form: self.compute_form(),
            table: TableInfo {
                rows: rows_vm,
                highlight_label: projection::highlight_label(selection),
                compact: cols < COMPACT_TABLE_COLS,
                is_focused: self.focus == Focus::Table,
            },
            cards: CardListInfo {
                items,
                hidden_above,
                hidden_below,
                filter_label: projection::filter_label(selection),
                is_focused: self.focus == Focus::Cards,
                empty_state,
            },
            footer: FooterInfo {
                keybindings: self.compute_keybindings().to_string(),
                totals: format!("{} books · {} read", stats.total, stats.read_count),
            },
        }
    }

    /// Number of cards that fit below the table.
    fn card_slots(rows: usize, table_rows: usize) -> usize {
        (rows.saturating_sub(CHROME_ROWS + table_rows) / CARD_HEIGHT).max(1)
    }

    fn compute_form(&self) -> FormInfo {
        let rating = self.store.selection().pending_rating;
        let fields = FormField::ALL
            .iter()
            .map(|&field| {
                let value = match field {
                    FormField::Title => self.form.title.clone(),
                    FormField::Author => self.form.author.clone(),
                    FormField::Genre => self.form.genre().to_string(),
                    FormField::Pages => self.form.pages.clone(),
                    FormField::Rating => rating_selector(rating),
                };
                FormFieldInfo {
                    field,
                    label: field.label(),
                    value,
                    is_focused: self.focus == Focus::Form && self.form.focus == field,
                }
            })
            .collect();

        FormInfo {
            fields,
            error: self.form.error.clone(),
            is_focused: self.focus == Focus::Form,
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.store.selection().filter_active && !self.store.is_empty() {
            EmptyState {
                message: "No read books yet".to_string(),
                subtitle: "Press 'f' to show all books".to_string(),
            }
        } else {
            EmptyState {
                message: "The shelf is empty".to_string(),
                subtitle: "Press 'a' to add a book".to_string(),
            }
        }
    }

    const fn compute_keybindings(&self) -> &'static str {
        match self.focus {
            Focus::Cards => {
                "j/k: move  space: read  x: delete  s: sort  f: filter  h: highlight  a: add  t: theme  Tab: table  q: quit"
            }
            Focus::Table => {
                "j/k: move  Enter: show card  s: sort  f: filter  h: highlight  t: theme  Tab: form  q: quit"
            }
            Focus::Form => {
                "Tab/↓: next field  ↑: previous  ←/→: genre or rating  1-5: rating  Enter: add  Esc: cards"
            }
        }
    }
}

/// Five-glyph rating selector; active stars up to the pending rating.
fn rating_selector(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}
