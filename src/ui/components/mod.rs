//! Composable UI component renderers.
//!
//! Each component renders one part of the interface starting at a given row
//! and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar
//! - [`stats`]: Book count, read count and average rating
//! - [`form`]: Add-book form with validation message
//! - [`table`]: Summary table with the highlight button
//! - [`cards`]: Windowed card list with the filter button
//! - [`empty`]: Message shown when no card is visible
//! - [`footer`]: Keybinding hints and totals
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Stats]
//! [Border]
//! [Form - 3 lines]
//! [Border]
//! [Table Headers]
//! [Table Rows]
//! [Border]
//! [Cards Title]
//! [Cards or Empty State]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod cards;
mod empty;
mod footer;
mod form;
mod header;
mod stats;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use cards::{render_cards, render_cards_title};
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use stats::render_stats;
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout.
///
/// The footer and its border are pinned to the last two rows; every other
/// component stacks from row 2 downward.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let border = &theme.colors.border;
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, border, cols);
    current_row = render_stats(current_row, &vm.stats, theme, cols);
    current_row = render_border(current_row, border, cols);
    current_row = render_form(current_row, &vm.form, theme, cols);
    current_row = render_border(current_row, border, cols);
    current_row = render_table_headers(current_row, &vm.table, theme, cols);
    current_row = render_table_rows(current_row, &vm.table, theme, cols);
    current_row = render_border(current_row, border, cols);
    current_row = render_cards_title(current_row, &vm.cards, theme, cols);

    let _current_row = match &vm.cards.empty_state {
        Some(empty) => render_empty_state(current_row, empty, theme, cols),
        None => render_cards(current_row, &vm.cards.items, theme, cols),
    };

    let footer_row = rows;
    render_border(footer_row.saturating_sub(1), border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}
