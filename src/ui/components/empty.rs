//! Empty state component renderer.
//!
//! Shown in place of the card list when no card is visible, either because
//! the shelf is empty or because the read filter hides every book.

use crate::ui::helpers::{position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a centered two-line message starting one row below `row`.
///
/// # Layout
///
/// ```text
/// [blank line]
/// [left padding] message [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_len = text_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = text_width(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());

    row + 3
}
