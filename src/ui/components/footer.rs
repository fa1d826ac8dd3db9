//! Footer component renderer.
//!
//! Keybinding hints on the left, collection totals on the right.

use crate::ui::helpers::{position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// The keybinding hints are truncated first when the terminal is too narrow
/// for both parts; the totals always stay visible.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let totals_len = text_width(&footer.totals);
    let help_width = cols.saturating_sub(totals_len + 3);
    let help_text = truncate(&footer.keybindings, help_width);
    let gap = cols.saturating_sub(1 + text_width(&help_text) + totals_len + 1);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" {help_text}");
    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{} ", footer.totals);
    print!("{}", Theme::reset());
    row + 1
}
