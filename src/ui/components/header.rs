//! Header component renderer.
//!
//! Renders the plugin title bar with centered text, theme-aware colors, and
//! optional background styling.

use crate::ui::helpers::{fill_line, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header title bar at the specified row.
///
/// The title is centered and bold; the line is padded to the full terminal
/// width so the optional header background covers it.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = text_width(&header.title);
    let padding = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(padding));
    print!("{}", header.title);
    fill_line(padding + title_len, cols);

    print!("{}", Theme::reset());
    row + 1
}
