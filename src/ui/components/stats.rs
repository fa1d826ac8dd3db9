//! Statistics bar renderer.

use crate::ui::helpers::{fill_line, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::StatsInfo;

/// Renders total, read count and average rating on one line.
///
/// ```text
///  Books: 5   Read: 2   Average: ★ 4.2
/// ```
pub fn render_stats(row: usize, stats: &StatsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let total = format!(" Books: {}", stats.total);
    let read = format!("   Read: {}", stats.read);
    let average = format!("   Average: ★ {}", stats.average);

    print!("{}{total}", Theme::fg(&theme.colors.text_normal));
    print!("{}{read}", Theme::fg(&theme.colors.read_fg));
    print!("{}{average}", Theme::fg(&theme.colors.accent));
    fill_line(text_width(&total) + text_width(&read) + text_width(&average), cols);

    print!("{}", Theme::reset());
    row + 1
}
