//! Summary table renderer.
//!
//! Renders the first rows of the collection as fixed-width columns. Narrow
//! terminals get a compact layout without the genre and pages columns.

use crate::ui::helpers::{fill_line, fit, position_cursor, text_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableInfo, TableRowItem};

const TITLE_WIDTH: usize = 28;
const AUTHOR_WIDTH: usize = 20;
const GENRE_WIDTH: usize = 16;
const PAGES_WIDTH: usize = 6;
const RATING_WIDTH: usize = 7;
const STATUS_WIDTH: usize = 8;

/// Renders the column headers and the highlight button label.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_table_headers(row: usize, table: &TableInfo, theme: &Theme, cols: usize) -> usize {
    let headers = format_columns(
        table.compact,
        ["TITLE", "AUTHOR", "GENRE", "PAGES", "RATING", "STATUS"],
    );
    let button = format!("h: {} ", table.highlight_label);
    let gap = cols.saturating_sub(text_width(&headers) + text_width(&button));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(theme.pane_title_fg(table.is_focused)));
    print!("{headers}");
    print!("{}", Theme::reset());
    print!("{}", " ".repeat(gap));
    print!("{}{button}", Theme::fg(&theme.colors.accent));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all table rows starting at the specified row.
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_table_rows(row: usize, table: &TableInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in &table.rows {
        current_row = render_table_row(current_row, item, table.compact, theme, cols);
    }
    current_row
}

/// Renders one row.
///
/// # Styling Precedence
///
/// 1. Selection background (if `is_selected`)
/// 2. Highlight background for five-star rows (while highlighting is on)
/// 3. Normal text color, with the status cell colored by read state
fn render_table_row(
    row: usize,
    item: &TableRowItem,
    compact: bool,
    theme: &Theme,
    cols: usize,
) -> usize {
    let book = &item.row;
    position_cursor(row, 1);

    let (base_fg, base_bg) = if item.is_selected {
        (&theme.colors.selection_fg, Some(&theme.colors.selection_bg))
    } else if book.is_highlighted {
        (&theme.colors.highlight_fg, Some(&theme.colors.highlight_bg))
    } else {
        (&theme.colors.text_normal, None)
    };
    print!("{}", Theme::fg(base_fg));
    if let Some(bg) = base_bg {
        print!("{}", Theme::bg(bg));
    }

    let pages = book.pages.to_string();
    let line = format_columns(
        compact,
        [
            book.title.as_str(),
            book.author.as_str(),
            book.genre.as_str(),
            pages.as_str(),
            book.stars.as_str(),
            "",
        ],
    );
    print!("{line}");

    if base_bg.is_none() {
        let status_fg = if book.is_read {
            &theme.colors.read_fg
        } else {
            &theme.colors.unread_fg
        };
        print!("{}", Theme::fg(status_fg));
    }
    print!("{}", fit(book.status, STATUS_WIDTH));
    fill_line(text_width(&line) + STATUS_WIDTH, cols);

    print!("{}", Theme::reset());
    row + 1
}

/// Lays out one line of cells. The compact layout skips genre and pages.
fn format_columns(compact: bool, cells: [&str; 6]) -> String {
    let [title, author, genre, pages, rating, status] = cells;
    let mut line = format!(" {}{}", fit(title, TITLE_WIDTH), fit(author, AUTHOR_WIDTH));
    if !compact {
        line.push_str(&fit(genre, GENRE_WIDTH));
        line.push_str(&format!("{pages:>width$} ", width = PAGES_WIDTH - 1));
    }
    line.push_str(&fit(rating, RATING_WIDTH));
    if !status.is_empty() {
        line.push_str(&fit(status, STATUS_WIDTH));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_layout_drops_genre_and_pages() {
        let cells = ["1984", "George Orwell", "Science Fiction", "328", "★★★★★", ""];
        let wide = format_columns(false, cells);
        let narrow = format_columns(true, cells);

        assert!(wide.contains("Science Fiction"));
        assert!(wide.contains("  328 "));
        assert!(!narrow.contains("Science Fiction"));
        assert_eq!(
            text_width(&wide) - text_width(&narrow),
            GENRE_WIDTH + PAGES_WIDTH
        );
    }
}
