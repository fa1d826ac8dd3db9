//! Shared rendering utilities.
//!
//! Widths are counted in characters, not bytes, so titles with accents or
//! star glyphs line up in the table columns.

/// Positions the cursor at a specific row and column (both 1-indexed).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `…` when cut.
///
/// # Example
///
/// ```rust
/// use bookcase::ui::helpers::truncate;
///
/// assert_eq!(truncate("Crime and Punishment", 9), "Crime an…");
/// assert_eq!(truncate("1984", 9), "1984");
/// ```
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text_width(text) <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

/// Truncates or right-pads `text` to exactly `width` characters.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let cut = truncate(text, width);
    let padding = width.saturating_sub(text_width(&cut));
    format!("{cut}{}", " ".repeat(padding))
}

/// Pads the rest of a line that already holds `used` characters.
pub fn fill_line(used: usize, cols: usize) {
    print!("{}", " ".repeat(cols.saturating_sub(used)));
}
