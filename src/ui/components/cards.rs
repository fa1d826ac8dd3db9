//! Card list renderer.
//!
//! Each card takes [`CARD_HEIGHT`](crate::app::state::CARD_HEIGHT) lines:
//!
//! ```text
//!  1984                                            ★★★★★
//!    George Orwell
//!    Science Fiction • 328 pp.   Read    space: Mark unread  x: delete
//! ```

use crate::ui::helpers::{fill_line, position_cursor, text_width, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CardItem, CardListInfo};

/// Renders the card list title with the filter button and scroll markers.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_cards_title(row: usize, cards: &CardListInfo, theme: &Theme, cols: usize) -> usize {
    let mut markers = String::new();
    if cards.hidden_above > 0 {
        markers.push_str(&format!("  ↑ {} more", cards.hidden_above));
    }
    if cards.hidden_below > 0 {
        markers.push_str(&format!("  ↓ {} more", cards.hidden_below));
    }
    let title = " Cards";
    let button = format!("f: {} ", cards.filter_label);
    let gap = cols.saturating_sub(text_width(title) + text_width(&markers) + text_width(&button));

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}{title}", Theme::fg(theme.pane_title_fg(cards.is_focused)));
    print!("{}", Theme::reset());
    print!("{}{markers}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(gap));
    print!("{}{button}", Theme::fg(&theme.colors.accent));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the windowed cards starting at `row`.
///
/// # Returns
///
/// The next available row position
pub fn render_cards(row: usize, items: &[CardItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_card(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one card.
///
/// The emphasis background wins over the selection background; a card reached
/// from the table is both selected and emphasised until its timer fires.
fn render_card(row: usize, item: &CardItem, theme: &Theme, cols: usize) -> usize {
    let card = &item.card;
    let background = if item.is_emphasized {
        Some((theme.colors.emphasis_fg.as_str(), theme.colors.emphasis_bg.as_str()))
    } else if item.is_selected {
        Some((theme.colors.selection_fg.as_str(), theme.colors.selection_bg.as_str()))
    } else {
        None
    };
    let color = |fg: &str| paint(background, fg);

    let marker = if item.is_selected { "▌" } else { " " };
    let stars_len = text_width(&card.stars);
    let title = truncate(&card.title, cols.saturating_sub(stars_len + 4));

    position_cursor(row, 1);
    print!("{}{marker}", color(theme.colors.text_normal.as_str()));
    print!("{}{title}", Theme::bold());
    print!("{}", Theme::reset());
    print!("{}", color(theme.colors.text_normal.as_str()));
    print!(
        "{}",
        " ".repeat(cols.saturating_sub(1 + text_width(&title) + stars_len + 1))
    );
    print!("{}{} ", color(theme.colors.accent.as_str()), card.stars);
    print!("{}", Theme::reset());

    let author = format!("{marker}  {}", card.author);
    position_cursor(row + 1, 1);
    print!("{}{author}", color(theme.colors.text_dim.as_str()));
    fill_line(text_width(&author), cols);
    print!("{}", Theme::reset());

    let details = format!("{marker}  {}", card.details);
    let (status, status_fg) = if card.is_read {
        ("Read", theme.colors.read_fg.as_str())
    } else {
        ("Unread", theme.colors.unread_fg.as_str())
    };
    let toggle = format!("space: {}  x: delete ", card.toggle_label);
    let gap = cols.saturating_sub(text_width(&details) + 8 + text_width(&toggle));

    position_cursor(row + 2, 1);
    print!("{}{details}", color(theme.colors.text_dim.as_str()));
    print!("{}", " ".repeat(gap));
    print!("{}{status:<8}", color(status_fg));
    print!("{}{toggle}", color(theme.colors.text_dim.as_str()));
    print!("{}", Theme::reset());

    row + 3
}

/// Color codes for card text: the card background when set, `fg` otherwise.
fn paint(background: Option<(&str, &str)>, fg: &str) -> String {
    match background {
        Some((bg_fg, bg)) => format!("{}{}", Theme::fg(bg_fg), Theme::bg(bg)),
        None => Theme::fg(fg),
    }
}
