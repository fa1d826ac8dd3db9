//! Card and table projections of the collection.
//!
//! Both projections are pure functions of the [`CollectionStore`]: they are
//! recomputed on every render and never edited in place, so the two views can
//! not drift apart.
//!
//! - The card projection honours the read filter and keeps collection order.
//! - The table projection ignores the filter and shows at most
//!   [`TABLE_ROW_LIMIT`] books from the front of the collection.

use crate::app::store::{CollectionStore, Selection};
use crate::domain::Book;

/// Maximum number of rows in the summary table.
pub const TABLE_ROW_LIMIT: usize = 8;

/// One card in the card list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCard {
    pub id: u64,
    pub title: String,
    pub author: String,
    /// `"{genre} • {pages} pp."`
    pub details: String,
    /// Filled glyphs followed by empty ones, always five wide.
    pub stars: String,
    /// Label of the read toggle; names the state the toggle switches to.
    pub toggle_label: &'static str,
    pub is_read: bool,
}

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// Id of the card this row links to.
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: u32,
    /// Filled glyphs only, one per rating point.
    pub stars: String,
    pub status: &'static str,
    pub is_read: bool,
    pub is_highlighted: bool,
}

/// Books the card list shows, in collection order.
pub fn visible_books(store: &CollectionStore) -> impl Iterator<Item = &Book> + '_ {
    let filter_active = store.selection().filter_active;
    store
        .books()
        .iter()
        .filter(move |book| !filter_active || book.read)
}

/// Projects the collection onto the card list.
#[must_use]
pub fn card_projection(store: &CollectionStore) -> Vec<BookCard> {
    visible_books(store)
        .map(|book| BookCard {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            details: format!("{} • {} pp.", book.genre, book.pages),
            stars: book.star_bar(),
            toggle_label: if book.read { "Mark unread" } else { "Mark read" },
            is_read: book.read,
        })
        .collect()
}

/// Projects the first [`TABLE_ROW_LIMIT`] books onto table rows.
#[must_use]
pub fn table_projection(store: &CollectionStore) -> Vec<TableRow> {
    let highlight_active = store.selection().highlight_active;

    store
        .books()
        .iter()
        .take(TABLE_ROW_LIMIT)
        .map(|book| TableRow {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            pages: book.pages,
            stars: book.filled_stars(),
            status: if book.read { "Read" } else { "Reading" },
            is_read: book.read,
            is_highlighted: highlight_active && book.is_top_rated(),
        })
        .collect()
}

/// Label of the filter button, naming what pressing it will do.
#[must_use]
pub const fn filter_label(selection: Selection) -> &'static str {
    if selection.filter_active {
        "Show all"
    } else {
        "Filter: read"
    }
}

/// Label of the highlight button.
#[must_use]
pub const fn highlight_label(selection: Selection) -> &'static str {
    if selection.highlight_active {
        "Clear highlight"
    } else {
        "Highlight top rated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewBook;

    fn card_ids(store: &CollectionStore) -> Vec<u64> {
        card_projection(store).iter().map(|c| c.id).collect()
    }

    fn grow_to(store: &mut CollectionStore, size: usize) {
        while store.len() < size {
            store.select_rating(2).unwrap();
            store
                .add(NewBook {
                    title: format!("Volume {}", store.len() + 1),
                    author: "Anon".into(),
                    genre: "Poetry".into(),
                    pages: Some(50),
                })
                .unwrap();
        }
    }

    #[test]
    fn card_filter_shows_only_read_books() {
        let mut store = CollectionStore::seeded();
        assert_eq!(card_ids(&store), vec![1, 2, 3, 4, 5]);

        store.toggle_read_filter();
        assert_eq!(card_ids(&store), vec![1, 2]);

        store.toggle_read_filter();
        assert_eq!(card_ids(&store), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn card_surfaces_book_details() {
        let store = CollectionStore::seeded();
        let cards = card_projection(&store);

        let first = &cards[0];
        assert_eq!(first.details, "Science Fiction • 328 pp.");
        assert_eq!(first.stars, "★★★★★");
        assert_eq!(first.toggle_label, "Mark unread");

        let last = &cards[4];
        assert_eq!(last.stars, "★★★☆☆");
        assert_eq!(last.toggle_label, "Mark read");
    }

    #[test]
    fn table_is_capped_and_ignores_filter() {
        let mut store = CollectionStore::seeded();
        store.toggle_read_filter();
        assert_eq!(table_projection(&store).len(), 5);

        grow_to(&mut store, 11);
        let rows = table_projection(&store);
        assert_eq!(rows.len(), TABLE_ROW_LIMIT);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), (1..=8).collect::<Vec<_>>());

        let mut empty = CollectionStore::default();
        assert!(table_projection(&empty).is_empty());
        empty.toggle_read_filter();
        assert!(table_projection(&empty).is_empty());
    }

    #[test]
    fn table_rows_show_filled_stars_and_status() {
        let store = CollectionStore::seeded();
        let rows = table_projection(&store);
        assert_eq!(rows[2].stars, "★★★★");
        assert_eq!(rows[0].status, "Read");
        assert_eq!(rows[3].status, "Reading");
    }

    #[test]
    fn highlight_marks_five_star_rows_only_while_active() {
        let mut store = CollectionStore::seeded();
        assert!(table_projection(&store).iter().all(|r| !r.is_highlighted));

        store.toggle_highlight();
        let marked: Vec<u64> = table_projection(&store)
            .iter()
            .filter(|r| r.is_highlighted)
            .map(|r| r.id)
            .collect();
        assert_eq!(marked, vec![1, 2]);

        store.toggle_highlight();
        assert!(table_projection(&store).iter().all(|r| !r.is_highlighted));
    }

    #[test]
    fn button_labels_follow_selection() {
        let mut store = CollectionStore::default();
        assert_eq!(filter_label(store.selection()), "Filter: read");
        store.toggle_read_filter();
        assert_eq!(filter_label(store.selection()), "Show all");
        store.toggle_highlight();
        assert_eq!(highlight_label(store.selection()), "Clear highlight");
    }
}
