//! Collection store: the single source of truth for the catalog.
//!
//! [`CollectionStore`] owns the ordered list of books together with the
//! ephemeral [`Selection`] state (pending rating, read filter, highlight
//! toggle). Only the event handler mutates it; projections and statistics read
//! it by reference.
//!
//! # Ordering
//!
//! Books stay in insertion order until [`CollectionStore::sort_by_rating_descending`]
//! is applied. The sort is stable, so books with equal ratings keep the order
//! they had before the sort.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::store::CollectionStore;
//! use bookcase::domain::NewBook;
//!
//! let mut store = CollectionStore::seeded();
//! store.select_rating(4)?;
//! let book = store.add(NewBook {
//!     title: "Dune".into(),
//!     author: "Frank Herbert".into(),
//!     genre: "Science Fiction".into(),
//!     pages: Some(412),
//! })?;
//! assert_eq!(book.id, 6);
//! assert!(!book.read);
//! # Ok::<(), bookcase::domain::ValidationError>(())
//! ```

use crate::domain::{Book, NewBook, ValidationError, MAX_RATING};
use std::collections::HashSet;

/// Ephemeral UI selection state.
///
/// Not part of the collection itself and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Rating chosen in the selector; 0 means none.
    pub pending_rating: u8,
    /// Card view shows only read books while set.
    pub filter_active: bool,
    /// Table marks five-star rows while set.
    pub highlight_active: bool,
}

/// Ordered book collection plus selection state.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    books: Vec<Book>,
    selection: Selection,
    /// Highest id ever issued. Ids are never reused, even after deletes.
    last_id: u64,
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl CollectionStore {
    /// Creates a store from an initial list of books.
    ///
    /// Books whose id repeats an earlier one are dropped so the uniqueness
    /// invariant holds from the start, as are books rated outside `1..=5`.
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        let mut seen = HashSet::new();
        let books: Vec<Book> = books
            .into_iter()
            .filter(|book| {
                if !(1..=MAX_RATING).contains(&book.rating) {
                    tracing::warn!(book_id = book.id, rating = book.rating, "dropping book with invalid rating");
                    return false;
                }
                let fresh = seen.insert(book.id);
                if !fresh {
                    tracing::warn!(book_id = book.id, "dropping book with duplicate id");
                }
                fresh
            })
            .collect();

        let last_id = books.iter().map(|b| b.id).max().unwrap_or(0);

        Self {
            books,
            selection: Selection::default(),
            last_id,
        }
    }

    /// Creates a store holding the five seed books.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(crate::domain::book::seed_books())
    }

    /// Books in current collection order.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Records the rating chosen in the selector.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RatingOutOfRange`] for anything outside
    /// `1..=5`; the pending rating is left unchanged.
    pub fn select_rating(&mut self, rating: u8) -> Result<(), ValidationError> {
        if !(1..=MAX_RATING).contains(&rating) {
            return Err(ValidationError::RatingOutOfRange(rating));
        }
        self.selection.pending_rating = rating;
        tracing::debug!(rating, "rating selected");
        Ok(())
    }

    /// Clears the pending rating back to "none selected".
    pub fn reset_pending_rating(&mut self) {
        self.selection.pending_rating = 0;
    }

    /// Validates a candidate and appends it as an unread book.
    ///
    /// The rating comes from the pending selection. Title and author are
    /// trimmed before they are checked and stored. Checks run in order: title,
    /// author, pages, rating; the first failure is reported.
    ///
    /// The pending rating is not reset here; the dispatcher does that after a
    /// successful add.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] and leaves the collection untouched when
    /// any check fails.
    pub fn add(&mut self, candidate: NewBook) -> Result<Book, ValidationError> {
        let title = candidate.title.trim();
        let author = candidate.author.trim();

        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if author.is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        let pages = match candidate.pages {
            Some(p) if p >= 1 => u32::try_from(p).map_err(|_| ValidationError::TooManyPages)?,
            _ => return Err(ValidationError::InvalidPages),
        };
        let rating = self.selection.pending_rating;
        if rating == 0 {
            return Err(ValidationError::MissingRating);
        }

        let id = self
            .last_id
            .checked_add(1)
            .ok_or(ValidationError::IdsExhausted)?;
        self.last_id = id;
        let book = Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: candidate.genre.trim().to_string(),
            pages,
            rating,
            read: false,
        };

        tracing::debug!(book_id = book.id, title = %book.title, rating, "book added");
        self.books.push(book.clone());
        Ok(book)
    }

    /// Removes the book with `id`, returning it. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u64) -> Option<Book> {
        let Some(position) = self.books.iter().position(|b| b.id == id) else {
            tracing::debug!(book_id = id, "remove ignored, no such book");
            return None;
        };
        let removed = self.books.remove(position);
        tracing::debug!(book_id = id, remaining = self.books.len(), "book removed");
        Some(removed)
    }

    /// Flips the read flag and returns the new value. Unknown ids are a no-op.
    pub fn toggle_read(&mut self, id: u64) -> Option<bool> {
        let Some(book) = self.books.iter_mut().find(|b| b.id == id) else {
            tracing::debug!(book_id = id, "toggle ignored, no such book");
            return None;
        };
        book.read = !book.read;
        tracing::debug!(book_id = id, read = book.read, "read status toggled");
        Some(book.read)
    }

    /// Orders books by rating, highest first, keeping ties in their current order.
    pub fn sort_by_rating_descending(&mut self) {
        self.books.sort_by(|a, b| b.rating.cmp(&a.rating));
        tracing::debug!(count = self.books.len(), "books sorted by rating");
    }

    /// Flips the read-only card filter and returns the new state.
    pub fn toggle_read_filter(&mut self) -> bool {
        self.selection.filter_active = !self.selection.filter_active;
        self.selection.filter_active
    }

    /// Flips the top-rated row highlight and returns the new state.
    pub fn toggle_highlight(&mut self) -> bool {
        self.selection.highlight_active = !self.selection.highlight_active;
        self.selection.highlight_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(title: &str, author: &str, pages: Option<i64>) -> NewBook {
        NewBook {
            title: title.to_string(),
            author: author.to_string(),
            genre: "Novel".to_string(),
            pages,
        }
    }

    fn ids(store: &CollectionStore) -> Vec<u64> {
        store.books().iter().map(|b| b.id).collect()
    }

    #[test]
    fn valid_add_appends_unread_book_with_fresh_id() {
        let mut store = CollectionStore::seeded();
        store.select_rating(3).unwrap();

        let book = store.add(candidate("  Dune ", "Frank Herbert", Some(412))).unwrap();

        assert_eq!(store.len(), 6);
        assert_eq!(book.id, 6);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.rating, 3);
        assert!(!book.read);
        assert_eq!(store.books().last(), Some(&book));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = CollectionStore::seeded();
        store.remove(5);
        store.select_rating(2).unwrap();
        let book = store.add(candidate("Emma", "Jane Austen", Some(474))).unwrap();
        assert_eq!(book.id, 6);
    }

    #[test]
    fn invalid_candidates_leave_collection_unchanged() {
        let cases = [
            (candidate("", "Author", Some(10)), 4, ValidationError::EmptyTitle),
            (candidate("   ", "Author", Some(10)), 4, ValidationError::EmptyTitle),
            (candidate("Title", "", Some(10)), 4, ValidationError::EmptyAuthor),
            (candidate("Title", "Author", None), 4, ValidationError::InvalidPages),
            (candidate("Title", "Author", Some(0)), 4, ValidationError::InvalidPages),
            (candidate("Title", "Author", Some(-12)), 4, ValidationError::InvalidPages),
            (candidate("Title", "Author", Some(5_000_000_000)), 4, ValidationError::TooManyPages),
            (candidate("Title", "Author", Some(10)), 0, ValidationError::MissingRating),
        ];

        for (book, rating, expected) in cases {
            let mut store = CollectionStore::seeded();
            if rating > 0 {
                store.select_rating(rating).unwrap();
            }
            let before = store.books().to_vec();

            assert_eq!(store.add(book), Err(expected));
            assert_eq!(store.books(), before.as_slice());
            assert_eq!(store.selection().pending_rating, rating);
        }
    }

    #[test]
    fn exhausted_ids_reject_new_books() {
        let mut store = CollectionStore::new(vec![Book {
            id: u64::MAX,
            title: "Last".to_string(),
            author: "Writer".to_string(),
            genre: "Novel".to_string(),
            pages: 10,
            rating: 3,
            read: false,
        }]);
        store.select_rating(4).unwrap();

        assert_eq!(
            store.add(candidate("One more", "Writer", Some(10))),
            Err(ValidationError::IdsExhausted)
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn new_drops_books_with_invalid_ratings() {
        let mut books = crate::domain::book::seed_books();
        books[4].rating = 0;
        books[3].rating = 9;

        let store = CollectionStore::new(books);
        assert_eq!(ids(&store), vec![1, 2, 3]);
    }

    #[test]
    fn select_rating_rejects_out_of_range() {
        let mut store = CollectionStore::default();
        assert_eq!(store.select_rating(0), Err(ValidationError::RatingOutOfRange(0)));
        assert_eq!(store.select_rating(6), Err(ValidationError::RatingOutOfRange(6)));
        assert_eq!(store.selection().pending_rating, 0);
    }

    #[test]
    fn remove_seed_book_by_id() {
        let mut store = CollectionStore::seeded();
        let removed = store.remove(3).map(|b| b.title);
        assert_eq!(removed.as_deref(), Some("Crime and Punishment"));
        assert_eq!(ids(&store), vec![1, 2, 4, 5]);
    }

    #[test]
    fn remove_and_toggle_unknown_id_are_no_ops() {
        let mut store = CollectionStore::seeded();
        assert!(store.remove(99).is_none());
        assert!(store.toggle_read(99).is_none());
        assert_eq!(store.books(), CollectionStore::seeded().books());
    }

    #[test]
    fn toggle_read_twice_restores_original() {
        let mut store = CollectionStore::seeded();
        assert_eq!(store.toggle_read(4), Some(true));
        assert_eq!(store.toggle_read(4), Some(false));
        assert_eq!(store.books(), CollectionStore::seeded().books());
    }

    #[test]
    fn sort_is_stable_and_idempotent() {
        let mut store = CollectionStore::seeded();
        for (rating, title) in [(3, "A"), (5, "B"), (4, "C")] {
            store.select_rating(rating).unwrap();
            store.add(candidate(title, "X", Some(100))).unwrap();
        }

        store.sort_by_rating_descending();
        let once = ids(&store);
        assert_eq!(once, vec![1, 2, 7, 3, 4, 8, 5, 6]);

        store.sort_by_rating_descending();
        assert_eq!(ids(&store), once);
    }

    #[test]
    fn toggles_return_new_state() {
        let mut store = CollectionStore::default();
        assert!(store.toggle_read_filter());
        assert!(!store.toggle_read_filter());
        assert!(store.toggle_highlight());
        assert!(store.selection().highlight_active);
    }

    #[test]
    fn duplicate_ids_in_initial_books_are_dropped() {
        let mut books = crate::domain::book::seed_books();
        books.push(books[0].clone());
        let store = CollectionStore::new(books);
        assert_eq!(ids(&store), vec![1, 2, 3, 4, 5]);
    }
}
