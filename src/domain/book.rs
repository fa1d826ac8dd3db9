//! Book domain model.
//!
//! A [`Book`] is a passive record: it has no behaviour beyond a few display
//! helpers. New books enter the catalog as a [`NewBook`] candidate that the
//! collection store validates before assigning an id.

/// Highest rating a book can have. Also the number of glyphs in a star bar.
pub const MAX_RATING: u8 = 5;

/// Filled star glyph.
pub const STAR_FILLED: char = '★';

/// Empty star glyph.
pub const STAR_EMPTY: char = '☆';

/// Genres offered by the add-book form.
///
/// Stored books keep their genre as free text, so a book outside this list is
/// still valid.
pub const GENRES: &[&str] = &[
    "Science Fiction",
    "Novel",
    "Detective",
    "Fantasy",
    "Non-fiction",
    "Poetry",
];

/// A single catalog entry.
///
/// # Fields
///
/// - `id`: unique within the live collection, assigned by the store
/// - `title`, `author`: non-empty display text
/// - `genre`: free text, usually one of [`GENRES`]
/// - `pages`: positive page count
/// - `rating`: `1..=MAX_RATING`
/// - `read`: whether the book has been finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: u32,
    pub rating: u8,
    pub read: bool,
}

impl Book {
    /// Renders the rating as a full five-glyph bar.
    ///
    /// # Examples
    ///
    /// ```
    /// use bookcase::domain::book::seed_books;
    ///
    /// let books = seed_books();
    /// assert_eq!(books[4].star_bar(), "★★★☆☆");
    /// ```
    #[must_use]
    pub fn star_bar(&self) -> String {
        let filled = self.rating.min(MAX_RATING);
        let mut bar = filled_stars(filled);
        bar.extend(std::iter::repeat(STAR_EMPTY).take(usize::from(MAX_RATING - filled)));
        bar
    }

    /// Renders only the filled part of the rating, as the table does.
    #[must_use]
    pub fn filled_stars(&self) -> String {
        filled_stars(self.rating)
    }

    /// Whether the book carries the maximum rating.
    #[must_use]
    pub const fn is_top_rated(&self) -> bool {
        self.rating == MAX_RATING
    }
}

fn filled_stars(count: u8) -> String {
    std::iter::repeat(STAR_FILLED)
        .take(usize::from(count))
        .collect()
}

/// A book that has not been admitted to the collection yet.
///
/// Produced by the add-book form. `pages` is `None` when the page field is
/// empty or does not start with a number; it is signed so that a typed `-3`
/// survives extraction and is rejected by validation instead of by parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: Option<i64>,
}

/// The five books every fresh catalog starts with.
///
/// Ratings are 5, 5, 4, 4, 3 and the first two are marked read.
#[must_use]
pub fn seed_books() -> Vec<Book> {
    let seed = [
        (1, "1984", "George Orwell", "Science Fiction", 328, 5, true),
        (2, "The Master and Margarita", "Mikhail Bulgakov", "Novel", 480, 5, true),
        (3, "Crime and Punishment", "Fyodor Dostoevsky", "Novel", 671, 4, false),
        (4, "Harry Potter", "J. K. Rowling", "Science Fiction", 320, 4, false),
        (5, "Sherlock Holmes", "Arthur Conan Doyle", "Detective", 307, 3, false),
    ];

    seed.into_iter()
        .map(|(id, title, author, genre, pages, rating, read)| Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            pages,
            rating,
            read,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn star_bar_pads_with_empty_glyphs() {
        let mut book = seed_books().remove(0);
        book.rating = 2;
        assert_eq!(book.star_bar(), "★★☆☆☆");
        assert_eq!(book.filled_stars(), "★★");
    }

    #[test]
    fn seed_has_unique_ids_and_expected_ratings() {
        let books = seed_books();
        let ratings: Vec<u8> = books.iter().map(|b| b.rating).collect();
        assert_eq!(ratings, vec![5, 5, 4, 4, 3]);

        let mut ids: Vec<u64> = books.iter().map(|b| b.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(books.iter().filter(|b| b.read).count(), 2);
    }

    #[test]
    fn only_five_star_books_are_top_rated() {
        let books = seed_books();
        let top: Vec<u64> = books.iter().filter(|b| b.is_top_rated()).map(|b| b.id).collect();
        assert_eq!(top, vec![1, 2]);
    }
}
