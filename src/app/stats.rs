//! Aggregate statistics derived from the collection.
//!
//! Statistics are never stored; they are recomputed from the live book list
//! whenever the view is drawn.

use crate::domain::Book;

/// Summary figures shown in the stats bar and footer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stats {
    pub total: usize,
    pub read_count: usize,
    /// Mean rating rounded to one decimal place, `0.0` for an empty collection.
    pub average_rating: f64,
}

impl Stats {
    /// Average rating formatted with exactly one decimal, e.g. `"4.2"`.
    #[must_use]
    pub fn average_label(&self) -> String {
        format!("{:.1}", self.average_rating)
    }
}

/// Computes totals and the rounded average rating.
///
/// # Example
///
/// ```rust
/// use bookcase::app::stats::compute_stats;
/// use bookcase::domain::book::seed_books;
///
/// let stats = compute_stats(&seed_books());
/// assert_eq!((stats.total, stats.read_count), (5, 2));
/// assert_eq!(stats.average_rating, 4.2);
/// ```
#[must_use]
pub fn compute_stats(books: &[Book]) -> Stats {
    let total = books.len();
    let read_count = books.iter().filter(|b| b.read).count();

    let average_rating = if total == 0 {
        0.0
    } else {
        let sum: u64 = books.iter().map(|b| u64::from(b.rating)).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = sum as f64 / total as f64;
        (mean * 10.0).round() / 10.0
    };

    Stats {
        total,
        read_count,
        average_rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::book::seed_books;

    #[test]
    fn empty_collection_has_zero_average() {
        let stats = compute_stats(&[]);
        assert_eq!(
            stats,
            Stats {
                total: 0,
                read_count: 0,
                average_rating: 0.0
            }
        );
        assert_eq!(stats.average_label(), "0.0");
    }

    #[test]
    fn seed_collection_stats() {
        let stats = compute_stats(&seed_books());
        assert_eq!(stats.total, 5);
        assert_eq!(stats.read_count, 2);
        assert_eq!(stats.average_rating, 4.2);
        assert_eq!(stats.average_label(), "4.2");
    }

    #[test]
    fn average_rounds_to_one_decimal() {
        let mut books = seed_books();
        books.truncate(3); // 5, 5, 4 -> 4.666..
        assert_eq!(compute_stats(&books).average_rating, 4.7);
    }
}
