//! Add-book form state and value extraction.
//!
//! The form owns the raw text typed by the user. It knows nothing about
//! validation: [`FormState::candidate`] hands a [`NewBook`] to the collection
//! store, which decides whether it is acceptable. The rating is not kept here;
//! it lives in the store's selection state.

use super::modes::FormField;
use crate::domain::{NewBook, GENRES};

/// Text buffers and focus for the add-book form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub title: String,
    pub author: String,
    pub pages: String,
    /// Index into [`GENRES`].
    pub genre_index: usize,
    pub focus: FormField,
    /// Message from the last rejected submission.
    pub error: Option<String>,
}

impl FormState {
    #[must_use]
    pub fn genre(&self) -> &'static str {
        GENRES[self.genre_index % GENRES.len()]
    }

    pub fn next_genre(&mut self) {
        self.genre_index = (self.genre_index + 1) % GENRES.len();
    }

    pub fn prev_genre(&mut self) {
        self.genre_index = self
            .genre_index
            .checked_sub(1)
            .unwrap_or(GENRES.len() - 1);
    }

    /// Appends a character to the focused text field.
    ///
    /// Returns `false` when the focused field does not take typed text
    /// (genre, rating) or, for the pages field, when `c` is not a digit or a
    /// leading minus sign.
    pub fn push_char(&mut self, c: char) -> bool {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Author => self.author.push(c),
            FormField::Pages => {
                let leading_sign = c == '-' && self.pages.is_empty();
                if !c.is_ascii_digit() && !leading_sign {
                    return false;
                }
                self.pages.push(c);
            }
            FormField::Genre | FormField::Rating => return false,
        }
        true
    }

    /// Removes the last character of the focused text field.
    pub fn backspace(&mut self) -> bool {
        let buffer = match self.focus {
            FormField::Title => &mut self.title,
            FormField::Author => &mut self.author,
            FormField::Pages => &mut self.pages,
            FormField::Genre | FormField::Rating => return false,
        };
        buffer.pop().is_some()
    }

    /// Extracts the current field values as an add-book candidate.
    #[must_use]
    pub fn candidate(&self) -> NewBook {
        NewBook {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            genre: self.genre().to_string(),
            pages: parse_pages(&self.pages),
        }
    }

    /// Empties the text fields and the error slot after a successful add.
    ///
    /// Genre choice and field focus are kept.
    pub fn clear(&mut self) {
        self.title.clear();
        self.author.clear();
        self.pages.clear();
        self.error = None;
    }
}

/// Reads a page count the lenient way: optional sign, then leading digits.
///
/// Anything after the digits is ignored; no digits at all gives `None`.
/// Digit runs too long for `i64` saturate.
fn parse_pages(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let digits = &digits[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse::<i64>().map_or(sign * i64::MAX, |n| sign * n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_pages_accepts_leading_digits() {
        assert_eq!(parse_pages("328"), Some(328));
        assert_eq!(parse_pages(" 12abc "), Some(12));
        assert_eq!(parse_pages("-4"), Some(-4));
        assert_eq!(parse_pages("+7"), Some(7));
        assert_eq!(parse_pages(""), None);
        assert_eq!(parse_pages("abc"), None);
        assert_eq!(parse_pages("-"), None);
        assert_eq!(parse_pages("99999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = FormState::default();
        "Dune".chars().for_each(|c| {
            form.push_char(c);
        });
        form.focus = FormField::Pages;
        assert!(form.push_char('4'));
        assert!(!form.push_char('x'));
        assert!(!form.push_char('-'));
        form.focus = FormField::Genre;
        assert!(!form.push_char('z'));

        assert_eq!(form.title, "Dune");
        assert_eq!(form.pages, "4");
    }

    #[test]
    fn genre_cycles_both_ways() {
        let mut form = FormState::default();
        form.prev_genre();
        assert_eq!(form.genre(), GENRES[GENRES.len() - 1]);
        form.next_genre();
        assert_eq!(form.genre(), GENRES[0]);
    }

    #[test]
    fn candidate_and_clear() {
        let mut form = FormState {
            title: " Emma ".into(),
            author: "Jane Austen".into(),
            pages: "474".into(),
            genre_index: 1,
            focus: FormField::Pages,
            error: Some("Select a rating".into()),
        };

        let candidate = form.candidate();
        assert_eq!(candidate.title, "Emma");
        assert_eq!(candidate.genre, "Novel");
        assert_eq!(candidate.pages, Some(474));

        form.clear();
        assert!(form.title.is_empty() && form.author.is_empty() && form.pages.is_empty());
        assert_eq!(form.error, None);
        assert_eq!(form.genre_index, 1);
        assert_eq!(form.focus, FormField::Pages);
    }
}
