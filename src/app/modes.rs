//! Focus state types for the application.
//!
//! These enums decide which pane receives key input and, inside the add-book
//! form, which field is being edited.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::modes::{Focus, FormField};
//!
//! assert_eq!(Focus::Cards.next(), Focus::Table);
//! assert_eq!(FormField::Rating.next(), FormField::Title);
//! ```

/// Pane that currently owns keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Card list: move, toggle read, delete.
    #[default]
    Cards,

    /// Summary table: move and jump to the matching card.
    Table,

    /// Add-book form: typed characters edit the focused field.
    Form,
}

impl Focus {
    /// Next pane in `Cards → Table → Form` order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Cards => Self::Table,
            Self::Table => Self::Form,
            Self::Form => Self::Cards,
        }
    }
}

/// Field of the add-book form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Author,
    /// Cycled through the fixed genre list.
    Genre,
    Pages,
    /// One-to-five star selector.
    Rating,
}

impl FormField {
    pub const ALL: [Self; 5] = [
        Self::Title,
        Self::Author,
        Self::Genre,
        Self::Pages,
        Self::Rating,
    ];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Title => Self::Author,
            Self::Author => Self::Genre,
            Self::Genre => Self::Pages,
            Self::Pages => Self::Rating,
            Self::Rating => Self::Title,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Title => Self::Rating,
            Self::Author => Self::Title,
            Self::Genre => Self::Author,
            Self::Pages => Self::Genre,
            Self::Rating => Self::Pages,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::Pages => "Pages",
            Self::Rating => "Rating",
        }
    }
}
