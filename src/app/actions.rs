//! Side effects and refresh requests produced by the event handler.
//!
//! [`handle_event`](super::handle_event) returns a [`Refresh`] describing which
//! surfaces the event touched, plus a list of [`Action`]s the plugin runtime
//! must perform (timers, closing the pane). State changes themselves have
//! already happened by the time either is returned.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::actions::{Refresh, Surface};
//!
//! let refresh = Refresh::COLLECTION;
//! assert!(refresh.should_render());
//! assert_eq!(refresh.surfaces(), vec![Surface::Cards, Surface::Table, Surface::Stats]);
//! ```

/// Commands for the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Arms the one-shot timer that clears the card emphasis.
    ///
    /// The runtime answers with an [`Event::EmphasisElapsed`](super::Event::EmphasisElapsed)
    /// after [`CARD_EMPHASIS_SECONDS`](super::state::CARD_EMPHASIS_SECONDS).
    ScheduleEmphasisClear,
}

/// A drawable part of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Form,
    Cards,
    Table,
    Stats,
}

/// Which surfaces an event made stale.
///
/// Projections always come before statistics in [`Refresh::surfaces`], which
/// is the order the view model computes them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Refresh {
    pub form: bool,
    pub cards: bool,
    pub table: bool,
    pub stats: bool,
}

impl Refresh {
    pub const NONE: Self = Self {
        form: false,
        cards: false,
        table: false,
        stats: false,
    };

    pub const FORM: Self = Self {
        form: true,
        ..Self::NONE
    };

    pub const CARDS: Self = Self {
        cards: true,
        ..Self::NONE
    };

    pub const TABLE: Self = Self {
        table: true,
        ..Self::NONE
    };

    /// Both projections, without statistics. Used for reordering.
    pub const VIEWS: Self = Self {
        cards: true,
        table: true,
        ..Self::NONE
    };

    /// Everything derived from the book list.
    pub const COLLECTION: Self = Self {
        cards: true,
        table: true,
        stats: true,
        ..Self::NONE
    };

    /// Every surface, including the form.
    pub const ALL: Self = Self {
        form: true,
        ..Self::COLLECTION
    };

    #[must_use]
    pub const fn should_render(self) -> bool {
        self.form || self.cards || self.table || self.stats
    }

    /// Stale surfaces in redraw order.
    #[must_use]
    pub fn surfaces(self) -> Vec<Surface> {
        [
            (self.form, Surface::Form),
            (self.cards, Surface::Cards),
            (self.table, Surface::Table),
            (self.stats, Surface::Stats),
        ]
        .into_iter()
        .filter_map(|(stale, surface)| stale.then_some(surface))
        .collect()
    }
}
