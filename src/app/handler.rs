//! Event handling and intent dispatch.
//!
//! This module is the only writer of the [`CollectionStore`](super::store::CollectionStore).
//! Key-level [`Event`]s from the plugin shim are first resolved against the
//! focused pane into catalog [`Intent`]s keyed by book id, then each intent is
//! dispatched to exactly one store operation.
//!
//! # Architecture
//!
//! ```text
//! Zellij key → Event → resolve (focus, cursor) → Intent → store mutation → Refresh
//! ```
//!
//! The returned [`Refresh`] names the surfaces that went stale; the view model
//! recomputes projections before statistics whenever the shim re-renders.
//!
//! # Example
//!
//! ```rust
//! use bookcase::app::{handle_event, AppState, Event, Intent, Refresh};
//!
//! let mut state = AppState::default();
//! let (refresh, actions) = handle_event(&mut state, &Event::Intent(Intent::Delete(3)))?;
//! assert_eq!(refresh, Refresh::COLLECTION);
//! assert!(actions.is_empty());
//! assert_eq!(state.store.len(), 4);
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

use super::actions::{Action, Refresh};
use super::modes::{Focus, FormField};
use super::AppState;
use crate::domain::error::Result;
use crate::domain::MAX_RATING;

/// A catalog operation requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Choose the rating for the next book (1-5).
    SelectRating(u8),
    /// Submit the add-book form.
    SubmitBook,
    ToggleRead(u64),
    Delete(u64),
    /// Reorder by rating, highest first.
    Sort,
    /// Show only read books in the card list, or show all again.
    ToggleFilter,
    /// Mark five-star table rows, or clear the marks.
    ToggleHighlight,
    /// Swap light and dark theme. Cosmetic only.
    ToggleTheme,
    /// Scroll the card list to this book and emphasise its card.
    JumpToCard(u64),
}

/// Input arriving from the plugin runtime.
///
/// Key events are interpreted relative to the focused pane; `Intent` bypasses
/// that and dispatches directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    KeyDown,
    KeyUp,
    KeyLeft,
    KeyRight,
    Tab,
    Enter,
    Escape,
    Backspace,
    Delete,
    Char(char),
    /// The card emphasis timer fired.
    EmphasisElapsed,
    /// Hide the plugin pane.
    CloseFocus,
    Intent(Intent),
}

/// Processes an event, mutates application state, and reports what changed.
///
/// # Returns
///
/// The stale surfaces and the actions the runtime must execute. Both may be
/// empty when the event did nothing, e.g. deleting with no card selected.
///
/// # Errors
///
/// Returns [`BookcaseError::Validation`](crate::BookcaseError::Validation) for a
/// [`Intent::SelectRating`] outside `1..=5`. Rejected book submissions are not
/// errors: their message goes to the form's error slot.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(Refresh, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event = ?event, focus = ?state.focus).entered();

    match *event {
        Event::Intent(intent) => dispatch(state, intent),
        Event::EmphasisElapsed => {
            if state.emphasis_elapsed() {
                tracing::debug!("card emphasis cleared");
                Ok((Refresh::CARDS, vec![]))
            } else {
                Ok((Refresh::NONE, vec![]))
            }
        }
        Event::CloseFocus => Ok((Refresh::NONE, vec![Action::CloseFocus])),
        _ => match state.focus {
            Focus::Form => handle_form_key(state, *event),
            Focus::Cards | Focus::Table => handle_list_key(state, *event),
        },
    }
}

/// Key handling for the card list and the table.
fn handle_list_key(state: &mut AppState, event: Event) -> Result<(Refresh, Vec<Action>)> {
    let on_cards = state.focus == Focus::Cards;
    let selected = if on_cards {
        state.selected_card_id()
    } else {
        state.selected_row_id()
    };

    match event {
        Event::KeyDown => {
            state.move_selection_down();
            Ok((refresh_for_focus(state.focus), vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((refresh_for_focus(state.focus), vec![]))
        }
        Event::Tab => {
            state.focus = state.focus.next();
            Ok((Refresh::ALL, vec![]))
        }
        Event::Enter if !on_cards => match selected {
            Some(id) => dispatch(state, Intent::JumpToCard(id)),
            None => Ok((Refresh::NONE, vec![])),
        },
        Event::Char(' ') if on_cards => match selected {
            Some(id) => dispatch(state, Intent::ToggleRead(id)),
            None => Ok((Refresh::NONE, vec![])),
        },
        Event::Char('x') | Event::Delete if on_cards => match selected {
            Some(id) => dispatch(state, Intent::Delete(id)),
            None => Ok((Refresh::NONE, vec![])),
        },
        Event::Char('s') => dispatch(state, Intent::Sort),
        Event::Char('f') => dispatch(state, Intent::ToggleFilter),
        Event::Char('h') => dispatch(state, Intent::ToggleHighlight),
        Event::Char('t') => dispatch(state, Intent::ToggleTheme),
        Event::Char('a') => {
            state.focus = Focus::Form;
            Ok((Refresh::ALL, vec![]))
        }
        Event::Char('q') => Ok((Refresh::NONE, vec![Action::CloseFocus])),
        _ => Ok((Refresh::NONE, vec![])),
    }
}

/// Key handling while the add-book form has focus.
fn handle_form_key(state: &mut AppState, event: Event) -> Result<(Refresh, Vec<Action>)> {
    let field = state.form.focus;

    match event {
        Event::Tab | Event::KeyDown => {
            state.move_selection_down();
            Ok((Refresh::FORM, vec![]))
        }
        Event::KeyUp => {
            state.move_selection_up();
            Ok((Refresh::FORM, vec![]))
        }
        Event::Escape => {
            state.focus = Focus::Cards;
            Ok((Refresh::ALL, vec![]))
        }
        Event::Enter => dispatch(state, Intent::SubmitBook),
        Event::KeyLeft | Event::KeyRight if field == FormField::Genre => {
            if event == Event::KeyRight {
                state.form.next_genre();
            } else {
                state.form.prev_genre();
            }
            Ok((Refresh::FORM, vec![]))
        }
        Event::KeyLeft | Event::KeyRight if field == FormField::Rating => {
            let current = state.store.selection().pending_rating;
            let next = if event == Event::KeyRight {
                (current + 1).min(MAX_RATING)
            } else {
                current.saturating_sub(1).max(1)
            };
            dispatch(state, Intent::SelectRating(next))
        }
        Event::Char(c @ '1'..='5') if field == FormField::Rating => {
            dispatch(state, Intent::SelectRating(rating_digit(c)))
        }
        Event::Char(c) => {
            let changed = state.form.push_char(c);
            Ok((if changed { Refresh::FORM } else { Refresh::NONE }, vec![]))
        }
        Event::Backspace => {
            let changed = state.form.backspace();
            Ok((if changed { Refresh::FORM } else { Refresh::NONE }, vec![]))
        }
        _ => Ok((Refresh::NONE, vec![])),
    }
}

/// Applies one intent to the store and reports the stale surfaces.
fn dispatch(state: &mut AppState, intent: Intent) -> Result<(Refresh, Vec<Action>)> {
    tracing::debug!(intent = ?intent, "dispatching intent");

    match intent {
        Intent::SelectRating(rating) => {
            state.store.select_rating(rating)?;
            Ok((Refresh::FORM, vec![]))
        }
        Intent::SubmitBook => {
            let candidate = state.form.candidate();
            match state.store.add(candidate) {
                Ok(book) => {
                    tracing::info!(book_id = book.id, title = %book.title, "book added to catalog");
                    state.form.clear();
                    state.store.reset_pending_rating();
                    Ok((Refresh::ALL, vec![]))
                }
                Err(e) => {
                    tracing::debug!(error = %e, "book rejected");
                    state.form.error = Some(e.to_string());
                    Ok((Refresh::FORM, vec![]))
                }
            }
        }
        Intent::ToggleRead(id) => {
            if state.store.toggle_read(id).is_none() {
                return Ok((Refresh::NONE, vec![]));
            }
            state.clamp_selection();
            Ok((Refresh::COLLECTION, vec![]))
        }
        Intent::Delete(id) => {
            if state.store.remove(id).is_none() {
                return Ok((Refresh::NONE, vec![]));
            }
            state.clamp_selection();
            Ok((Refresh::COLLECTION, vec![]))
        }
        Intent::Sort => {
            state.store.sort_by_rating_descending();
            Ok((Refresh::VIEWS, vec![]))
        }
        Intent::ToggleFilter => {
            let active = state.store.toggle_read_filter();
            tracing::debug!(filter_active = active, "read filter toggled");
            state.clamp_selection();
            Ok((Refresh::CARDS, vec![]))
        }
        Intent::ToggleHighlight => {
            let active = state.store.toggle_highlight();
            tracing::debug!(highlight_active = active, "highlight toggled");
            Ok((Refresh::TABLE, vec![]))
        }
        Intent::ToggleTheme => {
            let dark = state.toggle_theme();
            tracing::debug!(dark_mode = dark, "theme toggled");
            Ok((Refresh::ALL, vec![]))
        }
        Intent::JumpToCard(id) => {
            if !state.emphasize_card(id) {
                tracing::debug!(book_id = id, "card not visible, jump ignored");
                return Ok((Refresh::NONE, vec![]));
            }
            state.focus = Focus::Cards;
            Ok((Refresh::ALL, vec![Action::ScheduleEmphasisClear]))
        }
    }
}

const fn refresh_for_focus(focus: Focus) -> Refresh {
    match focus {
        Focus::Cards => Refresh::CARDS,
        Focus::Table => Refresh::TABLE,
        Focus::Form => Refresh::FORM,
    }
}

fn rating_digit(c: char) -> u8 {
    c.to_digit(10).and_then(|d| u8::try_from(d).ok()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookcaseError, ValidationError};

    fn run(state: &mut AppState, event: Event) -> (Refresh, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            run(state, Event::Char(c));
        }
    }

    fn fill_form(state: &mut AppState, title: &str, author: &str, pages: &str) {
        state.focus = Focus::Form;
        state.form.focus = FormField::Title;
        type_text(state, title);
        run(state, Event::Tab);
        type_text(state, author);
        run(state, Event::Tab);
        run(state, Event::Tab);
        type_text(state, pages);
        run(state, Event::Tab);
    }

    #[test]
    fn submit_valid_book_clears_form_and_rating() {
        let mut state = AppState::default();
        fill_form(&mut state, "Dune", "Frank Herbert", "412");
        assert_eq!(state.form.focus, FormField::Rating);
        run(&mut state, Event::Char('4'));
        assert_eq!(state.store.selection().pending_rating, 4);

        let (refresh, actions) = run(&mut state, Event::Enter);

        assert_eq!(refresh, Refresh::ALL);
        assert!(actions.is_empty());
        assert_eq!(state.store.len(), 6);
        let book = state.store.get(6).unwrap();
        assert_eq!((book.title.as_str(), book.pages, book.rating, book.read), ("Dune", 412, 4, false));
        assert!(state.form.title.is_empty());
        assert_eq!(state.form.error, None);
        assert_eq!(state.store.selection().pending_rating, 0);
    }

    #[test]
    fn rejected_submit_keeps_form_and_reports_message() {
        let mut state = AppState::default();
        fill_form(&mut state, "Dune", "Frank Herbert", "412");

        let (refresh, _) = run(&mut state, Event::Enter);

        assert_eq!(refresh, Refresh::FORM);
        assert_eq!(state.store.len(), 5);
        assert_eq!(state.form.error.as_deref(), Some("Select a rating"));
        assert_eq!(state.form.title, "Dune");
        assert_eq!(state.form.pages, "412");

        state.form.pages.clear();
        run(&mut state, Event::Intent(Intent::SelectRating(2)));
        run(&mut state, Event::Enter);
        assert_eq!(state.form.error.as_deref(), Some("Page count must be a positive number"));
        assert_eq!(state.store.selection().pending_rating, 2);
    }

    #[test]
    fn oversized_page_count_gets_its_own_message() {
        let mut state = AppState::default();
        fill_form(&mut state, "Dune", "Frank Herbert", "5000000000");
        run(&mut state, Event::Char('4'));

        run(&mut state, Event::Enter);

        assert_eq!(state.store.len(), 5);
        assert_eq!(state.form.error.as_deref(), Some("Page count must be at most 4294967295"));
    }

    #[test]
    fn out_of_range_rating_intent_is_an_error() {
        let mut state = AppState::default();
        let err = handle_event(&mut state, &Event::Intent(Intent::SelectRating(9))).unwrap_err();
        assert!(matches!(
            err,
            BookcaseError::Validation(ValidationError::RatingOutOfRange(9))
        ));
    }

    #[test]
    fn arrows_adjust_rating_within_bounds() {
        let mut state = AppState::default();
        state.focus = Focus::Form;
        state.form.focus = FormField::Rating;

        run(&mut state, Event::KeyLeft);
        assert_eq!(state.store.selection().pending_rating, 1);
        for _ in 0..7 {
            run(&mut state, Event::KeyRight);
        }
        assert_eq!(state.store.selection().pending_rating, 5);
    }

    #[test]
    fn card_keys_toggle_and_delete_selected_book() {
        let mut state = AppState::default();
        run(&mut state, Event::KeyDown);
        run(&mut state, Event::KeyDown);

        let (refresh, _) = run(&mut state, Event::Char(' '));
        assert_eq!(refresh, Refresh::COLLECTION);
        assert!(state.store.get(3).unwrap().read);

        run(&mut state, Event::Char('x'));
        let ids: Vec<u64> = state.store.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
        assert_eq!(state.selected_card_id(), Some(4));
    }

    #[test]
    fn unknown_ids_are_silent_no_ops() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Event::Intent(Intent::Delete(42))).0, Refresh::NONE);
        assert_eq!(run(&mut state, Event::Intent(Intent::ToggleRead(42))).0, Refresh::NONE);
        assert_eq!(state.store.len(), 5);
    }

    #[test]
    fn digits_outside_the_rating_field_do_not_rate() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Event::Char('4')).0, Refresh::NONE);
        state.focus = Focus::Table;
        assert_eq!(run(&mut state, Event::Char('4')).0, Refresh::NONE);
        assert_eq!(state.store.selection().pending_rating, 0);
    }

    #[test]
    fn sort_refreshes_views_but_not_stats() {
        let mut state = AppState::default();
        let (refresh, _) = run(&mut state, Event::Char('s'));
        assert_eq!(refresh, Refresh::VIEWS);
        assert!(!refresh.stats);
    }

    #[test]
    fn filter_and_highlight_touch_their_own_surface() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Event::Char('f')).0, Refresh::CARDS);
        assert!(state.store.selection().filter_active);
        assert_eq!(run(&mut state, Event::Char('h')).0, Refresh::TABLE);
        assert!(state.store.selection().highlight_active);
    }

    #[test]
    fn enter_on_table_row_jumps_to_card() {
        let mut state = AppState::default();
        run(&mut state, Event::Tab);
        assert_eq!(state.focus, Focus::Table);
        run(&mut state, Event::KeyDown);
        run(&mut state, Event::KeyDown);
        run(&mut state, Event::KeyDown);

        let (_, actions) = run(&mut state, Event::Enter);

        assert_eq!(actions, vec![Action::ScheduleEmphasisClear]);
        assert_eq!(state.focus, Focus::Cards);
        assert_eq!(state.selected_card_id(), Some(4));
        assert_eq!(state.emphasized_card, Some(4));

        let (refresh, _) = run(&mut state, Event::EmphasisElapsed);
        assert_eq!(refresh, Refresh::CARDS);
        assert_eq!(state.emphasized_card, None);
    }

    #[test]
    fn jump_to_filtered_card_does_nothing() {
        let mut state = AppState::default();
        run(&mut state, Event::Char('f'));
        let (refresh, actions) = run(&mut state, Event::Intent(Intent::JumpToCard(5)));
        assert_eq!(refresh, Refresh::NONE);
        assert!(actions.is_empty());
        assert_eq!(state.emphasized_card, None);
    }

    #[test]
    fn quit_and_escape() {
        let mut state = AppState::default();
        assert_eq!(run(&mut state, Event::Char('q')).1, vec![Action::CloseFocus]);

        run(&mut state, Event::Char('a'));
        assert_eq!(state.focus, Focus::Form);
        run(&mut state, Event::Char('q'));
        assert_eq!(state.form.title, "q");
        run(&mut state, Event::Escape);
        assert_eq!(state.focus, Focus::Cards);
    }
}
