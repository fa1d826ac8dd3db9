//! Zellij plugin wrapper and entry point.
//!
//! This module is the thin integration layer between the Bookcase library and
//! the Zellij plugin system. It implements `ZellijPlugin`, translates Zellij
//! keys into library events and carries out the returned actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key` and `Timer` events
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! - `Key(Down)` / `Key(Up)` → `Event::KeyDown` / `Event::KeyUp`
//! - `Key(j)` / `Key(k)` → same, unless the form is focused (then typed)
//! - `Key(Space)` → `Event::Char(' ')`
//! - `Timer` → `Event::EmphasisElapsed`
//!
//! # Keybindings
//!
//! Global (all panes):
//! - `Ctrl+n`: Move down
//! - `Ctrl+p`: Move up
//!
//! Everything else depends on the focused pane; the footer lists the active
//! bindings.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use bookcase::app::state::CARD_EMPHASIS_SECONDS;
use bookcase::app::{AppState, Focus};
use bookcase::{handle_event, Action, Config, Event};

register_plugin!(State);

/// Plugin state wrapper.
#[derive(Default)]
struct State {
    /// Core application state from library layer.
    app: AppState,
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, and subscribes to
    /// key and timer events.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        bookcase::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        self.app = bookcase::initialize(&config);
        tracing::info!(books = self.app.store.len(), "catalog ready");

        subscribe(&[EventType::Key, EventType::Timer]);
    }

    /// Handles incoming Zellij events.
    ///
    /// # Returns
    ///
    /// `true` if any surface went stale and the plugin should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::EmphasisElapsed,
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((refresh, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    surfaces = ?refresh.surfaces(),
                    "event handled"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                refresh.should_render()
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        bookcase::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    ///
    /// `j` and `k` only navigate outside the form, where they are ordinary
    /// letters.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                _ => None,
            };
        }

        let typing = self.app.focus == Focus::Form;
        Some(match key.bare_key {
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if !typing => Event::KeyDown,
            BareKey::Char('k') if !typing => Event::KeyUp,
            BareKey::Left => Event::KeyLeft,
            BareKey::Right => Event::KeyRight,
            BareKey::Tab => Event::Tab,
            BareKey::Enter => Event::Enter,
            BareKey::Esc => Event::Escape,
            BareKey::Backspace => Event::Backspace,
            BareKey::Delete => Event::Delete,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleEmphasisClear => {
                set_timeout(CARD_EMPHASIS_SECONDS);
            }
        }
    }
}
