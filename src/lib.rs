//! Bookcase: a Zellij plugin for keeping a small book catalog.
//!
//! Bookcase renders a personal reading list inside a terminal pane:
//! - Cards for every book, with star ratings and a read toggle
//! - A summary table of the first eight books, with top-rated highlighting
//! - Live statistics: book count, read count and average rating
//! - A validated add-book form with a one-to-five star selector
//! - A dark and a light theme, switchable at runtime

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling and intent dispatch               │
//! │  - Collection store (sole owner of the books)       │
//! │  - Statistics and view model computation            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI Layer (ui/)                                     │
//! │  - Card and table projections                       │
//! │  - Rendering components and theming                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Book model, seed data, errors (domain/)          │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing to a rotating OTLP file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/bookcase.wasm" {
//!         theme "catppuccin-mocha"
//!         light_theme "catppuccin-latte"
//!         theme_file "~/.config/zellij/bookcase-theme.toml"
//!         trace_level "debug"
//!         seed "true"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookcase::{handle_event, initialize, Config, Event, Intent};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::Intent(Intent::ToggleFilter))?;
//!
//! let vm = state.compute_viewmodel(40, 120);
//! assert_eq!(vm.cards.items.len(), 2);
//! assert_eq!(vm.table.rows.len(), 5);
//! assert_eq!(vm.stats.average, "4.2");
//! # Ok::<(), bookcase::BookcaseError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Intent, Refresh};
pub use domain::{Book, BookcaseError, NewBook, Result, ValidationError};
pub use ui::Theme;

use app::CollectionStore;
use std::collections::BTreeMap;

const DEFAULT_DARK_THEME: &str = "catppuccin-mocha";
const DEFAULT_LIGHT_THEME: &str = "catppuccin-latte";

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme for the dark slot. Ignored if `theme_file` is set.
    pub theme_name: String,

    /// Built-in theme for the light slot.
    pub light_theme_name: String,

    /// Custom TOML theme for the dark slot, `~` allowed.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: String,

    /// Start with the sample books. Default: `true`
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme_name: DEFAULT_DARK_THEME.to_string(),
            light_theme_name: DEFAULT_LIGHT_THEME.to_string(),
            theme_file: None,
            trace_level: "info".to_string(),
            seed: true,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Missing keys take their defaults. An unreadable `seed` value is logged
    /// and treated as `true`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bookcase::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-latte".to_string());
    /// map.insert("seed".to_string(), "false".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name, "catppuccin-latte");
    /// assert!(!config.seed);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let seed = config.get("seed").map_or(Ok(true), |v| parse_flag("seed", v));
        let seed = seed.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring seed option");
            true
        });

        Self {
            theme_name: non_empty("theme").unwrap_or(defaults.theme_name),
            light_theme_name: non_empty("light_theme").unwrap_or(defaults.light_theme_name),
            theme_file: non_empty("theme_file"),
            trace_level: non_empty("trace_level").unwrap_or(defaults.trace_level),
            seed,
        }
    }
}

/// Reads a boolean option written as `true`/`false`, `yes`/`no` or `1`/`0`.
///
/// # Errors
///
/// Returns [`BookcaseError::Config`] for any other value.
pub fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(BookcaseError::Config(format!(
            "{key} must be true or false, got {other:?}"
        ))),
    }
}

/// Builds the initial application state.
///
/// Loads both themes, falling back to the built-in defaults when a name is
/// unknown or the theme file cannot be read, and seeds the collection unless
/// `config.seed` is off.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing bookcase plugin");

    let dark = config.theme_file.as_ref().map_or_else(
        || builtin_theme(&config.theme_name, Theme::default),
        |theme_file| {
            let path = infrastructure::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme file, using default");
                Theme::default()
            })
        },
    );
    let light = builtin_theme(&config.light_theme_name, Theme::default_light);

    let store = if config.seed {
        CollectionStore::seeded()
    } else {
        CollectionStore::default()
    };

    AppState::new(store, dark, light)
}

fn builtin_theme(name: &str, fallback: fn() -> Theme) -> Theme {
    Theme::from_name(name).unwrap_or_else(|| {
        tracing::warn!(theme_name = %name, "unknown theme, using default");
        fallback()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn options_are_read_and_trimmed() {
        let config = Config::from_zellij(&map(&[
            ("theme", " catppuccin-latte "),
            ("light_theme", "catppuccin-mocha"),
            ("theme_file", "~/shelf.toml"),
            ("trace_level", "bookcase=trace"),
            ("seed", "no"),
        ]));

        assert_eq!(config.theme_name, "catppuccin-latte");
        assert_eq!(config.light_theme_name, "catppuccin-mocha");
        assert_eq!(config.theme_file.as_deref(), Some("~/shelf.toml"));
        assert_eq!(config.trace_level, "bookcase=trace");
        assert!(!config.seed);
    }

    #[test]
    fn unreadable_seed_flag_keeps_seed() {
        assert!(Config::from_zellij(&map(&[("seed", "maybe")])).seed);
        assert!(matches!(
            parse_flag("seed", "maybe"),
            Err(BookcaseError::Config(_))
        ));
        assert!(!parse_flag("seed", "FALSE").unwrap());
    }

    #[test]
    fn initialize_honours_seed_and_themes() {
        let state = initialize(&Config::default());
        assert_eq!(state.store.len(), 5);
        assert_eq!(state.dark_theme.name, DEFAULT_DARK_THEME);
        assert_eq!(state.light_theme.name, DEFAULT_LIGHT_THEME);

        let state = initialize(&Config {
            theme_name: "no-such-theme".to_string(),
            theme_file: None,
            seed: false,
            ..Config::default()
        });
        assert!(state.store.is_empty());
        assert_eq!(state.dark_theme.name, DEFAULT_DARK_THEME);
    }

    #[test]
    fn initialize_loads_theme_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shelf.toml");
        let mut theme = Theme::default_light();
        theme.name = "shelf".to_string();
        std::fs::write(&path, toml::to_string(&theme).unwrap()).unwrap();

        let state = initialize(&Config {
            theme_file: Some(path.to_string_lossy().into_owned()),
            ..Config::default()
        });
        assert_eq!(state.dark_theme.name, "shelf");

        let state = initialize(&Config {
            theme_file: Some(dir.path().join("missing.toml").to_string_lossy().into_owned()),
            ..Config::default()
        });
        assert_eq!(state.dark_theme.name, DEFAULT_DARK_THEME);
    }
}
