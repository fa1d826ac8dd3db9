//! Theme management and ANSI escape sequence generation.
//!
//! The plugin carries a dark and a light theme and swaps between them on the
//! theme toggle. Both slots can be built-in Catppuccin variants; the dark slot
//! can also come from a custom TOML file.
//!
//! # Built-in Themes
//!
//! - `catppuccin-mocha`: Dark theme with warm tones (default dark)
//! - `catppuccin-latte`: Light theme with soft pastels (default light)
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#f9e2af"
//! read_fg = "#a6e3a1"
//! unread_fg = "#fab387"
//! error_fg = "#f38ba8"
//! emphasis_fg = "#1e1e2e"
//! emphasis_bg = "#89b4fa"
//! highlight_fg = "#1e1e2e"
//! highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! ```
//!
//! # Example
//!
//! ```rust
//! use bookcase::ui::theme::Theme;
//!
//! let theme = Theme::from_name("catppuccin-mocha").unwrap();
//! print!("{}★★★{}", Theme::fg(&theme.colors.accent), Theme::reset());
//! ```

use crate::domain::error::{BookcaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#cdd6f4").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected card or row.
    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Secondary text (author, details, footer).
    pub text_dim: String,

    pub border: String,

    /// Star glyphs and active buttons.
    pub accent: String,

    /// "Read" status marker.
    pub read_fg: String,
    /// "Reading" status marker.
    pub unread_fg: String,

    /// Form validation message.
    pub error_fg: String,

    /// Card reached from the table.
    pub emphasis_fg: String,
    pub emphasis_bg: String,

    /// Five-star table rows while highlighting is on.
    pub highlight_fg: String,
    pub highlight_bg: String,

    pub empty_state_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for names other than `catppuccin-mocha` and
    /// `catppuccin-latte`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// - [`BookcaseError::Io`] if the file cannot be read
    /// - [`BookcaseError::Theme`] if the TOML is malformed or misses a color
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| BookcaseError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Built-in light theme (Catppuccin Latte).
    #[must_use]
    pub fn default_light() -> Self {
        Self::from_name("catppuccin-latte").unwrap_or_else(Self::default)
    }

    /// Title color for a pane: accent while it has focus.
    #[must_use]
    pub fn pane_title_fg(&self, focused: bool) -> &str {
        if focused {
            &self.colors.accent
        } else {
            &self.colors.header_fg
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);

        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground color escape sequence.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the default dark theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which the tests below rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert_eq!(Theme::default_light().name, "catppuccin-latte");
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn escape_sequences() {
        assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
        assert_eq!(Theme::bg("000000"), "\u{1b}[48;2;0;0;0m");
        assert_eq!(Theme::fg("nonsense"), "\u{1b}[38;2;255;255;255m");
    }

    #[test]
    fn focused_pane_title_uses_accent() {
        let theme = Theme::default();
        assert_eq!(theme.pane_title_fg(true), theme.colors.accent);
        assert_eq!(theme.pane_title_fg(false), theme.colors.header_fg);
    }

    #[test]
    fn from_file_loads_custom_theme() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut theme = Theme::default();
        theme.name = "shelf-dark".to_string();
        file.write_all(toml::to_string(&theme).unwrap().as_bytes()).unwrap();

        let loaded = Theme::from_file(file.path()).unwrap();
        assert_eq!(loaded, theme);
    }

    #[test]
    fn from_file_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Theme::from_file(dir.path().join("missing.toml"));
        assert!(matches!(missing, Err(BookcaseError::Io(_))));

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "name = \"half\"\n[colors]\nheader_fg = \"#ffffff\"\n").unwrap();
        assert!(matches!(Theme::from_file(&broken), Err(BookcaseError::Theme(_))));
    }
}
