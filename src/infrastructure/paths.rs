//! Path handling for the Zellij sandbox.
//!
//! Inside the plugin `/host` is the directory Zellij was started from (or the
//! cwd of the last focused terminal), which is normally the user's home.

use std::path::PathBuf;

/// Directory holding the plugin's trace files.
///
/// Resolves to `~/.local/share/zellij/bookcase` on the host when Zellij was
/// started from the home directory.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/bookcase"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("bookcase")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// Used for the `theme_file` option, which users write as a home-relative
/// path.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/shelf.toml"), "/host/themes/shelf.toml");
/// assert_eq!(expand_tilde("/etc/shelf.toml"), "/etc/shelf.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_only_expands_as_home_prefix() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/a/b.toml"), "/host/a/b.toml");
        assert_eq!(expand_tilde("~alice/b.toml"), "~alice/b.toml");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }

    #[test]
    fn data_dir_lives_under_zellij_share() {
        assert!(get_data_dir().ends_with("zellij/bookcase"));
    }
}
