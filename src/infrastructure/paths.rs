//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Sandbox mount point of the host directory Zellij was started from.
const HOST_ROOT: &str = "/host";

/// Returns the directory holding photoseek's trace files.
///
/// Resolves to `/host/.local/share/zellij/photoseek`, which is
/// `~/.local/share/zellij/photoseek` when Zellij was started from the home
/// directory.
///
/// # Examples
///
/// ```
/// use photoseek::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/photoseek"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_ROOT).join(".local/share/zellij/photoseek")
}

/// Rewrites a leading `~` to the sandbox host root.
///
/// Only `~` alone or `~/...` is rewritten; `~user` forms are left untouched.
///
/// # Examples
///
/// ```
/// use photoseek::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("~bob/x"), "~bob/x");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_ROOT.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_ROOT}{rest}"),
        _ => path.to_string(),
    }
}
