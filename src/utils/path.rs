//! Path utilities for user-supplied file locations (data file, export target).

use std::path::PathBuf;

/// Expand a leading `~/` into the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(path)
}

/// Export targets must be absolute once `~` is expanded.
pub fn absolute_target(path: &str) -> Option<PathBuf> {
    let p = expand_tilde(path);
    p.is_absolute().then_some(p)
}
