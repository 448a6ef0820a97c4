use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Result, SearchError};

const REGISTRY_FILE: &str = "obsidian.json";

/// Expand a leading `~/` (or a bare `~`) to `$HOME`.
pub fn expand_home(path: &str) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_home_with(path, home.as_deref())
}

pub fn expand_home_with(path: &str, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~/"), home) {
        (Some(rest), Some(home)) => home.join(rest),
        (None, Some(home)) if path == "~" => home.to_path_buf(),
        _ => PathBuf::from(path),
    }
}

/// Where Obsidian keeps its list of known vaults.
pub fn default_registry_path() -> PathBuf {
    if cfg!(target_os = "macos") {
        expand_home("~/Library/Application Support/obsidian").join(REGISTRY_FILE)
    } else {
        expand_home("~/.config/obsidian").join(REGISTRY_FILE)
    }
}

/// Check that `directory` is a directory we can list before handing it to a
/// child process as its working directory.
pub fn search_root(directory: &Path) -> Result<PathBuf> {
    match fs::read_dir(directory) {
        Ok(_) => Ok(directory.to_path_buf()),
        Err(_) => Err(SearchError::MissingDirectory(directory.to_path_buf())),
    }
}
