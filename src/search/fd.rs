//! Filename search through `fd`.

use std::path::Path;

use crate::core::error::{Result, SearchError};
use crate::core::paths::search_root;

use super::process::{capture, Tools};

pub fn fd_args(term: &str) -> Vec<&str> {
    vec!["-0", "--type=f", "--glob", "--", term]
}

/// Raw null-separated `fd` output for `term` under `directory`.
pub fn find_files(tools: &Tools, directory: &Path, term: &str) -> Result<Vec<u8>> {
    let root = search_root(directory)?;
    let output = capture(tools, &tools.fd, &fd_args(term), &root)?;

    if !output.status.success() {
        return Err(SearchError::ToolFailed {
            program: tools.fd.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}

/// Split null-separated output into paths, dropping empty tokens. Paths that
/// are not valid UTF-8 cannot become URLs; they are left out and counted.
pub fn parse_paths(raw: &[u8]) -> (Vec<String>, usize) {
    let mut paths = Vec::new();
    let mut skipped = 0;

    for token in raw.split(|&b| b == 0).filter(|t| !t.is_empty()) {
        match std::str::from_utf8(token) {
            Ok(path) => paths.push(path.to_string()),
            Err(_) => skipped += 1,
        }
    }

    (paths, skipped)
}
