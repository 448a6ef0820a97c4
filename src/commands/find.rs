use anyhow::Result;

use crate::core::alfred::{Item, ScriptFilter};
use crate::core::error::SearchError;
use crate::core::request::SearchRequest;
use crate::search::fd::{find_files, parse_paths};
use crate::search::Tools;

pub fn run(request: &SearchRequest, tools: &Tools) -> Result<()> {
    let filter = collect(request, tools)?;
    println!("{}", filter.render()?);
    Ok(())
}

pub fn collect(request: &SearchRequest, tools: &Tools) -> Result<ScriptFilter, SearchError> {
    let raw = find_files(tools, &request.directory, &request.term)?;
    let (paths, skipped) = parse_paths(&raw);
    if skipped > 0 {
        tools.trace(&format!("skipped {} files with non UTF-8 paths", skipped));
    }
    tools.trace(&format!("{} files matched", paths.len()));

    Ok(shape_paths(&request.vault, &paths))
}

/// One item per path, in the order fd reported them.
pub fn shape_paths(vault: &str, paths: &[String]) -> ScriptFilter {
    ScriptFilter::new(
        paths
            .iter()
            .map(|path| Item::for_note(vault, path, ""))
            .collect(),
    )
}
