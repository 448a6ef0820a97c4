use std::collections::HashSet;

use anyhow::Result;

use crate::core::alfred::{Item, ScriptFilter};
use crate::core::error::SearchError;
use crate::core::request::SearchRequest;
use crate::core::text::{fruncate, LEAD_CONTEXT, WORD_WINDOW};
use crate::search::ripgrep::{grep, parse_stream, RgMatch};
use crate::search::Tools;

pub fn run(request: &SearchRequest, tools: &Tools) -> Result<()> {
    let filter = collect(request, tools)?;
    println!("{}", filter.render()?);
    Ok(())
}

pub fn collect(request: &SearchRequest, tools: &Tools) -> Result<ScriptFilter, SearchError> {
    let raw = grep(tools, &request.directory, &request.term)?;
    let matches = parse_stream(&raw)?;

    let unnamed = matches.iter().filter(|m| m.path.is_none()).count();
    if unnamed > 0 {
        tools.trace(&format!("skipped {} matches with non UTF-8 paths", unnamed));
    }

    let filter = shape_matches(&request.vault, &request.term, matches);
    tools.trace(&format!("{} files matched", filter.items.len()));
    Ok(filter)
}

/// One item per file, taken from its first match; the subtitle is the matched
/// line cut down to the text around `term`.
pub fn shape_matches(vault: &str, term: &str, matches: Vec<RgMatch>) -> ScriptFilter {
    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for m in matches {
        let Some(path) = m.path else {
            continue;
        };
        if seen.contains(&path) {
            continue;
        }

        let line = m.line.unwrap_or_default();
        let subtitle = fruncate(&line, term, LEAD_CONTEXT, WORD_WINDOW);
        items.push(Item::for_note(vault, &path, subtitle));
        seen.insert(path);
    }

    ScriptFilter::new(items)
}
