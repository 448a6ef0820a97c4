use serde::Serialize;

use super::text::title_for;
use super::url::obsidian_url;

const ITEM_TYPE: &str = "default";
const ESCAPED_AMPERSAND: &str = "\\u0026";

/// One row of an Alfred script filter result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub subtitle: String,
    pub arg: String,
}

impl Item {
    /// Item for a vault-relative `path`, opening it in `vault`.
    pub fn for_note(vault: &str, path: &str, subtitle: impl Into<String>) -> Self {
        Self {
            kind: ITEM_TYPE.to_string(),
            title: title_for(path),
            subtitle: subtitle.into(),
            arg: obsidian_url(vault, path),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScriptFilter {
    pub items: Vec<Item>,
}

impl ScriptFilter {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Indented JSON, with any escaped ampersand written back as `&` so the
    /// query string in `arg` survives untouched.
    pub fn render(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(unescape_ampersands(&json))
    }
}

/// Replace `\u0026` escapes with `&`. A `\u0026` preceded by an odd run of
/// backslashes is an escaped backslash followed by literal text and is kept.
fn unescape_ampersands(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut backslashes = 0;
    let mut rest = json;

    while let Some(c) = rest.chars().next() {
        if backslashes % 2 == 0 && rest.starts_with(ESCAPED_AMPERSAND) {
            out.push('&');
            rest = &rest[ESCAPED_AMPERSAND.len()..];
            backslashes = 0;
            continue;
        }

        out.push(c);
        backslashes = if c == '\\' { backslashes + 1 } else { 0 };
        rest = &rest[c.len_utf8()..];
    }

    out
}
