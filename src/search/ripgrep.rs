//! Content search through `rg --json`.

use std::path::Path;

use colored::*;
use serde::Deserialize;

use crate::core::error::{Result, SearchError};
use crate::core::paths::search_root;

use super::process::{capture, Tools};

/// One line of `rg --json` output. Only `match` messages carry anything we use.
#[derive(Debug, Deserialize)]
struct Message {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    data: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct MatchData {
    path: Data,
    #[serde(default)]
    lines: Data,
}

/// rg reports valid UTF-8 as `text` and anything else base64-encoded as `bytes`.
#[derive(Debug, Default, Deserialize)]
struct Data {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgMatch {
    /// `None` when the path is not valid UTF-8.
    pub path: Option<String>,
    /// Matched line without its terminator; `None` when not valid UTF-8.
    pub line: Option<String>,
}

pub fn rg_args(term: &str, ignore_case: bool) -> Vec<&str> {
    let mut args = vec!["--json"];
    if ignore_case {
        args.push("--ignore-case");
    }
    args.extend(["--sortr", "modified", "--", term]);
    args
}

/// Raw `rg --json` output for `term` under `directory`.
///
/// rg exits 1 when nothing matches and 2 on partial errors, so the exit
/// status is not checked. When rg cannot be started at all the search simply
/// comes back empty.
pub fn grep(tools: &Tools, directory: &Path, term: &str) -> Result<String> {
    let root = search_root(directory)?;
    let output = match capture(tools, &tools.rg, &rg_args(term, tools.ignore_case), &root) {
        Ok(output) => output,
        Err(err) => {
            eprintln!("{} {}", "warning:".yellow(), err);
            return Ok(String::new());
        }
    };

    if !output.status.success() {
        tools.trace(&format!("{} exited with {}", tools.rg, output.status));
    }

    String::from_utf8(output.stdout).map_err(|_| SearchError::NonUtf8Output {
        program: tools.rg.clone(),
    })
}

/// Decode the `match` messages of an `rg --json` stream, in stream order.
///
/// Lines that are not JSON objects are skipped; a JSON line that does not
/// decode is an error.
pub fn parse_stream(stream: &str) -> Result<Vec<RgMatch>> {
    let mut matches = Vec::new();

    for line in stream.lines() {
        if !line.starts_with('{') {
            continue;
        }

        let message: Message =
            serde_json::from_str(line).map_err(|source| SearchError::MalformedRecord {
                line: line.to_string(),
                source,
            })?;
        if message.kind != "match" {
            continue;
        }

        let data: MatchData =
            serde_json::from_value(message.data).map_err(|source| SearchError::MalformedMatch {
                line: line.to_string(),
                source,
            })?;

        matches.push(RgMatch {
            path: data.path.text,
            line: data
                .lines
                .text
                .map(|t| t.trim_end_matches(|c| c == '\n' || c == '\r').to_string()),
        });
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAM: &str = r#"{"type":"begin","data":{"path":{"text":"Notes/Weekly Review.md"}}}
{"type":"match","data":{"path":{"text":"Notes/Weekly Review.md"},"lines":{"text":"Review the plan for next week\n"},"line_number":3,"absolute_offset":40,"submatches":[{"match":{"text":"plan"},"start":11,"end":15}]}}
{"type":"context","data":{"path":{"text":"Notes/Weekly Review.md"},"lines":{"text":"\n"},"line_number":4,"absolute_offset":70,"submatches":[]}}
{"type":"end","data":{"path":{"text":"Notes/Weekly Review.md"},"binary_offset":null,"stats":{"matches":1}}}
{"type":"summary","data":{"elapsed_total":{"human":"0.003s","nanos":3000000,"secs":0},"stats":{"matches":1}}}
"#;

    #[test]
    fn test_rg_args() {
        assert_eq!(
            rg_args("plan", true),
            vec!["--json", "--ignore-case", "--sortr", "modified", "--", "plan"]
        );
        assert_eq!(
            rg_args("plan", false),
            vec!["--json", "--sortr", "modified", "--", "plan"]
        );
    }

    #[test]
    fn test_parse_stream_keeps_only_matches() -> Result<()> {
        let matches = parse_stream(STREAM)?;
        assert_eq!(
            matches,
            vec![RgMatch {
                path: Some("Notes/Weekly Review.md".to_string()),
                line: Some("Review the plan for next week".to_string()),
            }]
        );
        Ok(())
    }

    #[test]
    fn test_parse_stream_skips_non_json_lines() -> Result<()> {
        let stream = "rg: ./locked.md: Permission denied (os error 13)\n\n\
            {\"type\":\"match\",\"data\":{\"path\":{\"text\":\"a.md\"},\"lines\":{\"text\":\"x\\r\\n\"}}}\n";
        let matches = parse_stream(stream)?;
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line.as_deref(), Some("x"));
        Ok(())
    }

    #[test]
    fn test_parse_stream_malformed_line_is_fatal() {
        let stream = format!("{}{}\n", STREAM, r#"{"type":"match","data":"#);
        let err = parse_stream(&stream).unwrap_err();
        match err {
            SearchError::MalformedRecord { line, .. } => {
                assert_eq!(line, r#"{"type":"match","data":"#)
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_stream_match_without_lines() -> Result<()> {
        let stream = r#"{"type":"match","data":{"path":{"text":"a.md"}}}"#;
        assert_eq!(
            parse_stream(stream)?,
            vec![RgMatch {
                path: Some("a.md".to_string()),
                line: None,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_parse_stream_match_without_path_is_fatal() {
        let stream = r#"{"type":"match","data":{"lines":{"text":"plan\n"}}}"#;
        assert!(matches!(
            parse_stream(stream),
            Err(SearchError::MalformedMatch { .. })
        ));
    }

    #[test]
    fn test_parse_stream_bytes_payloads() -> Result<()> {
        let stream = r#"{"type":"match","data":{"path":{"bytes":"/w7/Lm1k"},"lines":{"text":"hit\n"}}}
{"type":"match","data":{"path":{"text":"b.md"},"lines":{"bytes":"/w=="}}}"#;
        let matches = parse_stream(stream)?;
        assert_eq!(matches[0].path, None);
        assert_eq!(matches[0].line.as_deref(), Some("hit"));
        assert_eq!(matches[1].path.as_deref(), Some("b.md"));
        assert_eq!(matches[1].line, None);
        Ok(())
    }

    #[test]
    fn test_grep_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let err = grep(&Tools::default(), &dir.path().join("vault"), "plan").unwrap_err();
        assert!(matches!(err, SearchError::MissingDirectory(_)));
    }

    #[test]
    fn test_grep_unavailable_rg_is_empty() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        let tools = Tools {
            rg: "osearch-no-such-program".to_string(),
            ..Default::default()
        };
        assert_eq!(grep(&tools, dir.path(), "plan")?, "");
        Ok(())
    }
}
