use std::path::Path;

/// Characters of context kept in front of a match.
pub const LEAD_CONTEXT: usize = 10;
/// How far before the cut point a space may sit and still be used as the break.
pub const WORD_WINDOW: usize = 5;

pub fn without_md(filename: &str) -> &str {
    filename.strip_suffix(".md").unwrap_or(filename)
}

/// Alfred title for a vault-relative path: the file name minus `.md`.
pub fn title_for(path: &str) -> String {
    let name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.into());
    without_md(&name).to_string()
}

/// Truncate `line` from the front so that it starts about `lead` characters
/// before the first occurrence of `term`, preferring to break on a space no
/// more than `window` characters before that point.
///
/// Lines where `term` is absent or already within `lead` characters of the
/// start come back unchanged. Positions count chars, not bytes.
pub fn fruncate<'a>(line: &'a str, term: &str, lead: usize, window: usize) -> &'a str {
    let Some(byte_index) = line.find(term) else {
        return line;
    };
    let index = line[..byte_index].chars().count();
    if index <= lead {
        return line;
    }

    let cut = index - lead;
    let floor = cut.saturating_sub(window);
    let starts: Vec<(usize, char)> = line.char_indices().collect();

    let space = starts[..cut].iter().rposition(|&(_, c)| c == ' ');
    match space {
        Some(pos) if pos > 0 && pos >= floor => &line[starts[pos].0 + 1..],
        _ => &line[starts[cut].0..],
    }
}
