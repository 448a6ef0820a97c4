const SCHEME: &str = "obsidian://open";

/// `obsidian://open?vault=<vault>&file=<path>` with both values percent-encoded.
pub fn obsidian_url(vault: &str, path: &str) -> String {
    format!(
        "{}?vault={}&file={}",
        SCHEME,
        urlencoding::encode(vault),
        urlencoding::encode(path)
    )
}
