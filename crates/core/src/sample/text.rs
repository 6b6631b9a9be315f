//! Text helpers shared by the profile emitters.
//!
//! Comment-block prefixing plus the string-literal escaping rules of each
//! target ecosystem, so body text with quotes or newlines stays well-formed.

/// Prefix every line of `text` with `prefix`.
pub(crate) fn comment_block(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Expected-response trailer: a label plus the body, every line commented.
pub(crate) fn response_comment(body: &str, prefix: &str) -> String {
    format!("{prefix}Expected response:\n{}", comment_block(body, prefix))
}

/// Escape for a double-quoted string literal (backslash and quote).
pub(crate) fn escape_double_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Escape for a single-quoted string literal (backslash and quote).
pub(crate) fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Escape for a one-line double-quoted literal: newlines fold to `\n`.
pub(crate) fn escape_one_line(s: &str) -> String {
    escape_double_quoted(s).replace('\n', "\\n")
}

/// Embed text in a Go raw string, splicing backticks out of the literal.
pub(crate) fn go_raw_string(s: &str) -> String {
    format!("`{}`", s.replace('`', "` + \"`\" + `"))
}

/// Embed text in a C# verbatim string (quotes double).
pub(crate) fn csharp_verbatim(s: &str) -> String {
    format!("@\"{}\"", s.replace('"', "\"\""))
}
