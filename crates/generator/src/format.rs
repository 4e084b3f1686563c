//! HCL string literal formatting for long, free-text descriptions

/// Descriptions at or over this many characters become heredocs
pub const LINE_LIMIT: usize = 80;

/// Format a description as an HCL string expression.
///
/// Branches are checked in order:
/// 1. at least [`LINE_LIMIT`] characters: a `<<EOF` heredoc, wrapped at the
///    first whitespace past every [`LINE_LIMIT`] characters
/// 2. contains `"`: wrapped in backticks so it needs no escaping
/// 3. otherwise: a double-quoted string
pub fn tf_string(text: &str) -> String {
    if text.chars().count() >= LINE_LIMIT {
        format!("<<EOF\n{}\nEOF", wrap(text, LINE_LIMIT))
    } else if text.contains('"') {
        format!("`{}`", text)
    } else {
        format!("\"{}\"", text)
    }
}

/// Break `text` into lines of at least `limit` characters, never mid-word
fn wrap(text: &str, limit: usize) -> String {
    let mut lines = Vec::new();
    let mut rest = text;

    while let Some((stride_end, _)) = rest.char_indices().nth(limit) {
        let Some(offset) = rest[stride_end..].find(char::is_whitespace) else {
            break;
        };
        let split = stride_end + offset;
        lines.push(&rest[..split]);

        let space_len = rest[split..].chars().next().map_or(1, char::len_utf8);
        rest = &rest[split + space_len..];
    }

    if !rest.is_empty() {
        lines.push(rest);
    }

    lines.join("\n")
}
