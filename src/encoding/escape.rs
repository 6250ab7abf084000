//! String escaping for embedding generated code

/// Replace HTML-significant characters in JSON text with `\uXXXX` escapes.
///
/// These characters can only occur inside JSON string literals, so the
/// result is still valid JSON and decodes to the same value.
pub fn escape_html_entities(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape source text for a single-quoted JavaScript string.
///
/// Backslashes are doubled, any line break (`\r\n`, `\n`, `\r`) becomes
/// `\n`, and both quote characters get a backslash.
pub fn escape_single_quoted(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push_str("\\n");
            }
            '\n' => out.push_str("\\n"),
            '"' | '\'' => {
                out.push('\\');
                out.push(c);
            }
            _ => out.push(c),
        }
    }
    out
}
