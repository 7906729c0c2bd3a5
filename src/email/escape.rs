/// Escape text for insertion into HTML element content or a double-quoted
/// attribute value.
///
/// Replaces `&`, `<`, `>` and `"`. This is the escape function installed on
/// the template engine, so every `{{ value }}` in a template goes through it.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 8);

    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }

    result
}
