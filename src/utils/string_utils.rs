/// Spells a float so that the lexer reads it back as a float literal.
pub fn format_float(value: f64) -> String {
    let mut text = value.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Wraps a string literal in quotes that do not occur inside it.
pub fn quote(value: &str) -> String {
    if value.contains('"') {
        format!("'{}'", value)
    } else {
        format!("\"{}\"", value)
    }
}
