/// Printable ASCII: digits, letters, punctuation, and the six whitespace
/// characters ` \t\n\r\x0b\x0c`.
pub fn is_printable(c: char) -> bool {
    c.is_ascii_graphic() || matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Drop every character outside the printable ASCII set, keeping order.
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| is_printable(*c)).collect()
}
