/// Output filename for a document title: spaces become underscores, plus `.md`.
///
/// Characters that are illegal in Windows filenames are also replaced, and a
/// reserved device name gets a trailing underscore.
pub fn document_filename(title: &str) -> String {
    let mut name: String = title
        .chars()
        .map(|c| if c == ' ' || is_forbidden(c) { '_' } else { c })
        .collect();
    name = name.trim_matches(&['_', '.'][..]).to_string();
    if name.is_empty() {
        name = "untitled".to_string();
    }
    if is_reserved_windows_name(&name) {
        name.push('_');
    }
    format!("{name}.md")
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}

fn is_reserved_windows_name(name: &str) -> bool {
    const RESERVED: &[&str] = &[
        "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
        "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
    ];
    RESERVED.iter().any(|r| r.eq_ignore_ascii_case(name))
}
