//! Character classification and diagnostic rendering helpers shared by the
//! token readers.

/// First codepoint of a name: `[_A-Za-z]`.
pub(super) fn is_name_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

/// Continuation codepoint of a name: `[_A-Za-z0-9.]`. A `.` promotes the
/// token to a namespaced reference.
pub(super) fn is_name_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'
}

/// Renders a codepoint for diagnostics: `<EOF>` past the end of input,
/// quoted ASCII in the printable range, `"\uXXXX"` (uppercase hex) for
/// everything else.
pub(super) fn printed(ch: Option<char>) -> String {
    match ch {
        None => "<EOF>".to_string(),
        Some(ch) if ('\u{20}'..'\u{7F}').contains(&ch) => format!("\"{ch}\""),
        Some(ch) => format!("\"\\u{:04X}\"", ch as u32),
    }
}
