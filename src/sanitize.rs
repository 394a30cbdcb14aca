//! Cell sanitization guarding against spreadsheet formula injection.

/// Trim a raw cell value and neutralize formula injection.
///
/// If the trimmed value starts with `=`, `+`, `-`, or `@`, it is prefixed
/// with a literal single quote so spreadsheet applications treat it as text
/// rather than evaluating it as a formula. Anything else is returned trimmed
/// and otherwise unchanged.
pub fn sanitize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match trimmed.as_bytes()[0] {
        b'=' | b'+' | b'-' | b'@' => format!("'{trimmed}"),
        _ => trimmed.to_string(),
    }
}
