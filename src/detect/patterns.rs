//! Compiled regex patterns for cell type classification.
//!
//! Ordered from most to least specific; a cell matching any pattern counts
//! as "typed" for the type score.

use regex::Regex;

/// Pattern for empty/whitespace-only values.
pub static EMPTY_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^\s*$").expect("Invalid empty pattern"));

/// Pattern for integers (including negative).
pub static INTEGER_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^-?\d+$").expect("Invalid integer pattern"));

/// Pattern for floats and scientific notation, accepting `.` or `,` as the
/// decimal separator.
pub static FLOAT_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^-?\d+[.,]\d+(e[+-]?\d+)?$").expect("Invalid float pattern")
});

/// Pattern for URLs.
pub static URL_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^(http|https)://[^\s/$.?#].[^\s]*$").expect("Invalid URL pattern")
});

/// Pattern for email addresses.
pub static EMAIL_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$").expect("Invalid email pattern")
});

/// Pattern for ISO 8601 dates and datetimes (YYYY-MM-DD, optionally with time).
pub static DATE_ISO_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}([T ]\d{2}:\d{2}(:\d{2})?)?$").expect("Invalid ISO date pattern")
});

/// Pattern for common slash/dash dates (D/M/YY through MM-DD-YYYY).
pub static DATE_COMMON_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^\d{1,2}[/-]\d{1,2}[/-]\d{2,4}$").expect("Invalid common date pattern")
});

/// Pattern for N/A markers.
pub static NA_PATTERN: std::sync::LazyLock<Regex> =
    std::sync::LazyLock::new(|| Regex::new(r"^[Nn]/?[Aa]$").expect("Invalid N/A pattern"));

/// Pattern for generic alphanumeric values (words, identifiers, labels).
pub static ALPHANUM_PATTERN: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9\s_-]+$").expect("Invalid alphanumeric pattern")
});

/// The full pattern table in priority order (cached via `LazyLock`).
static TYPE_PATTERNS: std::sync::LazyLock<Vec<&'static std::sync::LazyLock<Regex>>> =
    std::sync::LazyLock::new(|| {
        vec![
            &EMPTY_PATTERN,
            &INTEGER_PATTERN,
            &FLOAT_PATTERN,
            &URL_PATTERN,
            &EMAIL_PATTERN,
            &DATE_ISO_PATTERN,
            &DATE_COMMON_PATTERN,
            &NA_PATTERN,
            &ALPHANUM_PATTERN,
        ]
    });

/// Returns true if the (already trimmed) cell value matches any known type
/// pattern. Evaluation is first-match-wins over the priority-ordered table.
pub fn is_typed(cell: &str) -> bool {
    TYPE_PATTERNS.iter().any(|pattern| pattern.is_match(cell))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_pattern() {
        assert!(INTEGER_PATTERN.is_match("123"));
        assert!(INTEGER_PATTERN.is_match("-42"));
        assert!(!INTEGER_PATTERN.is_match("12.5"));
        assert!(!INTEGER_PATTERN.is_match("abc"));
    }

    #[test]
    fn test_float_pattern_both_separators() {
        assert!(FLOAT_PATTERN.is_match("37.5"));
        assert!(FLOAT_PATTERN.is_match("37,5"));
        assert!(FLOAT_PATTERN.is_match("-1.5e-3"));
        assert!(!FLOAT_PATTERN.is_match("37"));
    }

    #[test]
    fn test_date_patterns() {
        assert!(DATE_ISO_PATTERN.is_match("2023-12-31"));
        assert!(DATE_ISO_PATTERN.is_match("2023-12-31T12:30:45"));
        assert!(DATE_ISO_PATTERN.is_match("2023-12-31 12:30"));
        assert!(DATE_COMMON_PATTERN.is_match("12/31/2023"));
        assert!(DATE_COMMON_PATTERN.is_match("31-12-23"));
    }

    #[test]
    fn test_na_pattern() {
        assert!(NA_PATTERN.is_match("N/A"));
        assert!(NA_PATTERN.is_match("na"));
        assert!(!NA_PATTERN.is_match("nah"));
    }

    #[test]
    fn test_url_and_email() {
        assert!(URL_PATTERN.is_match("https://example.com/path"));
        assert!(EMAIL_PATTERN.is_match("user.name+tag@example.co.uk"));
        assert!(!URL_PATTERN.is_match("example.com"));
    }

    #[test]
    fn test_is_typed() {
        assert!(is_typed(""));
        assert!(is_typed("123"));
        assert!(is_typed("hello world"));
        // Punctuation-heavy free text matches nothing
        assert!(!is_typed("hello, world!"));
    }
}
