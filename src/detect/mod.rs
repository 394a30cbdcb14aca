//! Dialect detection via the consistency measure.
//!
//! Each candidate (delimiter, quote) pair parses a bounded prefix of the
//! input; the candidate whose parse looks most like a rectangular table of
//! typed values wins. Detection never fails: a candidate that cannot parse
//! is skipped, and if no candidate parses at all the comma/double-quote
//! default is returned.

mod patterns;
mod score;
mod table;

pub use score::{ALPHA, BETA};

use crate::dialect::{Dialect, candidate_dialects};
use score::{pattern_score, type_score};
use table::parse_sample;
use tracing::debug;

/// Number of characters of the input examined during detection.
pub const DETECT_SAMPLE_SIZE: usize = 8192;

/// Detect the dialect of `content` by scoring every candidate dialect
/// against a bounded sample.
///
/// Ties keep the earliest-iterated candidate; with no viable candidate the
/// default dialect is returned. This function never fails.
pub fn detect(content: &str) -> Dialect {
    let sample = char_prefix(content, DETECT_SAMPLE_SIZE);

    let mut best: Option<(Dialect, f64)> = None;

    for candidate in candidate_dialects() {
        let Some(rows) = parse_sample(sample, candidate) else {
            continue; // structural error disqualifies the candidate
        };
        if rows.is_empty() {
            continue;
        }

        let consistency = pattern_score(&rows) * type_score(&rows);

        if best.is_none_or(|(_, best_score)| consistency > best_score) {
            best = Some((candidate, consistency));
        }
    }

    match best {
        Some((dialect, consistency)) => {
            debug!(%dialect, consistency, "detected dialect");
            dialect
        }
        None => {
            debug!("no viable dialect candidate, falling back to default");
            Dialect::default()
        }
    }
}

/// Bounded prefix of `content`, clipped to at most `max_chars` characters
/// (never splitting a multi-byte character).
pub(crate) fn char_prefix(content: &str, max_chars: usize) -> &str {
    match content.char_indices().nth(max_chars) {
        Some((idx, _)) => &content[..idx],
        None => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_comma() {
        let dialect = detect("id,name,date\n1,Alice,2023-01-01\n2,Bob,2023-01-02");
        assert_eq!(dialect.delimiter, b',');
        assert_eq!(dialect.quote, b'"');
    }

    #[test]
    fn test_detect_semicolon_with_euro_decimals() {
        let dialect = detect("Measure;Value;Date\nTemp;37,5;2023-10-01");
        assert_eq!(dialect.delimiter, b';');
    }

    #[test]
    fn test_detect_tab() {
        let dialect = detect("a\tb\tc\n1\t2\t3\n4\t5\t6");
        assert_eq!(dialect.delimiter, b'\t');
    }

    #[test]
    fn test_detect_pipe() {
        let dialect = detect("name|age|city\nAlice|30|NY\nBob|25|LA");
        assert_eq!(dialect.delimiter, b'|');
    }

    #[test]
    fn test_detect_empty_falls_back_to_default() {
        assert_eq!(detect(""), Dialect::default());
    }

    #[test]
    fn test_detect_single_column_prefers_first_candidate() {
        // No delimiter present anywhere: every candidate scores the same,
        // so the earliest (comma/double-quote) is kept
        let dialect = detect("alpha\nbeta\ngamma");
        assert_eq!(dialect, Dialect::default());
    }

    #[test]
    fn test_detect_single_quote_dialect() {
        let dialect = detect("name,desc\n'Smith, John',engineer\n'Doe, Jane',writer");
        assert_eq!(dialect.delimiter, b',');
        assert_eq!(dialect.quote, b'\'');
    }

    #[test]
    fn test_char_prefix_respects_boundaries() {
        assert_eq!(char_prefix("héllo", 2), "hé");
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("", 5), "");
    }
}
