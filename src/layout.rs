//! Layout classification: row-oriented tables vs vertical key/value dumps.

use crate::detect::char_prefix;
use crate::dialect::Dialect;
use foldhash::HashSet;
use tracing::debug;

/// Number of characters of the input examined during classification.
pub const LAYOUT_SAMPLE_SIZE: usize = 4096;

/// Maximum number of rows sampled during classification.
pub const LAYOUT_SAMPLE_ROWS: usize = 20;

/// Average row width above which content is assumed row-oriented; vertical
/// key/value dumps average near 2 cells per row.
pub const MAX_KEY_VALUE_WIDTH: f64 = 2.5;

/// First-column duplication ratio above which content is classified as
/// vertical: a repeating first-column token is the signature of a key
/// repeating across records.
pub const MIN_DUPLICATION_RATIO: f64 = 0.3;

/// The two supported content orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One row per record, header row first.
    Horizontal,
    /// Each record is a run of two-column (key, value) rows.
    Vertical,
}

/// Heuristically decide whether `content` is a vertical key/value dump.
///
/// Samples up to [`LAYOUT_SAMPLE_ROWS`] rows from a bounded prefix. Wide
/// rows mean horizontal; otherwise a high first-column duplication ratio
/// means vertical. With no parseable rows the safe default is horizontal.
pub fn is_vertical(content: &str, dialect: Dialect) -> bool {
    let sample = char_prefix(content, LAYOUT_SAMPLE_SIZE);
    let mut reader = dialect.reader(sample);
    let mut record = csv::StringRecord::new();

    let mut total_width = 0usize;
    let mut first_column: Vec<String> = Vec::new();

    while first_column.len() < LAYOUT_SAMPLE_ROWS {
        match reader.read_record(&mut record) {
            Ok(true) => {
                total_width += record.len();
                first_column.push(record.get(0).unwrap_or("").to_string());
            }
            // EOF, or a structural error: classify on what was sampled
            Ok(false) | Err(_) => break,
        }
    }

    let num_rows = first_column.len();
    if num_rows == 0 {
        return false;
    }

    let avg_width = total_width as f64 / num_rows as f64;
    if avg_width > MAX_KEY_VALUE_WIDTH {
        debug!(avg_width, "wide rows, classified horizontal");
        return false;
    }

    let unique: HashSet<&str> = first_column.iter().map(String::as_str).collect();
    let duplication_ratio = 1.0 - unique.len() as f64 / num_rows as f64;
    let vertical = duplication_ratio > MIN_DUPLICATION_RATIO;

    debug!(avg_width, duplication_ratio, vertical, "layout classified");
    vertical
}
