//! csv-wrangle: uniform records out of messy, unknown-dialect CSV
//!
//! Ingests arbitrary, possibly malformed CSV text of unknown dialect and
//! unknown orientation — standard row-per-record tables, or vertical
//! key/value dumps where each record is a run of `key,value` lines — and
//! produces an ordered list of named records plus a discovered field
//! schema.
//!
//! # Quick Start
//!
//! ```
//! use csv_wrangle::ingest;
//!
//! let result = ingest("id,name,date\n1,Alice,2023-01-01\n2,Bob,2023-01-02", None);
//!
//! assert_eq!(result.fields, vec!["id", "name", "date"]);
//! assert_eq!(result.records.len(), 2);
//! assert_eq!(result.records[0]["name"], "Alice");
//! ```
//!
//! # Pipeline
//!
//! One ingestion call runs four stages:
//!
//! 1. **Dialect detection** — every candidate (delimiter, quote) pair is
//!    scored on a bounded sample by its consistency `Q = P * T`: a pattern
//!    score rewarding few, wide, consistent row shapes, times a type score
//!    measuring how many cells match known value-type patterns.
//! 2. **Layout classification** — a heuristic decides whether the content
//!    is row-oriented or a vertical key/value dump (narrow rows with
//!    repeating first-column keys).
//! 3. **Parsing** — horizontal extraction pairs header names with row
//!    cells; vertical transposition rebuilds records from key/value runs,
//!    discovering new fields as they appear. Every cell is sanitized
//!    against spreadsheet formula injection.
//! 4. **Grouping** — optionally, records sharing a caller-named identifier
//!    field are merged into one logical record, last non-empty value wins.
//!
//! Malformed input never raises: detection falls back to the default
//! comma/double-quote dialect, and parse errors yield partial results.
//!
//! The core is pure and synchronous; it performs no I/O and holds no
//! shared state, so independent calls are freely concurrent. The only
//! I/O-touching helpers are [`Ingestor::ingest_path`]/[`Ingestor::ingest_bytes`]
//! (byte decoding) and the CSV re-serialization in [`to_csv`].

mod detect;
mod dialect;
mod encoding;
mod error;
mod group;
mod horizontal;
mod ingest;
mod layout;
mod output;
mod record;
mod sanitize;
mod vertical;

pub use detect::{ALPHA, BETA, DETECT_SAMPLE_SIZE, detect};
pub use dialect::{DELIMITERS, Dialect, QUOTES, candidate_dialects};
pub use encoding::{EncodingInfo, decode, is_utf8};
pub use error::{Result, WrangleError};
pub use group::group_by_id;
pub use horizontal::parse_horizontal;
pub use ingest::{Ingestor, ingest};
pub use layout::{
    LAYOUT_SAMPLE_ROWS, LAYOUT_SAMPLE_SIZE, Layout, MAX_KEY_VALUE_WIDTH, MIN_DUPLICATION_RATIO,
    is_vertical,
};
pub use output::to_csv;
pub use record::{Ingestion, Record};
pub use sanitize::sanitize_cell;
pub use vertical::parse_vertical;
