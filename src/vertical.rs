//! Vertical transposition: rebuilding records from a key/value line stream.

use crate::dialect::Dialect;
use crate::record::{Ingestion, Record};
use crate::sanitize::sanitize_cell;
use tracing::{debug, warn};

/// Transpose vertical content, where each logical record is a run of
/// two-column (key, value) rows, into standard records.
///
/// The first key ever seen acts as the record delimiter: meeting it again
/// once the current record already holds it starts a new record. Keys not
/// seen before are appended to the field list as they appear (schema
/// evolution); earlier records are not backfilled. Within one record a
/// repeated key overwrites, last write wins.
///
/// A structural error mid-stream stops consumption and keeps everything
/// transposed before it, including the in-progress record.
pub fn parse_vertical(content: &str, dialect: Dialect) -> Ingestion {
    let mut reader = dialect.reader(content);
    let mut record = csv::StringRecord::new();

    let mut fields: Vec<String> = Vec::new();
    let mut records: Vec<Record> = Vec::new();
    let mut current = Record::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => {
                warn!(%error, records = records.len(), "parse error mid-stream, keeping partial results");
                break;
            }
        }

        let key = record.get(0).unwrap_or("").trim();
        if key.is_empty() {
            continue;
        }
        let value = sanitize_cell(record.get(1).unwrap_or(""));

        // Seeing the first-ever key again while the current record already
        // holds it means a new record has started
        if !fields.is_empty() && key == fields[0] && current.contains_key(key) {
            records.push(std::mem::take(&mut current));
        }

        if !fields.iter().any(|field| field == key) {
            fields.push(key.to_string());
        }

        current.insert(key.to_string(), value);
    }

    if !current.is_empty() {
        records.push(current);
    }

    debug!(
        fields = fields.len(),
        records = records.len(),
        "transposition complete"
    );

    Ingestion::new(records, fields)
}
