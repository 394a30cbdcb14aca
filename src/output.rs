//! Canonical re-serialization of ingested records to delimited text.

use crate::error::Result;
use crate::record::Record;

/// Serialize records back to RFC-4180 CSV using the discovered field list
/// as the header row.
///
/// Cells absent from a record serialize as empty text; quoting and escaping
/// follow the standard comma/double-quote rules. An empty field list yields
/// an empty string.
pub fn to_csv(records: &[Record], fields: &[String]) -> Result<String> {
    if fields.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(fields)?;

    for record in records {
        let row: Vec<&str> = fields
            .iter()
            .map(|field| record.get(field).map(String::as_str).unwrap_or(""))
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}
