//! Standard tabular extraction: header row plus one row per record.

use crate::dialect::Dialect;
use crate::record::{Ingestion, Record};
use crate::sanitize::sanitize_cell;
use tracing::warn;

/// Parse row-oriented content: the first row is the header, every later row
/// becomes one record keyed by the trimmed header names.
///
/// Cells are sanitized; missing trailing cells become empty text, and cells
/// beyond the header width are ignored. Header names that trim to empty are
/// dropped from each row's record, and a row yielding no fields at all is
/// dropped entirely. A structural error mid-stream stops consumption and
/// returns whatever was parsed before it.
pub fn parse_horizontal(content: &str, dialect: Dialect) -> Ingestion {
    let mut reader = dialect.reader(content);
    let mut record = csv::StringRecord::new();

    let header: Vec<String> = match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(|cell| cell.trim().to_string()).collect(),
        Ok(false) => return Ingestion::default(),
        Err(error) => {
            warn!(%error, "could not read header row");
            return Ingestion::default();
        }
    };

    // Discovered schema: trimmed header names, first occurrence wins
    let mut fields: Vec<String> = Vec::with_capacity(header.len());
    for name in &header {
        if !name.is_empty() && !fields.contains(name) {
            fields.push(name.clone());
        }
    }

    let mut records: Vec<Record> = Vec::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(error) => {
                // Partial results over hard failure
                warn!(%error, rows = records.len(), "parse error mid-stream, keeping partial results");
                break;
            }
        }

        let mut row = Record::new();
        for (idx, name) in header.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            let value = record.get(idx).unwrap_or("");
            row.insert(name.clone(), sanitize_cell(value));
        }

        if !row.is_empty() {
            records.push(row);
        }
    }

    Ingestion::new(records, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let result = parse_horizontal("name,age\nAlice,30\nBob,25\n", Dialect::default());

        assert_eq!(result.fields, vec!["name", "age"]);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0]["name"], "Alice");
        assert_eq!(result.records[1]["age"], "25");
    }

    #[test]
    fn test_header_names_trimmed() {
        let result = parse_horizontal("  name , age \nAlice,30\n", Dialect::default());

        assert_eq!(result.fields, vec!["name", "age"]);
        assert!(result.records[0].contains_key("name"));
    }

    #[test]
    fn test_cells_sanitized() {
        let result = parse_horizontal("formula,name\n=SUM(1+1),Bob\n", Dialect::default());

        assert_eq!(result.records[0]["formula"], "'=SUM(1+1)");
        assert_eq!(result.records[0]["name"], "Bob");
    }

    #[test]
    fn test_short_row_padded_with_empty() {
        let result = parse_horizontal("a,b,c\n1,2\n", Dialect::default());

        assert_eq!(result.records[0]["c"], "");
    }

    #[test]
    fn test_extra_cells_ignored() {
        let result = parse_horizontal("a,b\n1,2,3,4\n", Dialect::default());

        assert_eq!(result.records[0].len(), 2);
        assert_eq!(result.records[0]["b"], "2");
    }

    #[test]
    fn test_empty_header_name_dropped() {
        let result = parse_horizontal("a,,c\n1,2,3\n", Dialect::default());

        assert_eq!(result.fields, vec!["a", "c"]);
        assert_eq!(result.records[0].len(), 2);
        assert_eq!(result.records[0]["c"], "3");
    }

    #[test]
    fn test_empty_content() {
        let result = parse_horizontal("", Dialect::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_header_only() {
        let result = parse_horizontal("a,b,c\n", Dialect::default());

        assert_eq!(result.fields, vec!["a", "b", "c"]);
        assert!(result.records.is_empty());
    }

    #[test]
    fn test_semicolon_dialect() {
        let result = parse_horizontal("x;y\n1;2\n", Dialect::new(b';', b'"'));

        assert_eq!(result.fields, vec!["x", "y"]);
        assert_eq!(result.records[0]["y"], "2");
    }
}
