use indexmap::IndexMap;

/// A single logical record: an ordered mapping from field name to cell value.
///
/// Insertion order reflects the first-seen order of fields within the record.
/// Records are plain value objects with structural equality.
pub type Record = IndexMap<String, String>;

/// The result of ingesting one piece of delimited text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ingestion {
    /// Parsed records in input order.
    pub records: Vec<Record>,
    /// Discovered field names in first-seen order across the whole input.
    pub fields: Vec<String>,
}

impl Ingestion {
    /// Create a new ingestion result.
    pub const fn new(records: Vec<Record>, fields: Vec<String>) -> Self {
        Self { records, fields }
    }

    /// Returns true if nothing was parsed (no records and no fields).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_preserves_insertion_order() {
        let mut record = Record::new();
        record.insert("z".to_string(), "1".to_string());
        record.insert("a".to_string(), "2".to_string());
        record.insert("m".to_string(), "3".to_string());

        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_ingestion_is_empty() {
        assert!(Ingestion::default().is_empty());

        let with_fields = Ingestion::new(Vec::new(), vec!["a".to_string()]);
        assert!(!with_fields.is_empty());
    }
}
