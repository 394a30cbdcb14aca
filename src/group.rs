//! Merging rows that describe the same logical entity.

use crate::record::Record;
use foldhash::{HashMap, HashMapExt};

/// Merge records sharing the same value in `id_field` into one record per
/// identifier, preserving first-seen order.
///
/// No-op when `id_field` is `None` or blank after trimming. Records whose
/// identifier cell is absent or empty pass through unmodified at their
/// original position. The first record carrying an identifier anchors it;
/// later records with the same identifier merge their non-identifier fields
/// into the anchor, but only non-empty incoming values are merged — an
/// anchor's existing value is never clobbered by an empty one, and a field
/// never set on the anchor stays absent rather than becoming blank.
pub fn group_by_id(records: Vec<Record>, id_field: Option<&str>) -> Vec<Record> {
    let Some(id_field) = id_field.map(str::trim).filter(|field| !field.is_empty()) else {
        return records;
    };

    let mut grouped: Vec<Record> = Vec::with_capacity(records.len());
    // Identifier value -> anchor position in `grouped`
    let mut anchors: HashMap<String, usize> = HashMap::new();

    for record in records {
        let id_value = record.get(id_field).cloned().unwrap_or_default();
        if id_value.is_empty() {
            grouped.push(record);
            continue;
        }

        match anchors.get(&id_value) {
            Some(&anchor_idx) => {
                let anchor = &mut grouped[anchor_idx];
                for (field, value) in record {
                    if field == id_field || value.is_empty() {
                        continue;
                    }
                    anchor.insert(field, value);
                }
            }
            None => {
                anchors.insert(id_value, grouped.len());
                grouped.push(record);
            }
        }
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_no_id_field_is_noop() {
        let records = vec![record(&[("id", "1")]), record(&[("id", "1")])];

        assert_eq!(group_by_id(records.clone(), None), records);
        assert_eq!(group_by_id(records.clone(), Some("   ")), records);
    }

    #[test]
    fn test_merge_preserves_order_and_skips_empty_values() {
        let records = vec![
            record(&[("id", "1"), ("name", "Alice"), ("age", "30"), ("city", "NY")]),
            record(&[("id", "1"), ("age", "31"), ("city", "")]),
            record(&[("id", "2"), ("name", "Bob")]),
            record(&[("id", ""), ("name", "NoId")]),
            record(&[("name", "MissingId")]),
        ];

        let grouped = group_by_id(records, Some(" id "));

        assert_eq!(grouped.len(), 4);

        let first = &grouped[0];
        assert_eq!(first["id"], "1");
        assert_eq!(first["name"], "Alice");
        assert_eq!(first["age"], "31"); // overwritten by non-empty
        assert_eq!(first["city"], "NY"); // kept, incoming value was empty

        assert_eq!(grouped[1]["id"], "2");
        assert_eq!(grouped[2]["id"], "");
        assert!(!grouped[3].contains_key("id"));
    }

    #[test]
    fn test_absent_field_stays_absent() {
        let records = vec![
            record(&[("id", "1"), ("name", "Alice"), ("age", "30")]),
            record(&[("id", "1"), ("age", "31"), ("city", "")]),
            record(&[("id", "2"), ("name", "Bob")]),
        ];

        let grouped = group_by_id(records, Some("id"));

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped[0]["age"], "31");
        assert_eq!(grouped[0]["name"], "Alice");
        // "city" was only ever offered as empty: never materialized
        assert!(!grouped[0].contains_key("city"));
    }

    #[test]
    fn test_merged_fields_append_in_first_seen_order() {
        let records = vec![
            record(&[("id", "1"), ("a", "x")]),
            record(&[("id", "1"), ("b", "y"), ("c", "z")]),
        ];

        let grouped = group_by_id(records, Some("id"));

        let keys: Vec<&str> = grouped[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "a", "b", "c"]);
    }

    #[test]
    fn test_identifier_values_are_case_sensitive() {
        let records = vec![
            record(&[("id", "A"), ("v", "1")]),
            record(&[("id", "a"), ("v", "2")]),
        ];

        assert_eq!(group_by_id(records, Some("id")).len(), 2);
    }
}
