//! Strict candidate parsing of the detection sample into rows of cells.

use crate::dialect::Dialect;

/// Parse the sample with a candidate dialect into rows of cell strings.
///
/// Returns `None` when the reader reports a structural error mid-sample,
/// which disqualifies the candidate (scored as zero by the caller). Note
/// that an unterminated quote does not error here: the reader folds the
/// remainder of the sample into one oversized cell, which wrecks that
/// candidate's pattern score to the same effect.
pub(crate) fn parse_sample(sample: &str, dialect: Dialect) -> Option<Vec<Vec<String>>> {
    let mut reader = dialect.reader(sample);
    let mut rows = Vec::new();
    let mut record = csv::StringRecord::new();

    loop {
        match reader.read_record(&mut record) {
            Ok(true) => rows.push(
                record
                    .iter()
                    .map(std::string::ToString::to_string)
                    .collect(),
            ),
            Ok(false) => break, // EOF
            Err(_) => return None,
        }
    }

    Some(rows)
}
