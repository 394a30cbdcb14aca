//! The ingestion orchestrator: detect dialect, classify layout, parse, group.

use std::path::Path;

use crate::detect::detect;
use crate::dialect::Dialect;
use crate::encoding::decode;
use crate::error::Result;
use crate::group::group_by_id;
use crate::horizontal::parse_horizontal;
use crate::layout::{Layout, is_vertical};
use crate::record::Ingestion;
use crate::vertical::parse_vertical;
use tracing::debug;

/// Configurable ingestion pipeline.
///
/// # Example
///
/// ```
/// use csv_wrangle::Ingestor;
///
/// let result = Ingestor::new().ingest("id,name\n1,Alice\n2,Bob\n", None);
/// assert_eq!(result.fields, vec!["id", "name"]);
/// assert_eq!(result.records.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    /// Optional forced dialect (skips detection).
    forced_dialect: Option<Dialect>,
    /// Optional forced layout (skips classification).
    forced_layout: Option<Layout>,
}

impl Ingestor {
    /// Create a new ingestor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a specific dialect, skipping detection.
    pub fn dialect(&mut self, dialect: Dialect) -> &mut Self {
        self.forced_dialect = Some(dialect);
        self
    }

    /// Force a specific layout, skipping classification.
    pub fn layout(&mut self, layout: Layout) -> &mut Self {
        self.forced_layout = Some(layout);
        self
    }

    /// Ingest decoded UTF-8 text into named records with a discovered
    /// field schema.
    ///
    /// Detection and classification run against samples of the full
    /// content. Malformed input never fails; the result is best-effort,
    /// possibly empty. `id_field` optionally merges records sharing an
    /// identifier value (see [`group_by_id`]).
    pub fn ingest(&self, content: &str, id_field: Option<&str>) -> Ingestion {
        if content.is_empty() {
            return Ingestion::default();
        }

        let dialect = self.forced_dialect.unwrap_or_else(|| detect(content));
        let vertical = match self.forced_layout {
            Some(Layout::Vertical) => true,
            Some(Layout::Horizontal) => false,
            None => is_vertical(content, dialect),
        };

        debug!(%dialect, vertical, "ingesting");

        let parsed = if vertical {
            parse_vertical(content, dialect)
        } else {
            parse_horizontal(content, dialect)
        };

        let records = group_by_id(parsed.records, id_field);
        Ingestion::new(records, parsed.fields)
    }

    /// Decode raw bytes (BOM handling, legacy-encoding transcoding) and
    /// ingest the resulting text.
    pub fn ingest_bytes(&self, data: &[u8], id_field: Option<&str>) -> Ingestion {
        let (text, _) = decode(data);
        self.ingest(&text, id_field)
    }

    /// Read a file and ingest its contents.
    pub fn ingest_path<P: AsRef<Path>>(&self, path: P, id_field: Option<&str>) -> Result<Ingestion> {
        let data = std::fs::read(path.as_ref())?;
        Ok(self.ingest_bytes(&data, id_field))
    }
}

/// Ingest with default settings: detect the dialect, classify the layout,
/// parse, and optionally group by `id_field`.
pub fn ingest(content: &str, id_field: Option<&str>) -> Ingestion {
    Ingestor::new().ingest(content, id_field)
}
