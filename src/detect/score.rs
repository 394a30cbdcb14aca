//! Consistency scoring for candidate dialects.
//!
//! A candidate's consistency `Q = P * T` combines a pattern score (row-shape
//! rectangularity) with a type score (fraction of cells matching a known
//! value-type pattern). The candidate with the strictly highest `Q` wins.

use super::patterns::is_typed;
use foldhash::{HashMap, HashMapExt};

/// Floor on a length group's numerator so single-column inputs do not
/// always score zero.
pub const ALPHA: f64 = 1e-3;

/// Floor on the type score so an untyped sample cannot zero out an
/// otherwise-good pattern score.
pub const BETA: f64 = 1e-10;

/// Pattern score `P`: rewards dialects that produce few, wide, consistent
/// row shapes over dialects that fragment rows inconsistently.
///
/// Rows are grouped by cell count. Each group of `count` rows with length
/// `L` contributes `count * max(ALPHA, L-1) / L`; the sum is divided by the
/// number of distinct lengths.
pub(crate) fn pattern_score(rows: &[Vec<String>]) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }

    let mut length_counts: HashMap<usize, usize> = HashMap::with_capacity(4);
    for row in rows {
        *length_counts.entry(row.len()).or_insert(0) += 1;
    }
    // The reader never yields zero-cell rows, but guard the division anyway
    length_counts.retain(|&length, _| length > 0);

    let num_shapes = length_counts.len();
    if num_shapes == 0 {
        return 0.0;
    }

    let total: f64 = length_counts
        .iter()
        .map(|(&length, &count)| {
            let numerator = ALPHA.max(length as f64 - 1.0);
            count as f64 * numerator / length as f64
        })
        .sum();

    total / num_shapes as f64
}

/// Type score `T`: the fraction of cells (trimmed) matching any known
/// value-type pattern, floored at [`BETA`].
pub(crate) fn type_score(rows: &[Vec<String>]) -> f64 {
    let total_cells: usize = rows.iter().map(Vec::len).sum();
    if total_cells == 0 {
        return BETA;
    }

    let typed_cells = rows
        .iter()
        .flatten()
        .filter(|cell| is_typed(cell.trim()))
        .count();

    (typed_cells as f64 / total_cells as f64).max(BETA)
}
