//! The batch runner: a strict left-to-right fold of the classifier.

use resmap_model::{FieldIndex, MigrationStats};

use crate::classifier::classify;

/// Every classified row, in input order, plus the aggregated counters.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub rows: Vec<Vec<String>>,
    pub stats: MigrationStats,
}

/// Classify every row in the batch.
///
/// Rows keep their field order; only the category cell is rewritten, and
/// only when the classifier changed it. Classification never fails, so
/// the only error is a failing row source, propagated as-is.
pub fn run<E>(
    index: FieldIndex,
    rows: impl IntoIterator<Item = Result<Vec<String>, E>>,
) -> Result<BatchOutcome, E> {
    let mut outcome = BatchOutcome::default();
    for row in rows {
        let mut row = row?;
        let classification = classify(&index.fields(&row));
        let normalized = classification.category;
        outcome.stats.record(&row[index.category], normalized);
        if row[index.category] != normalized.as_str() {
            row[index.category] = normalized.as_str().to_string();
        }
        outcome.rows.push(row);
    }
    Ok(outcome)
}
