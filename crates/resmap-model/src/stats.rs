//! Aggregated batch statistics for the migration report.

use std::collections::BTreeMap;

use crate::category::Category;

/// Counters accumulated while folding the classifier over a batch.
///
/// Transition keys are `"<original> → <normalized>"` strings; the
/// `BTreeMap` keeps them lexicographic, which is the order the summary
/// report prints them in. The distribution map iterates in canonical
/// enumeration order because `Category`'s `Ord` follows declaration order.
#[derive(Debug, Default, Clone)]
pub struct MigrationStats {
    pub total_rows: usize,
    pub rows_changed: usize,
    pub transitions: BTreeMap<String, usize>,
    pub distribution: BTreeMap<Category, usize>,
}

impl MigrationStats {
    /// Record one classified row.
    pub fn record(&mut self, original: &str, normalized: Category) {
        self.total_rows += 1;
        *self.distribution.entry(normalized).or_default() += 1;
        if original != normalized.as_str() {
            self.rows_changed += 1;
            let key = format!("{original} → {normalized}");
            *self.transitions.entry(key).or_default() += 1;
        }
    }
}
