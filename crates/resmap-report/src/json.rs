//! Machine-readable migration report.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use resmap_model::{Category, MigrationStats, ResmapError, Result};

const REPORT_SCHEMA: &str = "resmap.migration-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Schema-stamped payload written by `--report-json`.
#[derive(Debug, Serialize)]
pub struct MigrationReport<'a> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub total_rows: usize,
    pub rows_changed: usize,
    pub transitions: &'a BTreeMap<String, usize>,
    pub distribution: &'a BTreeMap<Category, usize>,
}

/// Build the report payload with an explicit timestamp so the body stays
/// testable; `write_report_json` stamps the current time.
pub fn build_report(stats: &MigrationStats, generated_at: String) -> MigrationReport<'_> {
    MigrationReport {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at,
        total_rows: stats.total_rows,
        rows_changed: stats.rows_changed,
        transitions: &stats.transitions,
        distribution: &stats.distribution,
    }
}

pub fn write_report_json(path: &Path, stats: &MigrationStats) -> Result<()> {
    let report = build_report(stats, Utc::now().to_rfc3339());
    let json = serde_json::to_string_pretty(&report)
        .map_err(|error| ResmapError::output(path, error))?;
    std::fs::write(path, format!("{json}\n")).map_err(|error| ResmapError::output(path, error))
}
