//! The staged migration pipeline: ingest, classify, write, report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span};

use resmap_ingest::CsvSource;
use resmap_model::MigrationStats;
use resmap_normalize::runner;
use resmap_report::{CsvSink, write_report_json};

/// What to migrate and where the results go.
#[derive(Debug, Clone)]
pub struct MigrateRequest {
    pub input: PathBuf,
    /// Defaults to `<stem>_migrated.<ext>` next to the input.
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    /// Classify and summarize without writing any file.
    pub dry_run: bool,
}

/// Result of a completed migration, for the terminal summary.
#[derive(Debug)]
pub struct MigrateOutcome {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub report_json: Option<PathBuf>,
    pub stats: MigrationStats,
}

pub fn run_migration(request: &MigrateRequest) -> Result<MigrateOutcome> {
    let span = info_span!("migrate", input = %request.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let source = CsvSource::open(&request.input)?;
    let headers = source.headers().to_vec();
    let index = source.index();
    info!(columns = headers.len(), "input opened");

    let classify_span = info_span!("classify");
    let outcome = classify_span.in_scope(|| runner::run(index, source.rows()))?;
    info!(
        rows = outcome.stats.total_rows,
        changed = outcome.stats.rows_changed,
        "classification complete"
    );

    let output = if request.dry_run {
        None
    } else {
        let path = request
            .output
            .clone()
            .unwrap_or_else(|| derive_output_path(&request.input));
        let write_span = info_span!("write", output = %path.display());
        write_span.in_scope(|| -> resmap_model::Result<()> {
            let mut sink = CsvSink::create(&path, &headers)?;
            for row in &outcome.rows {
                sink.write_row(row)?;
            }
            sink.finish()
        })?;
        Some(path)
    };

    let report_json = match &request.report_json {
        Some(path) if !request.dry_run => {
            write_report_json(path, &outcome.stats)?;
            Some(path.clone())
        }
        _ => None,
    };

    info!(
        duration_ms = start.elapsed().as_millis() as u64,
        "migration complete"
    );
    Ok(MigrateOutcome {
        input: request.input.clone(),
        output,
        report_json,
        stats: outcome.stats,
    })
}

/// Output path convention inherited from the original migration tooling:
/// `consolidated_robeson.csv` becomes `consolidated_robeson_migrated.csv`.
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(std::ffi::OsStr::to_str)
        .unwrap_or("output");
    let name = match input.extension().and_then(std::ffi::OsStr::to_str) {
        Some(ext) => format!("{stem}_migrated.{ext}"),
        None => format!("{stem}_migrated.csv"),
    };
    input.with_file_name(name)
}
