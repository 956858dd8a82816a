//! Migration outputs: the CSV row sink and the JSON report writer.

pub mod json;
pub mod sink;

pub use json::{MigrationReport, build_report, write_report_json};
pub use sink::CsvSink;
