//! CSV row sink: header first, then one row per record, default comma
//! delimiter and minimal quoting to match the input convention.

use std::fs::File;
use std::path::{Path, PathBuf};

use resmap_model::{ResmapError, Result};

#[derive(Debug)]
pub struct CsvSink {
    path: PathBuf,
    writer: csv::Writer<File>,
}

impl CsvSink {
    /// Create the output file and write the header row.
    pub fn create(path: &Path, headers: &[String]) -> Result<CsvSink> {
        let mut writer = csv::WriterBuilder::new()
            .from_path(path)
            .map_err(|error| ResmapError::output(path, error))?;
        writer
            .write_record(headers)
            .map_err(|error| ResmapError::output(path, error))?;
        Ok(CsvSink {
            path: path.to_path_buf(),
            writer,
        })
    }

    pub fn write_row(&mut self, row: &[String]) -> Result<()> {
        self.writer
            .write_record(row)
            .map_err(|error| ResmapError::output(&self.path, error))
    }

    /// Flush and close; errors here still mean an unwritable destination.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .map_err(|error| ResmapError::output(&self.path, error))
    }
}
