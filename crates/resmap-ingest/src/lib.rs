//! CSV row source for the migration pipeline.
//!
//! Opens a delimited directory export, validates that the header carries
//! every column the classifier reads, and yields rows lazily. Rows are
//! padded (or truncated) to the header width so downstream code can index
//! cells by header position without bounds anxiety.

use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::debug;

use resmap_model::{FieldIndex, ResmapError, Result};

/// A lazily-read CSV file with a validated header.
#[derive(Debug)]
pub struct CsvSource {
    path: PathBuf,
    headers: Vec<String>,
    index: FieldIndex,
    reader: csv::Reader<File>,
}

impl CsvSource {
    /// Open a directory export and validate its header row.
    ///
    /// Fails with an input error when the file is missing or unreadable,
    /// or when the header lacks a required column.
    pub fn open(path: &Path) -> Result<CsvSource> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|error| ResmapError::input(path, error))?;
        let mut headers: Vec<String> = reader
            .headers()
            .map_err(|error| ResmapError::input(path, error))?
            .iter()
            .map(str::to_string)
            .collect();
        // Excel exports prepend a BOM to the first header.
        if let Some(first) = headers.first_mut()
            && let Some(stripped) = first.strip_prefix('\u{feff}')
        {
            *first = stripped.to_string();
        }
        let index =
            FieldIndex::locate(&headers).map_err(|error| ResmapError::input(path, error))?;
        debug!(path = %path.display(), columns = headers.len(), "input header validated");
        Ok(CsvSource {
            path: path.to_path_buf(),
            headers,
            index,
            reader,
        })
    }

    /// Header names in file order, BOM stripped.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Positions of the classifier's input columns.
    pub fn index(&self) -> FieldIndex {
        self.index
    }

    /// Consume the source, yielding one row at a time.
    pub fn rows(self) -> Rows {
        Rows {
            path: self.path,
            width: self.headers.len(),
            inner: self.reader.into_records(),
        }
    }
}

/// Lazy row iterator; restartable only by reopening the file.
pub struct Rows {
    path: PathBuf,
    width: usize,
    inner: csv::StringRecordsIntoIter<File>,
}

impl Iterator for Rows {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.inner.next()? {
            Ok(record) => record,
            Err(error) => return Some(Err(ResmapError::input(&self.path, error))),
        };
        let mut row: Vec<String> = record
            .iter()
            .take(self.width)
            .map(str::to_string)
            .collect();
        row.resize(self.width, String::new());
        Some(Ok(row))
    }
}
