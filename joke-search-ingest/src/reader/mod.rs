//! Reader module for the joke ingest.
//!
//! Streams joke rows out of a CSV file with a header row.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::errors::IngestError;
use joke_search_shared::JokeDocument;

/// Name of the CSV column holding the joke text.
pub const JOKE_COLUMN: &str = "joke";

/// Lazily reads jokes from CSV, one record at a time.
///
/// The header row is required and the joke column is located by name; any
/// other columns are ignored. Blank lines are skipped.
pub struct JokeCsvReader<R> {
    reader: csv::Reader<R>,
    joke_column: usize,
    record: StringRecord,
    rows: usize,
}

impl JokeCsvReader<File> {
    /// Open a CSV file.
    ///
    /// # Returns
    ///
    /// * `Ok(JokeCsvReader)` - A reader positioned on the first data row
    /// * `Err(IngestError::IoError)` - If the file can't be opened
    /// * `Err(IngestError::MissingColumn)` - If the header has no joke column
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IngestError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Opening CSV file");
        Self::from_reader(File::open(path)?)
    }
}

impl<R: io::Read> JokeCsvReader<R> {
    /// Wrap any reader producing CSV text.
    pub fn from_reader(input: R) -> Result<Self, IngestError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(input);

        let joke_column = reader
            .headers()?
            .iter()
            .position(|h| h == JOKE_COLUMN)
            .ok_or_else(|| IngestError::missing_column(JOKE_COLUMN))?;

        Ok(Self {
            reader,
            joke_column,
            record: StringRecord::new(),
            rows: 0,
        })
    }

    /// Number of data rows read so far, including rows that failed to decode.
    pub fn rows_read(&self) -> usize {
        self.rows
    }
}

impl<R: io::Read> Iterator for JokeCsvReader<R> {
    type Item = Result<JokeDocument, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(false) => None,
            Ok(true) => {
                self.rows += 1;
                let joke = self.record.get(self.joke_column).unwrap_or_default();
                Some(Ok(JokeDocument::new(joke)))
            }
            Err(e) => {
                self.rows += 1;
                Some(Err(IngestError::from(e)))
            }
        }
    }
}
