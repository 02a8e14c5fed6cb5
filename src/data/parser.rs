use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use tracing::info;

use crate::data::{Ensemble, Row};
use crate::BrownianError;

/// Column names of the output table, in order
pub const HEADER: [&str; 4] = ["particle", "time", "x", "y"];

impl Ensemble {
    /// Write the ensemble as CSV to `path`, replacing any existing file.
    ///
    /// The parent directory is not created. A missing or read-only directory
    /// surfaces as [BrownianError::Io].
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<(), BrownianError> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(file)?;
        info!(
            path = %path.display(),
            rows = self.n_rows(),
            "Wrote trajectory table"
        );
        Ok(())
    }

    /// Write the ensemble as CSV to any writer.
    ///
    /// The header is always written, even when the ensemble has no particles.
    /// No index column is emitted.
    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), BrownianError> {
        let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
        writer.write_record(HEADER)?;
        for row in self.rows() {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Read a table previously written by [Ensemble::write_csv]
///
/// # Example
///
/// ```rust,no_run
/// use brownsim::data::read_csv;
///
/// let rows = read_csv("data/brownian_motion.csv").unwrap();
/// println!("Number of rows: {}", rows.len());
/// ```
pub fn read_csv(path: impl AsRef<Path>) -> Result<Vec<Row>, BrownianError> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let headers = reader.headers()?;
    if headers.iter().ne(HEADER.iter().copied()) {
        return Err(BrownianError::InvalidTable(format!(
            "unexpected header {:?}, expected {:?}",
            headers.iter().collect::<Vec<_>>(),
            HEADER
        )));
    }

    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}
