//! CSV output module for writing replayed statistics.
//!
//! Every input row produces one output row, so row `i` of the output lines up
//! with row `i` of the input:
//!
//! - The index column (if the input had one) comes first
//! - The input series follows under its original header
//! - Each statistic adds one column headed by its label (e.g. `rolling_mean_7`)
//! - NaN values, including the warm-up rows of a statistic, are written as
//!   empty cells

use std::fs::File;
use std::io::{self, BufWriter, Write};

use csv::WriterBuilder;

use crate::error::{CliError, Result};

/// Output destination: either stdout or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputDest {
    /// Write to stdout.
    Stdout,
    /// Write to a file at the given path.
    File(String),
}

impl OutputDest {
    /// Stdout when `path` is `None`, the named file otherwise.
    #[must_use]
    pub fn from_path(path: Option<&str>) -> Self {
        path.map_or(OutputDest::Stdout, |p| OutputDest::File(p.to_string()))
    }

    /// Create a writer for this output destination.
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the file cannot be created.
    pub fn writer(&self) -> Result<Box<dyn Write>> {
        match self {
            OutputDest::Stdout => Ok(Box::new(io::stdout())),
            OutputDest::File(path) => {
                let file = File::create(path).map_err(|e| CliError::Io {
                    source: e,
                    path: Some(path.clone()),
                })?;
                Ok(Box::new(BufWriter::new(file)))
            }
        }
    }
}

/// A named output column.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Header written in the first row.
    pub header: String,
    /// One value per input row.
    pub values: Vec<f64>,
}

impl Column {
    /// Creates a column.
    pub fn new(header: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            header: header.into(),
            values,
        }
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        value.to_string()
    }
}

/// Write columns to CSV.
///
/// # Arguments
///
/// * `index` - Optional `(header, values)` index column written first
/// * `columns` - Numeric columns, all as long as the index
/// * `out` - Any writer
///
/// # Errors
///
/// Returns `CliError::Io` or `CliError::Csv` if writing fails.
pub fn write_columns<W: Write>(
    index: Option<(&str, &[String])>,
    columns: &[Column],
    out: W,
) -> Result<()> {
    let mut writer = WriterBuilder::new().from_writer(out);

    let mut header: Vec<&str> = Vec::with_capacity(columns.len() + 1);
    if let Some((name, _)) = index {
        header.push(name);
    }
    header.extend(columns.iter().map(|c| c.header.as_str()));
    writer.write_record(&header)?;

    let rows = columns
        .iter()
        .map(|c| c.values.len())
        .chain(index.map(|(_, values)| values.len()))
        .max()
        .unwrap_or(0);

    let mut record: Vec<String> = Vec::with_capacity(header.len());
    for row in 0..rows {
        record.clear();
        if let Some((_, values)) = index {
            record.push(values.get(row).cloned().unwrap_or_default());
        }
        for column in columns {
            // short columns are padded with empty cells
            record.push(column.values.get(row).copied().map_or_else(String::new, format_value));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write columns to the given destination.
///
/// # Errors
///
/// See [`write_columns`] and [`OutputDest::writer`].
pub fn write_output(
    index: Option<(&str, &[String])>,
    columns: &[Column],
    dest: &OutputDest,
) -> Result<()> {
    write_columns(index, columns, dest.writer()?)
}
