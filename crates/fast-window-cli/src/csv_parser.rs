//! CSV parsing module for reading a numeric series.
//!
//! The input is a headered CSV with one row per observation. A single column
//! is read as the series; every other column is ignored except an optional
//! index column (`date`, `time`, `datetime`, `timestamp`, `dt`), which is kept
//! so the output rows line up with the input rows.
//!
//! # Column Selection
//!
//! When no column is named, the first of `value`, `y`, `target`, `close` and
//! `price` (case-insensitive) is used; failing that, a CSV with exactly one
//! non-index column uses that column. Empty cells are read as NaN.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::{CliError, Result};

/// Header names tried, in order, when no column is given.
const PREFERRED_COLUMNS: [&str; 5] = ["value", "y", "target", "close", "price"];

/// One numeric column read from a CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Header of the column the values were read from, as written in the file.
    pub name: String,
    /// Index column values (if present in the CSV).
    pub index: Option<Vec<String>>,
    /// Header of the index column.
    pub index_name: Option<String>,
    /// Observations, NaN where the cell was empty.
    pub values: Vec<f64>,
}

impl Series {
    /// Number of rows read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the CSV had no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Normalize a column header name for matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase()
}

/// Check if a header represents an index column.
fn is_index_column(header: &str) -> bool {
    let normalized = normalize_header(header);
    matches!(
        normalized.as_str(),
        "date" | "time" | "datetime" | "timestamp" | "dt"
    )
}

/// Parse a string value to f64, treating empty as NaN.
fn parse_value(value: &str, line: usize) -> Result<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(f64::NAN)
    } else {
        trimmed.parse::<f64>().map_err(|_| CliError::Csv {
            message: format!("cannot parse '{trimmed}' as number"),
            line: Some(line),
        })
    }
}

/// Picks the series column from the headers.
fn select_column(headers: &[String], requested: Option<&str>) -> Result<usize> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();

    if let Some(name) = requested {
        let wanted = normalize_header(name);
        return normalized
            .iter()
            .position(|h| *h == wanted)
            .ok_or_else(|| CliError::InvalidArgument {
                argument: "column".to_string(),
                reason: format!("no column named '{name}'"),
                suggestion: Some(format!("Available columns: {}", headers.join(", "))),
            });
    }

    for preferred in PREFERRED_COLUMNS {
        if let Some(idx) = normalized.iter().position(|h| h == preferred) {
            return Ok(idx);
        }
    }

    let candidates: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !is_index_column(h))
        .map(|(idx, _)| idx)
        .collect();
    match candidates.as_slice() {
        [only] => Ok(*only),
        _ => Err(CliError::InvalidArgument {
            argument: "column".to_string(),
            reason: "cannot tell which column holds the series".to_string(),
            suggestion: Some(format!(
                "Pass --column with one of: {}",
                headers.join(", ")
            )),
        }),
    }
}

/// Parse a CSV file into a series.
///
/// # Arguments
///
/// * `path` - Path to the CSV file
/// * `column` - Header of the series column, or `None` to auto-detect
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read, `CliError::Csv` if the
/// CSV is malformed, or `CliError::InvalidArgument` if the column cannot be
/// found.
pub fn read_series<P: AsRef<Path>>(path: P, column: Option<&str>) -> Result<Series> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CliError::Io {
        source: e,
        path: Some(path.display().to_string()),
    })?;
    read_series_from_reader(BufReader::new(file), column)
}

/// Parse a series from a reader.
///
/// This is useful for testing or parsing from non-file sources.
///
/// # Errors
///
/// See [`read_series`].
pub fn read_series_from_reader<R: Read>(reader: R, column: Option<&str>) -> Result<Series> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(|e| CliError::Csv {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(String::from)
        .collect();

    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CliError::Csv {
            message: "CSV file has no headers".to_string(),
            line: Some(1),
        });
    }

    let value_idx = select_column(&headers, column)?;
    let index_idx = headers
        .iter()
        .position(|h| is_index_column(h))
        .filter(|&idx| idx != value_idx);

    let mut values = Vec::new();
    let mut index = Vec::new();
    for (row_idx, result) in csv_reader.records().enumerate() {
        let line = row_idx + 2; // header is line 1
        let record = result.map_err(|e| CliError::Csv {
            message: e.to_string(),
            line: Some(line),
        })?;

        if let Some(idx) = index_idx {
            index.push(record.get(idx).unwrap_or("").to_string());
        }
        values.push(parse_value(record.get(value_idx).unwrap_or(""), line)?);
    }

    debug!(
        "read {} rows from column '{}'",
        values.len(),
        headers[value_idx]
    );

    Ok(Series {
        name: headers[value_idx].trim().to_string(),
        index: index_idx.map(|_| index),
        index_name: index_idx.map(|idx| headers[idx].trim().to_string()),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(data: &str, column: Option<&str>) -> Result<Series> {
        read_series_from_reader(data.as_bytes(), column)
    }

    // ==========================================================================
    // Column Selection
    // ==========================================================================

    #[test]
    fn test_parse_single_column() {
        let series = parse("load\n1.0\n2.5\n3.0\n", None).unwrap();
        assert_eq!(series.name, "load");
        assert_eq!(series.values, vec![1.0, 2.5, 3.0]);
        assert!(series.index.is_none());
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_preferred_column_is_detected() {
        let data = "date,temperature,Value\n2024-01-01,3.5,10\n2024-01-02,4.0,11\n";
        let series = parse(data, None).unwrap();
        assert_eq!(series.name, "Value");
        assert_eq!(series.values, vec![10.0, 11.0]);
    }

    #[test]
    fn test_index_column_is_kept() {
        let data = "timestamp,y\n2024-01-01T00:00,1\n2024-01-01T01:00,2\n";
        let series = parse(data, None).unwrap();
        assert_eq!(series.index_name.as_deref(), Some("timestamp"));
        assert_eq!(
            series.index,
            Some(vec![
                "2024-01-01T00:00".to_string(),
                "2024-01-01T01:00".to_string()
            ])
        );
    }

    #[test]
    fn test_single_non_index_column_is_used() {
        let series = parse("date,sales\n2024-01-01,5\n", None).unwrap();
        assert_eq!(series.name, "sales");
        assert_eq!(series.values, vec![5.0]);
    }

    #[test]
    fn test_explicit_column_case_insensitive() {
        let data = "a,B,c\n1,2,3\n4,5,6\n";
        let series = parse(data, Some("b")).unwrap();
        assert_eq!(series.values, vec![2.0, 5.0]);
    }

    #[test]
    fn test_non_numeric_other_columns_are_ignored() {
        let data = "store,value\nnorth,1\nsouth,2\n";
        let series = parse(data, None).unwrap();
        assert_eq!(series.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_error_ambiguous_column() {
        let err = parse("a,b\n1,2\n", None).unwrap_err();
        match err {
            CliError::InvalidArgument { suggestion, .. } => {
                assert!(suggestion.unwrap().contains("a, b"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_error_missing_named_column() {
        let err = parse("value\n1\n", Some("load")).unwrap_err();
        assert!(err.to_string().contains("no column named 'load'"));
    }

    // ==========================================================================
    // Values
    // ==========================================================================

    #[test]
    fn test_handle_missing_values_as_nan() {
        let series = parse("date,value\nd1,1\nd2,\nd3,3\n", None).unwrap();
        assert_eq!(series.len(), 3);
        assert!(series.values[1].is_nan());
    }

    #[test]
    fn test_short_row_is_nan() {
        let series = parse("date,value\nd1,1\nd2\n", None).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series.values[1].is_nan());
    }

    #[test]
    fn test_whitespace_in_values() {
        let series = parse("value\n  1.5  \n 2 \n", None).unwrap();
        assert_eq!(series.values, vec![1.5, 2.0]);
    }

    #[test]
    fn test_error_invalid_numeric_value_reports_line() {
        let err = parse("value\n1\nabc\n", None).unwrap_err();
        match err {
            CliError::Csv { message, line } => {
                assert!(message.contains("'abc'"));
                assert_eq!(line, Some(3));
            }
            other => panic!("Expected Csv error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_csv_no_data_rows() {
        let series = parse("value\n", None).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_error_file_not_found() {
        let err = read_series("/nonexistent/series.csv", None).unwrap_err();
        match err {
            CliError::Io { path, .. } => {
                assert_eq!(path.as_deref(), Some("/nonexistent/series.csv"));
            }
            other => panic!("Expected Io error, got {other:?}"),
        }
    }
}
