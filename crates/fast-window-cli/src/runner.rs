//! Replays a series through a set of online statistics.
//!
//! Each statistic is fitted on the first `fit_rows` observations with
//! `fit_transform` and then fed the remaining observations one at a time with
//! `update`, exactly as a live feature pipeline would. The concatenated
//! outputs form one column per statistic.

use std::fs;
use std::time::Instant;

use fast_window::config::TransformSpec;
use log::{debug, info};

use crate::args::Args;
use crate::csv_parser::read_series;
use crate::csv_writer::{write_output, Column, OutputDest};
use crate::error::{CliError, Result};

/// What a replay did, for the closing log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Rows read from the input.
    pub rows: usize,
    /// Rows passed to `fit_transform`.
    pub fit_rows: usize,
    /// Rows passed to `update` one at a time.
    pub streamed_rows: usize,
    /// Labels of the computed columns.
    pub columns: Vec<String>,
}

/// Reads the JSON list of statistics to compute.
///
/// # Errors
///
/// Returns `CliError::Io` if the file cannot be read, `CliError::Config` if it
/// is not a list of statistic configurations, or `CliError::InvalidArgument` if the list
/// is empty.
pub fn load_specs(path: &str) -> Result<Vec<TransformSpec>> {
    let text = fs::read_to_string(path).map_err(|e| CliError::Io {
        source: e,
        path: Some(path.to_string()),
    })?;
    let specs: Vec<TransformSpec> =
        serde_json::from_str(&text).map_err(|e| CliError::Config {
            source: e,
            path: path.to_string(),
        })?;
    if specs.is_empty() {
        return Err(CliError::InvalidArgument {
            argument: "config".to_string(),
            reason: format!("'{path}' lists no statistics"),
            suggestion: Some("Add at least one entry such as {\"kind\": \"expanding_mean\"}".to_string()),
        });
    }
    Ok(specs)
}

/// Fits every statistic on `values[..fit_rows]` and streams the rest.
///
/// Returns one column per statistic, each as long as `values`.
///
/// # Errors
///
/// Returns `CliError::InvalidArgument` if `fit_rows` exceeds the series
/// length, or `CliError::Transform` if a statistic rejects its parameters.
pub fn replay(values: &[f64], specs: &[TransformSpec], fit_rows: usize) -> Result<Vec<Column>> {
    if fit_rows > values.len() {
        return Err(CliError::InvalidArgument {
            argument: "fit-rows".to_string(),
            reason: format!("input has only {} rows, cannot fit on {fit_rows}", values.len()),
            suggestion: Some(format!("Use a value of at most {}", values.len())),
        });
    }
    let (history, live) = values.split_at(fit_rows);

    let mut columns = Vec::with_capacity(specs.len());
    for spec in specs {
        let mut stat = spec.build::<f64>()?;
        let mut output = stat.fit_transform(history)?;
        output.reserve(live.len());
        for &value in live {
            output.push(stat.update(value)?);
        }
        debug!("{}: fitted on {} rows, streamed {}", spec.label(), history.len(), live.len());
        columns.push(Column::new(spec.label(), output));
    }
    Ok(columns)
}

/// Runs the command described by `args`: read, replay, write.
///
/// # Errors
///
/// Returns any error from reading the input, loading the configuration,
/// building or updating a statistic, or writing the output.
pub fn run(args: &Args) -> Result<ReplaySummary> {
    let start = Instant::now();
    let io = args.io();

    let specs = match (args.inline_spec(), args.config_path()) {
        (Some(spec), _) => vec![spec],
        (None, Some(path)) => load_specs(path)?,
        (None, None) => {
            return Err(CliError::InvalidArgument {
                argument: "command".to_string(),
                reason: "no statistic given".to_string(),
                suggestion: Some("Run `fast-window --help` for the available commands".to_string()),
            })
        }
    };

    let series = read_series(&io.input, io.column.as_deref())?;
    let fit_rows = io.fit_rows.unwrap_or(series.len());
    let computed = replay(&series.values, &specs, fit_rows)?;

    let summary = ReplaySummary {
        rows: series.len(),
        fit_rows,
        streamed_rows: series.len() - fit_rows,
        columns: computed.iter().map(|c| c.header.clone()).collect(),
    };

    let mut columns = Vec::with_capacity(computed.len() + 1);
    columns.push(Column::new(series.name.clone(), series.values.clone()));
    columns.extend(computed);

    let index = series
        .index_name
        .as_deref()
        .zip(series.index.as_deref());
    write_output(index, &columns, &OutputDest::from_path(io.output.as_deref()))?;

    info!(
        "replayed {} rows ({} fitted, {} streamed) through {} in {:.2?}",
        summary.rows,
        summary.fit_rows,
        summary.streamed_rows,
        summary.columns.join(", "),
        start.elapsed()
    );
    Ok(summary)
}
