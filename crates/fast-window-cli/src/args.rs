//! CLI argument parsing module.
//!
//! This module defines the command-line interface for fast-window using clap.
//! Each subcommand names one statistic and takes the input CSV, optional
//! output path and the number of rows to fit on before streaming the rest.
//!
//! # Examples
//!
//! ```bash
//! # Rolling mean over 7 observations, fitted on the first 100 rows
//! fast-window rolling mean input.csv --window 7 --fit-rows 100
//!
//! # Rolling std per hour of day, emitted once 2 observations are seen
//! fast-window rolling std input.csv --window 4 --min-samples 2 --season-length 24
//!
//! # Expanding maximum of the `load` column, written to a file
//! fast-window expanding max input.csv -c load -o features.csv
//!
//! # Exponentially weighted mean
//! fast-window ewm input.csv --alpha 0.3
//!
//! # Lag by one day of hourly data
//! fast-window shift input.csv --offset 24
//!
//! # Several statistics from a JSON configuration file
//! fast-window run input.csv --config features.json
//! ```

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fast_window::config::{ExpandingParams, RollingParams, TransformSpec};

/// fast-window: replay a CSV series through online window statistics
#[derive(Parser, Debug)]
#[command(name = "fast-window")]
#[command(author, version, about = "Online rolling, seasonal, expanding and EWM statistics")]
#[command(long_about = "fast-window fits window statistics on the head of a CSV \
    series and streams the remaining rows through them one value at a time, \
    writing one output column per statistic.")]
pub struct Args {
    /// Log fitting details to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The statistic to compute
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct IoArgs {
    /// Input CSV file
    pub input: String,

    /// Output CSV file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Column holding the series (auto-detected if not specified)
    #[arg(short, long)]
    pub column: Option<String>,

    /// Rows used to fit the statistics; the rest are streamed through `update`
    /// (defaults to every row)
    #[arg(long)]
    pub fit_rows: Option<usize>,
}

/// Statistic computed over a rolling or expanding window.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    /// Arithmetic mean
    Mean,
    /// Maximum
    Max,
    /// Minimum
    Min,
    /// Sample standard deviation
    Std,
}

/// Available statistic commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rolling statistic over a bounded trailing window
    #[command(about = "Rolling mean, max, min or std")]
    Rolling {
        /// Statistic to compute
        #[arg(value_enum)]
        statistic: Statistic,

        #[command(flatten)]
        io: IoArgs,

        /// Number of trailing observations in the window
        #[arg(short, long)]
        window: usize,

        /// Observations required before a value is emitted (defaults to the window)
        #[arg(long)]
        min_samples: Option<usize>,

        /// Compute the statistic separately for each of this many seasonal phases
        #[arg(long)]
        season_length: Option<usize>,
    },

    /// Expanding statistic over all observations so far
    #[command(about = "Expanding mean, max, min or std")]
    Expanding {
        /// Statistic to compute
        #[arg(value_enum)]
        statistic: Statistic,

        #[command(flatten)]
        io: IoArgs,

        /// Compute the statistic separately for each of this many seasonal phases
        #[arg(long)]
        season_length: Option<usize>,
    },

    /// Exponentially weighted mean
    #[command(about = "Exponentially weighted mean (EWM)")]
    Ewm {
        #[command(flatten)]
        io: IoArgs,

        /// Smoothing factor in (0, 1]
        #[arg(short, long)]
        alpha: f64,
    },

    /// Lagged copy of the series
    #[command(about = "Shift the series by a fixed number of observations")]
    Shift {
        #[command(flatten)]
        io: IoArgs,

        /// Lag in observations
        #[arg(long, default_value = "1")]
        offset: usize,
    },

    /// Several statistics listed in a JSON configuration file
    #[command(about = "Run every statistic listed in a JSON configuration file")]
    Run {
        #[command(flatten)]
        io: IoArgs,

        /// JSON file listing the statistics to compute
        #[arg(long)]
        config: String,
    },
}

impl Args {
    /// Parse command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Options shared by every subcommand.
    #[must_use]
    pub fn io(&self) -> &IoArgs {
        match &self.command {
            Command::Rolling { io, .. }
            | Command::Expanding { io, .. }
            | Command::Ewm { io, .. }
            | Command::Shift { io, .. }
            | Command::Run { io, .. } => io,
        }
    }

    /// The configuration file named by `run`, if any.
    #[must_use]
    pub fn config_path(&self) -> Option<&str> {
        match &self.command {
            Command::Run { config, .. } => Some(config),
            _ => None,
        }
    }

    /// The statistic named by the flags of a single-statistic subcommand.
    ///
    /// Returns `None` for `run`, whose statistics come from its configuration
    /// file. Parameter values are validated later, when the statistic is built.
    #[must_use]
    pub fn inline_spec(&self) -> Option<TransformSpec> {
        match self.command {
            Command::Rolling {
                statistic,
                window,
                min_samples,
                season_length,
                ..
            } => {
                let params = RollingParams {
                    window_size: window,
                    min_samples,
                    season_length,
                };
                Some(match statistic {
                    Statistic::Mean => TransformSpec::RollingMean(params),
                    Statistic::Max => TransformSpec::RollingMax(params),
                    Statistic::Min => TransformSpec::RollingMin(params),
                    Statistic::Std => TransformSpec::RollingStd(params),
                })
            }
            Command::Expanding {
                statistic,
                season_length,
                ..
            } => {
                let params = ExpandingParams { season_length };
                Some(match statistic {
                    Statistic::Mean => TransformSpec::ExpandingMean(params),
                    Statistic::Max => TransformSpec::ExpandingMax(params),
                    Statistic::Min => TransformSpec::ExpandingMin(params),
                    Statistic::Std => TransformSpec::ExpandingStd(params),
                })
            }
            Command::Ewm { alpha, .. } => Some(TransformSpec::EwmMean { alpha }),
            Command::Shift { offset, .. } => Some(TransformSpec::Shift { offset }),
            Command::Run { .. } => None,
        }
    }
}
