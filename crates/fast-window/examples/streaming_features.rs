//! Streaming Feature Example
//!
//! This example fits a set of window statistics on a week of hourly history
//! and then streams new hourly readings through them, the way a forecasting
//! feature pipeline would.
//!
//! Run with: `cargo run --example streaming_features`

use fast_window::prelude::*;

fn hourly_load(hour: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let h = hour as f64;
    let daily = (h * std::f64::consts::TAU / 24.0).sin() * 20.0;
    let drift = h * 0.05;
    500.0 + daily + drift
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let history: Vec<f64> = (0..168).map(hourly_load).collect();

    let specs = [
        TransformSpec::RollingMean(RollingParams::new(24)),
        TransformSpec::RollingStd(RollingParams::new(24).with_min_samples(2)),
        TransformSpec::RollingMean(RollingParams::new(3).with_season_length(24)),
        TransformSpec::ExpandingMax(ExpandingParams::default()),
        TransformSpec::EwmMean { alpha: 0.1 },
        TransformSpec::Shift { offset: 24 },
    ];

    let mut features = Vec::with_capacity(specs.len());
    for spec in &specs {
        let mut stat = spec.build::<f64>()?;
        let fitted = stat.fit_transform(&history)?;
        println!(
            "{:<28} fitted on {} hours, last value {:.3}",
            spec.label(),
            history.len(),
            fitted.last().copied().unwrap_or(f64::NAN)
        );
        features.push(stat);
    }
    println!();

    for hour in 168..174 {
        let reading = hourly_load(hour);
        print!("hour {hour:>3} load {reading:>8.3}:");
        for stat in &mut features {
            print!(" {:>9.3}", stat.update(reading)?);
        }
        println!();
    }

    // Update before fit is reported, not silently accepted
    let mut unfitted = RollingMean::<f64>::new(24, None)?;
    if let Err(e) = unfitted.update(1.0) {
        println!();
        println!("Expected error: {e}");
    }

    Ok(())
}
