pub mod error;
pub mod sma;

use chrono::DateTime;
use serde::Serialize;
use tracing::debug;

use vaultlens_types::{Horizon, SeriesPoint};

pub use error::AnalyticsError;
pub use sma::simple_moving_average;

/// Window size of the smoothing average, in samples.
pub const SMA_WINDOW: usize = 15;

/// One plottable row: the raw yield, its smoothed companion, and the flat
/// window mean, all in percent against a display date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedPoint {
    pub time: String,
    pub value: f64,
    pub sma_value: Option<f64>,
    pub average_value: f64,
}

/// Derive the chart series for one instrument over the selected horizon.
///
/// The smoothing average runs over the full history and is then truncated
/// to the window, so the first points of a short horizon still carry a real
/// average. The flat reference mean uses only the windowed slice.
pub fn compute(
    series: &[SeriesPoint],
    horizon: Horizon,
) -> Result<Vec<DerivedPoint>, AnalyticsError> {
    if series.is_empty() {
        return Err(AnalyticsError::EmptySeries);
    }

    let span = match horizon.to_points() {
        // A zero-sample request degrades to the full series rather than an
        // empty chart.
        Some(0) | None => series.len(),
        Some(n) => n.min(series.len()),
    };

    let percents: Vec<f64> = series.iter().map(|point| point.value * 100.0).collect();
    let sma = simple_moving_average(&percents, SMA_WINDOW);

    let start = series.len() - span;
    let average = mean(&percents[start..]);

    let points = series[start..]
        .iter()
        .zip(&percents[start..])
        .zip(&sma[start..])
        .map(|((point, &value), &sma_value)| DerivedPoint {
            time: display_date(point.time),
            value,
            sma_value,
            average_value: average,
        })
        .collect();

    debug!(len = series.len(), span, ?horizon, "derived chart series");
    Ok(points)
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Calendar date shown on the x axis, fixed to the en-US short form in UTC.
fn display_date(unix_secs: i64) -> String {
    DateTime::from_timestamp(unix_secs, 0).map_or_else(
        || unix_secs.to_string(),
        |date| date.format("%-m/%-d/%Y").to_string(),
    )
}
