//! Spanwise station planning.

use crate::axis::SpanRange;
use crate::error::{BladeError, BladeResult};

/// Default number of spanwise stations.
pub const DEFAULT_STATION_COUNT: usize = 12;

/// Smallest station count that still spans both ends of the blade.
pub const MIN_STATION_COUNT: usize = 2;

/// Evenly spaced station positions from `span.min` to `span.max`, both inclusive.
///
/// A zero-length span yields `count` coincident stations; they are still
/// processed, and normally come out degenerate.
///
/// # Errors
///
/// [`BladeError::InvalidParams`] if `count` is below [`MIN_STATION_COUNT`].
pub fn plan_stations(span: &SpanRange, count: usize) -> BladeResult<Vec<f64>> {
    check_station_count(count)?;

    let step = span.length / (count - 1) as f64;
    let mut stations: Vec<f64> = (0..count).map(|i| span.min + i as f64 * step).collect();
    // Pin the last station to the span end so rounding never leaves it short
    if let Some(last) = stations.last_mut() {
        *last = span.max;
    }
    Ok(stations)
}

/// Half-width of the band used to collect triangles around each station.
///
/// This is `span.length / count`; bands of neighboring stations overlap, and
/// sparse regions can still leave a band empty.
pub fn band_half_width(span: &SpanRange, count: usize) -> BladeResult<f64> {
    check_station_count(count)?;
    Ok(span.length / count as f64)
}

fn check_station_count(count: usize) -> BladeResult<()> {
    if count < MIN_STATION_COUNT {
        return Err(BladeError::invalid_param(
            "station_count",
            count.to_string(),
            format!("at least {} stations are required", MIN_STATION_COUNT),
        ));
    }
    Ok(())
}
