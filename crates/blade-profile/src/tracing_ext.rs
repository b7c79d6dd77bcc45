//! Tracing extensions for profile extraction.
//!
//! Structured logging and timing for the analysis pipeline, built on the
//! `tracing` ecosystem. Nothing is printed unless the application installs a
//! subscriber:
//!
//! ```rust,ignore
//! use tracing_subscriber::{fmt, prelude::*, EnvFilter};
//!
//! tracing_subscriber::registry()
//!     .with(fmt::layer())
//!     .with(EnvFilter::from_default_env())
//!     .init();
//!
//! // RUST_LOG=blade_profile=debug shows one line per station
//! ```
//!
//! # Targets
//!
//! - `blade_profile::timing`: operation durations
//! - `blade_profile::mesh_state`: mesh dimensions at pipeline boundaries
//! - `blade_profile::station`: per-station descriptors
//! - `blade_profile::io`: file reads and writes

use std::time::Instant;
use tracing::{Span, debug, info, trace, warn};

use crate::profile::{StationRecord, StationStatus};

/// A performance timer that logs duration on drop.
///
/// ```rust,ignore
/// fn expensive_operation() {
///     let _timer = OperationTimer::new("expensive_operation");
///     // ... do work ...
/// } // Timer logs duration when dropped
/// ```
pub struct OperationTimer {
    name: &'static str,
    start: Instant,
    span: Span,
}

impl OperationTimer {
    /// Create a new operation timer.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!("blade_operation", operation = name);
        debug!(target: "blade_profile::timing", operation = name, "Starting operation");
        Self {
            name,
            start: Instant::now(),
            span,
        }
    }

    /// Create a timer carrying the mesh size and station count.
    pub fn with_context(name: &'static str, face_count: usize, station_count: usize) -> Self {
        let span = tracing::info_span!(
            "blade_operation",
            operation = name,
            faces = face_count,
            stations = station_count
        );
        debug!(
            target: "blade_profile::timing",
            operation = name,
            faces = face_count,
            stations = station_count,
            "Starting operation"
        );
        Self {
            name,
            start: Instant::now(),
            span,
        }
    }

    /// Get the elapsed time.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    /// Get the span for this timer.
    ///
    /// Enter it to attach nested events to the operation.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for OperationTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        info!(
            target: "blade_profile::timing",
            operation = self.name,
            elapsed_ms = format!("{:.2}", elapsed_ms),
            "Operation completed"
        );
    }
}

/// Log mesh statistics at debug level.
pub fn log_mesh_stats(mesh: &crate::Mesh, context: &str) {
    let (min_bounds, max_bounds) = mesh.bounds().unwrap_or_default();
    let dims = max_bounds - min_bounds;

    debug!(
        target: "blade_profile::mesh_state",
        context = context,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        dimensions = format!("{:.3} x {:.3} x {:.3}", dims.x, dims.y, dims.z),
        "Mesh state"
    );
}

/// Log one finished station.
///
/// Degenerate stations are expected near the tips and are logged at trace
/// level, not as warnings.
pub fn log_station(index: usize, record: &StationRecord) {
    match record.status {
        StationStatus::Measured => debug!(
            target: "blade_profile::station",
            index = index,
            position = record.span_position,
            triangles = record.triangle_count,
            chord = record.chord_length,
            thickness = record.max_thickness,
            twist_deg = record.twist_angle_deg,
            area = record.section_area,
            "Station measured"
        ),
        StationStatus::VerticalFit => debug!(
            target: "blade_profile::station",
            index = index,
            position = record.span_position,
            triangles = record.triangle_count,
            twist_deg = record.twist_angle_deg,
            "Station has no chordwise spread; twist set to sentinel"
        ),
        StationStatus::Degenerate => trace!(
            target: "blade_profile::station",
            index = index,
            position = record.span_position,
            triangles = record.triangle_count,
            "Station band too sparse; zero record emitted"
        ),
    }
}

/// Log a file I/O operation.
pub fn log_io_operation(
    operation: &str,
    path: &std::path::Path,
    format: Option<&str>,
    success: bool,
) {
    if success {
        info!(
            target: "blade_profile::io",
            operation = operation,
            path = path.display().to_string(),
            format = format.unwrap_or("auto"),
            "I/O operation completed"
        );
    } else {
        warn!(
            target: "blade_profile::io",
            operation = operation,
            path = path.display().to_string(),
            format = format.unwrap_or("auto"),
            "I/O operation failed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mesh;

    #[test]
    fn test_operation_timer() {
        let timer = OperationTimer::new("test_operation");
        std::thread::sleep(std::time::Duration::from_millis(10));
        assert!(timer.elapsed_ms() >= 10.0);
    }

    #[test]
    fn test_logging_helpers_do_not_panic() {
        log_mesh_stats(&Mesh::new(), "test");
        log_station(0, &StationRecord::degenerate(1.5, 2));
        log_io_operation("load", std::path::Path::new("blade.stl"), None, false);
    }
}
