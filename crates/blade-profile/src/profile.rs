//! Spanwise profile extraction pipeline.
//!
//! [`analyze_profile`] is a pure function from a mesh and [`ProfileParams`]
//! to an ordered list of [`StationRecord`]s:
//!
//! 1. validate parameters and mesh data (all failures happen here)
//! 2. pick the span axis (largest bounding-box extent, unless overridden)
//! 3. plan evenly spaced stations along it
//! 4. per station: collect the band's section cloud and describe it
//!
//! Stations are independent, so step 4 runs on the rayon pool when
//! `params.parallel` is set. Output order and values do not depend on it.
//!
//! # Example
//!
//! ```
//! use blade_profile::{Mesh, ProfileParams, Vertex, analyze_profile};
//!
//! // Two triangles are far too sparse for a section: every record is zero.
//! let mut mesh = Mesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 10.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 10.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let profile = analyze_profile(&mesh, &ProfileParams::default()).unwrap();
//! assert_eq!(profile.stations.len(), 12);
//! assert_eq!(profile.axis.name(), "Z");
//! ```

use rayon::prelude::*;
use tracing::{debug, info};

use crate::Mesh;
use crate::axis::{SpanAxis, SpanRange, select_span_axis, span_range};
use crate::describe::{DEFAULT_FILL_FACTOR, describe_points};
use crate::error::{BladeError, BladeResult};
use crate::section::{SectionCloud, extract_section};
use crate::stations::{DEFAULT_STATION_COUNT, band_half_width, plan_stations};
use crate::tracing_ext::{OperationTimer, log_mesh_stats, log_station};
use crate::validate::validate_mesh_data;

/// Parameters for profile extraction.
///
/// # Example
///
/// ```
/// use blade_profile::{ProfileParams, SpanAxis};
///
/// let params = ProfileParams {
///     station_count: 24,
///     span_axis: Some(SpanAxis::Y),
///     ..Default::default()
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileParams {
    /// Number of spanwise stations, both blade ends included.
    ///
    /// Default: 12. Must be at least 2.
    pub station_count: usize,

    /// Share of the chord x thickness rectangle counted as section area.
    ///
    /// Default: 0.6. Must be in (0, 1].
    pub fill_factor: f64,

    /// Force the span axis instead of detecting it.
    ///
    /// Default: None (largest bounding-box extent).
    pub span_axis: Option<SpanAxis>,

    /// Process stations on the rayon thread pool.
    ///
    /// Default: true.
    pub parallel: bool,
}

impl Default for ProfileParams {
    fn default() -> Self {
        Self {
            station_count: DEFAULT_STATION_COUNT,
            fill_factor: DEFAULT_FILL_FACTOR,
            span_axis: None,
            parallel: true,
        }
    }
}

impl ProfileParams {
    /// Default parameters with a different station count.
    pub fn with_stations(station_count: usize) -> Self {
        Self {
            station_count,
            ..Default::default()
        }
    }

    /// Single-threaded variant of these parameters.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// [`BladeError::InvalidParams`] naming the first offending parameter.
    pub fn validate(&self) -> BladeResult<()> {
        if self.station_count < 2 {
            return Err(BladeError::invalid_param(
                "station_count",
                self.station_count.to_string(),
                "at least 2 stations are required",
            ));
        }
        if !self.fill_factor.is_finite() || self.fill_factor <= 0.0 || self.fill_factor > 1.0 {
            return Err(BladeError::invalid_param(
                "fill_factor",
                self.fill_factor.to_string(),
                "must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// How a station's record was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationStatus {
    /// All four descriptors were computed.
    Measured,
    /// Fewer than three triangles in the band; descriptors are zero.
    Degenerate,
    /// Descriptors computed, but the cloud had no chordwise spread and the
    /// twist is the vertical sentinel.
    VerticalFit,
}

impl StationStatus {
    /// Short lowercase label for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Measured => "measured",
            StationStatus::Degenerate => "degenerate",
            StationStatus::VerticalFit => "vertical-fit",
        }
    }
}

/// Descriptors of one spanwise station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationRecord {
    /// Station position along the span axis.
    pub span_position: f64,
    /// Section extent along the chordwise axis.
    pub chord_length: f64,
    /// Section extent along the thicknesswise axis.
    pub max_thickness: f64,
    /// Best-fit line angle, degrees.
    pub twist_angle_deg: f64,
    /// Approximate section area.
    pub section_area: f64,
    /// Triangles selected by the station band.
    pub triangle_count: usize,
    /// How the record was obtained.
    pub status: StationStatus,
}

impl StationRecord {
    /// The all-zero record emitted for a sparse band.
    pub fn degenerate(span_position: f64, triangle_count: usize) -> Self {
        Self {
            span_position,
            chord_length: 0.0,
            max_thickness: 0.0,
            twist_angle_deg: 0.0,
            section_area: 0.0,
            triangle_count,
            status: StationStatus::Degenerate,
        }
    }

    /// Describe an extracted section.
    pub fn from_section(cloud: &SectionCloud, fill_factor: f64) -> Self {
        if cloud.is_degenerate() {
            return Self::degenerate(cloud.station, cloud.triangle_count);
        }

        let d = describe_points(&cloud.points, fill_factor);
        Self {
            span_position: cloud.station,
            chord_length: d.chord_length,
            max_thickness: d.max_thickness,
            twist_angle_deg: d.twist_angle_deg,
            section_area: d.section_area,
            triangle_count: cloud.triangle_count,
            status: if d.vertical_fit {
                StationStatus::VerticalFit
            } else {
                StationStatus::Measured
            },
        }
    }

    /// The five persisted values, in table column order.
    pub fn values(&self) -> [f64; 5] {
        [
            self.span_position,
            self.chord_length,
            self.max_thickness,
            self.twist_angle_deg,
            self.section_area,
        ]
    }

    /// Whether the record is the zero record of a sparse band.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.status == StationStatus::Degenerate
    }
}

/// Result of a profile extraction.
#[derive(Debug, Clone)]
pub struct BladeProfile {
    /// Span axis used for slicing.
    pub axis: SpanAxis,
    /// Vertex extent along the span axis.
    pub span: SpanRange,
    /// Half-width of every station band.
    pub band_half_width: f64,
    /// One record per station, ascending span position.
    pub stations: Vec<StationRecord>,
    /// Parameters used.
    pub params: ProfileParams,
}

/// Aggregate figures over a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSummary {
    /// Stations with computed descriptors (including vertical fits).
    pub measured_count: usize,
    /// Stations with a zero record.
    pub degenerate_count: usize,
    /// Stations whose twist is the vertical sentinel.
    pub vertical_fit_count: usize,
    /// Largest chord and its span position.
    pub max_chord: Option<(f64, f64)>,
    /// Largest thickness and its span position.
    pub max_thickness: Option<(f64, f64)>,
    /// Largest section area and its span position.
    pub max_area: Option<(f64, f64)>,
    /// (min, max) twist over measured stations, sentinels excluded.
    pub twist_range: Option<(f64, f64)>,
}

impl BladeProfile {
    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Span positions of all stations.
    pub fn positions(&self) -> Vec<f64> {
        self.stations.iter().map(|s| s.span_position).collect()
    }

    /// Aggregate figures for reporting.
    pub fn summary(&self) -> ProfileSummary {
        let described: Vec<&StationRecord> =
            self.stations.iter().filter(|s| !s.is_degenerate()).collect();

        let arg_max = |value: fn(&StationRecord) -> f64| {
            described.iter().fold(None, |best: Option<(f64, f64)>, s| {
                let v = value(s);
                match best {
                    Some((b, _)) if b >= v => best,
                    _ => Some((v, s.span_position)),
                }
            })
        };

        let twist_range = self
            .stations
            .iter()
            .filter(|s| s.status == StationStatus::Measured)
            .fold(None, |range: Option<(f64, f64)>, s| {
                let t = s.twist_angle_deg;
                Some(match range {
                    Some((lo, hi)) => (lo.min(t), hi.max(t)),
                    None => (t, t),
                })
            });

        ProfileSummary {
            measured_count: described.len(),
            degenerate_count: self.stations.len() - described.len(),
            vertical_fit_count: self
                .stations
                .iter()
                .filter(|s| s.status == StationStatus::VerticalFit)
                .count(),
            max_chord: arg_max(|s| s.chord_length),
            max_thickness: arg_max(|s| s.max_thickness),
            max_area: arg_max(|s| s.section_area),
            twist_range,
        }
    }
}

/// Extract and describe the section at one station.
pub fn measure_station(
    mesh: &Mesh,
    axis: SpanAxis,
    station: f64,
    half_width: f64,
    fill_factor: f64,
) -> StationRecord {
    let cloud = extract_section(mesh, axis, station, half_width);
    StationRecord::from_section(&cloud, fill_factor)
}

/// Extract the spanwise profile of a mesh.
///
/// # Errors
///
/// Precondition failures only, all raised before any station is processed:
/// - [`BladeError::InvalidParams`] for a bad station count or fill factor
/// - [`BladeError::EmptyMesh`] for a mesh without vertices or triangles
/// - [`BladeError::InvalidVertexIndex`] / [`BladeError::InvalidCoordinate`]
///   for malformed mesh data
///
/// Sparse or ill-conditioned stations never fail the run.
pub fn analyze_profile(mesh: &Mesh, params: &ProfileParams) -> BladeResult<BladeProfile> {
    params.validate()?;
    validate_mesh_data(mesh)?;

    let timer =
        OperationTimer::with_context("analyze_profile", mesh.face_count(), params.station_count);
    let _entered = timer.span().enter();
    log_mesh_stats(mesh, "profile input");

    let (axis, span) = match params.span_axis {
        Some(axis) => {
            let span = span_range(mesh, axis)
                .ok_or_else(|| BladeError::empty_mesh("mesh has no vertices"))?;
            info!(
                "Using span direction = {} axis (forced), span length = {:.3}",
                axis, span.length
            );
            (axis, span)
        }
        None => select_span_axis(mesh)
            .ok_or_else(|| BladeError::empty_mesh("mesh has no vertices"))?,
    };

    let stations = plan_stations(&span, params.station_count)?;
    let half_width = band_half_width(&span, params.station_count)?;
    debug!(
        stations = stations.len(),
        half_width = half_width,
        parallel = params.parallel,
        "Station plan ready"
    );

    let measure =
        |&station: &f64| measure_station(mesh, axis, station, half_width, params.fill_factor);
    let records: Vec<StationRecord> = if params.parallel {
        // Indexed collect keeps station order
        stations.par_iter().map(measure).collect()
    } else {
        stations.iter().map(measure).collect()
    };

    for (index, record) in records.iter().enumerate() {
        log_station(index, record);
    }

    let profile = BladeProfile {
        axis,
        span,
        band_half_width: half_width,
        stations: records,
        params: params.clone(),
    };

    let summary = profile.summary();
    info!(
        "Profile extracted: {} stations ({} measured, {} degenerate)",
        profile.station_count(),
        summary.measured_count,
        summary.degenerate_count
    );

    Ok(profile)
}
