//! Band-limited cross-section extraction.
//!
//! A section is not a plane cut. Every triangle whose centroid lies strictly
//! within the band half-width of a station contributes all three of its
//! corners, projected onto the plane normal to the span axis. Corners shared
//! by several selected triangles appear several times.

use nalgebra::Point2;

use crate::Mesh;
use crate::axis::SpanAxis;

/// Fewest triangles a band must hold before its section is described.
pub const MIN_SECTION_TRIANGLES: usize = 3;

/// Projected corner points collected around one station.
#[derive(Debug, Clone, Default)]
pub struct SectionCloud {
    /// Station position along the span axis.
    pub station: f64,

    /// Number of triangles selected by the band.
    pub triangle_count: usize,

    /// Selected corners as (chordwise, thicknesswise) coordinates.
    pub points: Vec<Point2<f64>>,
}

impl SectionCloud {
    /// Too few triangles to describe the section.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.triangle_count < MIN_SECTION_TRIANGLES
    }

    /// Number of projected points (three per selected triangle).
    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

/// Whether a centroid coordinate falls inside a station's band.
#[inline]
pub fn in_band(coordinate: f64, station: f64, half_width: f64) -> bool {
    (coordinate - station).abs() < half_width
}

/// Collect the projected section cloud for one station.
///
/// Reads the mesh only; safe to call concurrently for different stations.
pub fn extract_section(mesh: &Mesh, axis: SpanAxis, station: f64, half_width: f64) -> SectionCloud {
    let mut cloud = SectionCloud {
        station,
        ..SectionCloud::default()
    };

    for tri in mesh.triangles() {
        if !in_band(axis.coordinate(&tri.centroid()), station, half_width) {
            continue;
        }
        cloud.triangle_count += 1;
        cloud
            .points
            .extend(tri.vertices().iter().map(|v| axis.project(v)));
    }

    cloud
}
