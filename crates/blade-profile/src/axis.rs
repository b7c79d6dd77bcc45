//! Span axis detection.
//!
//! A blade-like shape is long along one direction. The span axis is taken to
//! be the coordinate axis with the largest bounding-box extent, a cheap proxy
//! for a principal-axis analysis that works for roughly axis-aligned parts.

use nalgebra::{Point2, Point3};
use tracing::info;

use crate::Mesh;

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanAxis {
    X,
    Y,
    Z,
}

impl SpanAxis {
    /// All axes in coordinate order.
    pub const ALL: [SpanAxis; 3] = [SpanAxis::X, SpanAxis::Y, SpanAxis::Z];

    /// Coordinate index (0 = X, 1 = Y, 2 = Z).
    #[inline]
    pub fn index(self) -> usize {
        match self {
            SpanAxis::X => 0,
            SpanAxis::Y => 1,
            SpanAxis::Z => 2,
        }
    }

    /// Axis name as shown in reports.
    pub fn name(self) -> &'static str {
        match self {
            SpanAxis::X => "X",
            SpanAxis::Y => "Y",
            SpanAxis::Z => "Z",
        }
    }

    /// The two remaining axes in their original order: (chordwise, thicknesswise).
    #[inline]
    pub fn section_axes(self) -> (SpanAxis, SpanAxis) {
        match self {
            SpanAxis::X => (SpanAxis::Y, SpanAxis::Z),
            SpanAxis::Y => (SpanAxis::X, SpanAxis::Z),
            SpanAxis::Z => (SpanAxis::X, SpanAxis::Y),
        }
    }

    /// Coordinate of a point along this axis.
    #[inline]
    pub fn coordinate(self, p: &Point3<f64>) -> f64 {
        p[self.index()]
    }

    /// Drop this axis' coordinate, keeping the other two in order.
    #[inline]
    pub fn project(self, p: &Point3<f64>) -> Point2<f64> {
        let (chord, thick) = self.section_axes();
        Point2::new(chord.coordinate(p), thick.coordinate(p))
    }
}

impl std::fmt::Display for SpanAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extent of the mesh along the span axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanRange {
    /// Smallest vertex coordinate along the axis.
    pub min: f64,
    /// Largest vertex coordinate along the axis.
    pub max: f64,
    /// `max - min`, never negative.
    pub length: f64,
}

impl SpanRange {
    /// Create a range from its endpoints.
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            length: (max - min).max(0.0),
        }
    }

    /// A zero-length span: all vertices share one coordinate along the axis.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.length <= 0.0
    }
}

/// Span range of the mesh along a given axis, or None for a mesh without vertices.
pub fn span_range(mesh: &Mesh, axis: SpanAxis) -> Option<SpanRange> {
    let (min, max) = mesh.bounds()?;
    Some(SpanRange::new(axis.coordinate(&min), axis.coordinate(&max)))
}

/// Pick the axis of largest extent.
///
/// Ties go to the first axis in X, Y, Z order. Returns None for a mesh
/// without vertices.
pub fn select_span_axis(mesh: &Mesh) -> Option<(SpanAxis, SpanRange)> {
    let extents = mesh.extents()?;

    let mut best = SpanAxis::X;
    for axis in SpanAxis::ALL {
        if extents[axis.index()] > extents[best.index()] {
            best = axis;
        }
    }

    let span = span_range(mesh, best)?;
    info!(
        "Detected span direction = {} axis, span length = {:.3}",
        best, span.length
    );
    Some((best, span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Vertex;
    use approx::assert_relative_eq;

    fn box_corners(dx: f64, dy: f64, dz: f64) -> Mesh {
        let mut mesh = Mesh::new();
        for &x in &[0.0, dx] {
            for &y in &[0.0, dy] {
                for &z in &[0.0, dz] {
                    mesh.vertices.push(Vertex::from_coords(x, y, z));
                }
            }
        }
        mesh.faces.push([0, 1, 2]);
        mesh
    }

    #[test]
    fn test_selects_largest_extent() {
        let mesh = box_corners(1.0, 5.0, 2.0);
        let (axis, span) = select_span_axis(&mesh).unwrap();
        assert_eq!(axis, SpanAxis::Y);
        assert_relative_eq!(span.min, 0.0);
        assert_relative_eq!(span.max, 5.0);
        assert_relative_eq!(span.length, 5.0);
    }

    #[test]
    fn test_selection_is_deterministic() {
        let mesh = box_corners(3.0, 1.0, 7.0);
        let first = select_span_axis(&mesh).unwrap();
        for _ in 0..5 {
            assert_eq!(select_span_axis(&mesh).unwrap(), first);
        }
        assert_eq!(first.0, SpanAxis::Z);
    }

    #[test]
    fn test_ties_pick_first_axis() {
        let (axis, _) = select_span_axis(&box_corners(4.0, 4.0, 4.0)).unwrap();
        assert_eq!(axis, SpanAxis::X);

        let (axis, _) = select_span_axis(&box_corners(1.0, 4.0, 4.0)).unwrap();
        assert_eq!(axis, SpanAxis::Y);
    }

    #[test]
    fn test_single_point_mesh_has_zero_span() {
        let mut mesh = Mesh::new();
        mesh.vertices.push(Vertex::from_coords(2.0, 3.0, 4.0));
        let (axis, span) = select_span_axis(&mesh).unwrap();
        assert_eq!(axis, SpanAxis::X);
        assert!(span.is_degenerate());
        assert_relative_eq!(span.min, 2.0);
    }

    #[test]
    fn test_no_vertices() {
        assert!(select_span_axis(&Mesh::new()).is_none());
    }

    #[test]
    fn test_projection_keeps_axis_order() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(SpanAxis::X.project(&p), Point2::new(2.0, 3.0));
        assert_eq!(SpanAxis::Y.project(&p), Point2::new(1.0, 3.0));
        assert_eq!(SpanAxis::Z.project(&p), Point2::new(1.0, 2.0));
        assert_relative_eq!(SpanAxis::Y.coordinate(&p), 2.0);
    }
}
