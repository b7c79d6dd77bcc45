//! Section descriptors: chord, thickness, twist and area.
//!
//! All four values come from the unordered projected point cloud of a
//! section. Chord and thickness are bounding extents, twist is the angle of
//! a least-squares line through the points, and the area is the bounding
//! rectangle scaled by a fill factor.
//!
//! # Area heuristic
//!
//! `area = chord * thickness * fill_factor` with a default fill factor of
//! 0.6, the share of its bounding rectangle a typical airfoil section covers.
//! This is an approximation, not a polygon area. Existing result tables were
//! produced with it, so it is kept as is.

use nalgebra::Point2;

/// Default fill factor for the section area estimate.
pub const DEFAULT_FILL_FACTOR: f64 = 0.6;

/// Twist reported when the points have no chordwise spread and no line
/// `thickness = slope * chord + intercept` exists.
pub const VERTICAL_TWIST_DEG: f64 = 90.0;

/// Descriptors of one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionDescriptors {
    /// Extent along the chordwise axis.
    pub chord_length: f64,
    /// Extent along the thicknesswise axis.
    pub max_thickness: f64,
    /// Angle of the best-fit line relative to the chordwise axis, degrees.
    pub twist_angle_deg: f64,
    /// `chord_length * max_thickness * fill_factor`.
    pub section_area: f64,
    /// Whether the twist is the [`VERTICAL_TWIST_DEG`] sentinel.
    pub vertical_fit: bool,
}

/// Axis-aligned extents of a 2D point set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents2 {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl Extents2 {
    /// Bounding extents, or None for an empty slice.
    pub fn of(points: &[Point2<f64>]) -> Option<Self> {
        let first = *points.first()?;
        let mut ext = Extents2 {
            min: first,
            max: first,
        };
        for p in &points[1..] {
            ext.min.x = ext.min.x.min(p.x);
            ext.min.y = ext.min.y.min(p.y);
            ext.max.x = ext.max.x.max(p.x);
            ext.max.y = ext.max.y.max(p.y);
        }
        Some(ext)
    }

    /// Chordwise extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Thicknesswise extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Slope of the least-squares line `y = slope * x + intercept`.
///
/// Returns None when the fit is singular: fewer than two points, no spread
/// in x, or a non-finite result.
pub fn fit_slope(points: &[Point2<f64>]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let ext = Extents2::of(points)?;
    if ext.width() <= 0.0 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.x).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

    let (sxx, sxy) = points.iter().fold((0.0, 0.0), |(sxx, sxy), p| {
        let dx = p.x - mean_x;
        (sxx + dx * dx, sxy + dx * (p.y - mean_y))
    });

    if sxx <= 0.0 {
        return None;
    }
    let slope = sxy / sxx;
    slope.is_finite().then_some(slope)
}

/// Twist angle in degrees, and whether the vertical sentinel was used.
pub fn twist_angle_deg(points: &[Point2<f64>]) -> (f64, bool) {
    match fit_slope(points) {
        Some(slope) => (slope.atan().to_degrees(), false),
        None => (VERTICAL_TWIST_DEG, true),
    }
}

/// Describe a projected section.
///
/// An empty slice yields all-zero descriptors. Callers normally skip sections
/// with fewer than three triangles before getting here.
pub fn describe_points(points: &[Point2<f64>], fill_factor: f64) -> SectionDescriptors {
    let Some(ext) = Extents2::of(points) else {
        return SectionDescriptors {
            chord_length: 0.0,
            max_thickness: 0.0,
            twist_angle_deg: 0.0,
            section_area: 0.0,
            vertical_fit: false,
        };
    };

    let chord_length = ext.width();
    let max_thickness = ext.height();
    let (twist_angle_deg, vertical_fit) = twist_angle_deg(points);

    SectionDescriptors {
        chord_length,
        max_thickness,
        twist_angle_deg,
        section_area: chord_length * max_thickness * fill_factor,
        vertical_fit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2<f64>> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn test_rectangle_section() {
        let cloud = pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 2.0), (0.0, 2.0)]);
        let d = describe_points(&cloud, DEFAULT_FILL_FACTOR);

        assert_relative_eq!(d.chord_length, 10.0);
        assert_relative_eq!(d.max_thickness, 2.0);
        assert_relative_eq!(d.twist_angle_deg, 0.0);
        assert_relative_eq!(d.section_area, 12.0, epsilon = 1e-12);
        assert!(!d.vertical_fit);
    }

    #[test]
    fn test_unit_slope_is_45_degrees() {
        let cloud = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let (twist, vertical) = twist_angle_deg(&cloud);
        assert_relative_eq!(twist, 45.0, epsilon = 1e-12);
        assert!(!vertical);
    }

    #[test]
    fn test_negative_slope() {
        let cloud = pts(&[(0.0, 3.0), (1.0, 2.0), (2.0, 1.0), (3.0, 0.0)]);
        let (twist, _) = twist_angle_deg(&cloud);
        assert_relative_eq!(twist, -45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_least_squares_through_noise() {
        // y = 0.5 x with symmetric residuals
        let cloud = pts(&[(0.0, 0.1), (2.0, 0.9), (4.0, 2.1), (6.0, 2.9)]);
        let slope = fit_slope(&cloud).unwrap();
        assert_relative_eq!(slope, 0.48, epsilon = 1e-12);
    }

    #[test]
    fn test_vertical_cloud_returns_sentinel() {
        let cloud = pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 5.0), (0.0, -2.0)]);
        let d = describe_points(&cloud, DEFAULT_FILL_FACTOR);

        assert!(d.vertical_fit);
        assert_eq!(d.twist_angle_deg, VERTICAL_TWIST_DEG);
        assert!(!d.twist_angle_deg.is_nan());
        assert_eq!(d.chord_length, 0.0);
        assert_relative_eq!(d.max_thickness, 7.0);
        assert_eq!(d.section_area, 0.0);
    }

    #[test]
    fn test_repeated_inexact_coordinate_is_vertical() {
        // 0.1 does not average back to itself exactly in binary
        let cloud = pts(&[(0.1, 0.0), (0.1, 1.0), (0.1, 2.0)]);
        assert!(fit_slope(&cloud).is_none());
    }

    #[test]
    fn test_fill_factor_scales_area() {
        let cloud = pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 1.0), (0.0, 1.0)]);
        let d = describe_points(&cloud, 1.0);
        assert_relative_eq!(d.section_area, 4.0);
    }

    #[test]
    fn test_empty_cloud_is_all_zero() {
        let d = describe_points(&[], DEFAULT_FILL_FACTOR);
        assert_eq!(d.chord_length, 0.0);
        assert_eq!(d.max_thickness, 0.0);
        assert_eq!(d.twist_angle_deg, 0.0);
        assert_eq!(d.section_area, 0.0);
    }

    #[test]
    fn test_extents() {
        let cloud = pts(&[(1.0, -1.0), (-3.0, 2.0), (0.5, 0.0)]);
        let ext = Extents2::of(&cloud).unwrap();
        assert_eq!(ext.min, Point2::new(-3.0, -1.0));
        assert_eq!(ext.max, Point2::new(1.0, 2.0));
        assert_relative_eq!(ext.width(), 4.0);
        assert_relative_eq!(ext.height(), 3.0);
        assert!(Extents2::of(&[]).is_none());
    }
}
