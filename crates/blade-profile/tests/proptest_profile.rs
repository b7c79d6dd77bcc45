//! Property-based tests for profile extraction.
//!
//! Run with: cargo test -p blade-profile --test proptest_profile

use blade_profile::{
    Mesh, ProfileParams, StationStatus, Vertex, analyze_profile, describe_points,
    select_span_axis, to_csv_string,
};
use nalgebra::Point2;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a random vertex position in a bounded range.
fn arb_position() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(-100.0..100.0f64)
}

/// Generate a mesh with valid face indices and at least one face.
fn arb_mesh(max_vertices: usize, max_faces: usize) -> impl Strategy<Value = Mesh> {
    prop::collection::vec(arb_position(), 3..=max_vertices).prop_flat_map(move |positions| {
        let n = positions.len() as u32;
        let faces = prop::collection::vec(prop::array::uniform3(0..n), 1..=max_faces);
        faces.prop_map(move |faces| Mesh {
            vertices: positions
                .iter()
                .map(|&[x, y, z]| Vertex::from_coords(x, y, z))
                .collect(),
            faces,
        })
    })
}

fn arb_points() -> impl Strategy<Value = Vec<Point2<f64>>> {
    prop::collection::vec(
        (-50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y)| Point2::new(x, y)),
        1..60,
    )
}

// =============================================================================
// Pipeline invariants
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn record_count_equals_station_count(mesh in arb_mesh(40, 60), stations in 2usize..50) {
        let profile = analyze_profile(&mesh, &ProfileParams::with_stations(stations)).unwrap();
        prop_assert_eq!(profile.stations.len(), stations);
    }

    #[test]
    fn stations_cover_span_in_order(mesh in arb_mesh(40, 60), stations in 2usize..30) {
        let profile = analyze_profile(&mesh, &ProfileParams::with_stations(stations)).unwrap();
        let positions = profile.positions();

        prop_assert_eq!(positions[0], profile.span.min);
        prop_assert_eq!(positions[stations - 1], profile.span.max);
        prop_assert!(positions.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn degenerate_records_are_zero(mesh in arb_mesh(30, 40), stations in 2usize..40) {
        let profile = analyze_profile(&mesh, &ProfileParams::with_stations(stations)).unwrap();
        for s in &profile.stations {
            prop_assert_eq!(s.triangle_count < 3, s.is_degenerate());
            if s.is_degenerate() {
                let values = s.values();
                prop_assert_eq!(&values[1..], &[0.0; 4][..]);
            }
        }
    }

    #[test]
    fn records_are_always_finite(mesh in arb_mesh(40, 60), stations in 2usize..30) {
        let profile = analyze_profile(&mesh, &ProfileParams::with_stations(stations)).unwrap();
        for s in &profile.stations {
            prop_assert!(s.values().iter().all(|v| v.is_finite()));
            prop_assert!(s.chord_length >= 0.0);
            prop_assert!(s.max_thickness >= 0.0);
            prop_assert!(s.section_area >= 0.0);
            if s.status == StationStatus::Measured {
                prop_assert!(s.twist_angle_deg.abs() <= 90.0);
            }
        }
    }

    #[test]
    fn parallel_and_sequential_agree(mesh in arb_mesh(40, 60), stations in 2usize..30) {
        let params = ProfileParams::with_stations(stations);
        let parallel = analyze_profile(&mesh, &params).unwrap();
        let sequential = analyze_profile(&mesh, &params.clone().sequential()).unwrap();
        prop_assert_eq!(to_csv_string(&parallel.stations), to_csv_string(&sequential.stations));
    }

    #[test]
    fn span_axis_has_largest_extent(mesh in arb_mesh(20, 10)) {
        let (axis, span) = select_span_axis(&mesh).unwrap();
        let extents = mesh.extents().unwrap();
        prop_assert!(extents.iter().all(|&e| e <= extents[axis.index()]));
        prop_assert_eq!(span.length, extents[axis.index()]);
    }

    #[test]
    fn area_is_fill_factor_times_extents(points in arb_points(), fill in 0.05..1.0f64) {
        let d = describe_points(&points, fill);
        prop_assert_eq!(d.section_area, d.chord_length * d.max_thickness * fill);
        prop_assert!(d.twist_angle_deg.is_finite());
    }
}
