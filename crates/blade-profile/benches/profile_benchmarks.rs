//! Benchmarks for blade-profile operations.
//!
//! Run with: cargo bench -p blade-profile
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p blade-profile -- --save-baseline main
//! 2. After changes: cargo bench -p blade-profile -- --baseline main

use std::f64::consts::TAU;

use blade_profile::{Mesh, ProfileParams, SpanAxis, Vertex};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Twisted, tapered blade along +Z with elliptical sections.
///
/// `rings * around * 2` side triangles; chord tapers from 12 to 6 and the
/// twist runs from 0 to 35 degrees.
fn create_blade(rings: usize, around: usize) -> Mesh {
    let mut mesh = Mesh::new();
    let length = 300.0;

    for r in 0..rings {
        let t = r as f64 / (rings - 1) as f64;
        let half_chord = 6.0 - 3.0 * t;
        let half_thickness = 0.12 * half_chord;
        let (sin, cos) = (35.0 * t).to_radians().sin_cos();

        for k in 0..around {
            let a = TAU * k as f64 / around as f64;
            let (x, y) = (half_chord * a.cos(), half_thickness * a.sin());
            mesh.vertices
                .push(Vertex::from_coords(x * cos - y * sin, x * sin + y * cos, length * t));
        }
    }

    let around = around as u32;
    for r in 0..(rings - 1) as u32 {
        let a = r * around;
        let b = a + around;
        for k in 0..around {
            let k1 = (k + 1) % around;
            mesh.faces.push([a + k, a + k1, b + k1]);
            mesh.faces.push([a + k, b + k1, b + k]);
        }
    }

    mesh
}

// =============================================================================
// Profile Benchmarks
// =============================================================================

fn bench_profile(c: &mut Criterion) {
    let mut group = c.benchmark_group("Profile");

    let test_cases = [
        ("blade_2k_tri", create_blade(33, 32)),
        ("blade_16k_tri", create_blade(129, 64)),
        ("blade_130k_tri", create_blade(513, 128)),
    ];

    for (name, mesh) in &test_cases {
        group.throughput(Throughput::Elements(mesh.faces.len() as u64));

        group.bench_with_input(BenchmarkId::new("parallel_12", name), mesh, |b, mesh| {
            let params = ProfileParams::default();
            b.iter(|| blade_profile::analyze_profile(black_box(mesh), black_box(&params)))
        });

        group.bench_with_input(BenchmarkId::new("sequential_12", name), mesh, |b, mesh| {
            let params = ProfileParams::default().sequential();
            b.iter(|| blade_profile::analyze_profile(black_box(mesh), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_station_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("StationCount");
    group.sample_size(20);

    let mesh = create_blade(257, 64);

    for stations in [12usize, 48, 200] {
        group.bench_with_input(BenchmarkId::new("analyze", stations), &stations, |b, &n| {
            let params = ProfileParams::with_stations(n);
            b.iter(|| blade_profile::analyze_profile(black_box(&mesh), black_box(&params)))
        });
    }

    group.finish();
}

fn bench_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("Section");

    let mesh = create_blade(129, 64);
    let Some((axis, span)) = blade_profile::select_span_axis(&mesh) else {
        return;
    };
    let half_width = span.length / 12.0;
    let station = span.min + span.length / 2.0;

    group.bench_function("select_span_axis", |b| {
        b.iter(|| blade_profile::select_span_axis(black_box(&mesh)))
    });

    group.bench_function("extract_section", |b| {
        b.iter(|| {
            blade_profile::extract_section(black_box(&mesh), axis, station, half_width)
        })
    });

    let cloud = blade_profile::extract_section(&mesh, SpanAxis::Z, station, half_width);
    group.bench_function("describe_points", |b| {
        b.iter(|| blade_profile::describe_points(black_box(&cloud.points), 0.6))
    });

    group.finish();
}

// =============================================================================
// I/O Benchmarks
// =============================================================================

fn bench_io(c: &mut Criterion) {
    let mut group = c.benchmark_group("IO");

    let mesh = create_blade(129, 64);
    let temp_dir = std::env::temp_dir();
    let stl_path = temp_dir.join("bench_blade.stl");
    let csv_path = temp_dir.join("bench_blade_stations.csv");

    let _ = mesh.save_stl(&stl_path);
    let profile = blade_profile::analyze_profile(&mesh, &ProfileParams::with_stations(100));

    group.throughput(Throughput::Elements(mesh.faces.len() as u64));

    group.bench_function("load_stl", |b| {
        b.iter(|| blade_profile::load_mesh(black_box(&stl_path)))
    });

    if let Ok(profile) = &profile {
        group.bench_function("write_csv_100", |b| {
            b.iter(|| blade_profile::write_csv(black_box(&profile.stations), &csv_path))
        });
    }

    group.finish();

    // Cleanup
    let _ = std::fs::remove_file(&stl_path);
    let _ = std::fs::remove_file(&csv_path);
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(
    benches,
    bench_profile,
    bench_station_count,
    bench_section,
    bench_io,
);

criterion_main!(benches);
