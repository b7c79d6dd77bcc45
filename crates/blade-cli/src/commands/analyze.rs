//! blade analyze command - extract the spanwise profile and write the table.

use std::path::Path;

use anyhow::{Context, Result};
use blade_profile::{
    Mesh, ProfileParams, SpanAxis, SpanRange, StationRecord, span_range, write_csv,
};
use colored::Colorize;
use serde::Serialize;

use crate::{Cli, OutputFormat, output};

#[derive(Serialize)]
struct AnalyzeResult {
    input: String,
    output: String,
    span_axis: String,
    span_min: f64,
    span_max: f64,
    span_length: f64,
    band_half_width: f64,
    station_count: usize,
    measured: usize,
    degenerate: usize,
    vertical_fits: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    twist_range_deg: Option<[f64; 2]>,
    stations: Vec<StationRow>,
}

#[derive(Serialize)]
struct StationRow {
    span_position: f64,
    chord_length: f64,
    max_thickness: f64,
    twist_angle_deg: f64,
    section_area: f64,
    triangles: usize,
    status: &'static str,
}

impl From<&StationRecord> for StationRow {
    fn from(r: &StationRecord) -> Self {
        Self {
            span_position: r.span_position,
            chord_length: r.chord_length,
            max_thickness: r.max_thickness,
            twist_angle_deg: r.twist_angle_deg,
            section_area: r.section_area,
            triangles: r.triangle_count,
            status: r.status.as_str(),
        }
    }
}

/// Span axis and range the run will use, known before any station is processed.
fn span_direction(mesh: &Mesh, forced: Option<SpanAxis>) -> Option<(SpanAxis, SpanRange)> {
    match forced {
        Some(axis) => span_range(mesh, axis).map(|span| (axis, span)),
        None => mesh.span_axis(),
    }
}

pub fn run(
    input: &Path,
    output_path: &Path,
    stations: usize,
    fill_factor: f64,
    axis: Option<SpanAxis>,
    sequential: bool,
    cli: &Cli,
) -> Result<()> {
    let params = ProfileParams {
        station_count: stations,
        fill_factor,
        span_axis: axis,
        parallel: !sequential,
    };
    // Reject bad parameters before touching the file system
    params.validate()?;

    let mesh =
        Mesh::load(input).with_context(|| format!("Failed to load mesh from {:?}", input))?;

    if matches!(cli.format, OutputFormat::Text) && !cli.quiet {
        if let Some((span_axis, span)) = span_direction(&mesh, axis) {
            println!(
                "  {}: {} axis, span length = {:.3}",
                "Span direction".cyan(),
                span_axis,
                span.length
            );
        }
    }

    output::info(
        &format!(
            "Analyzing {} triangles at {} stations...",
            mesh.face_count(),
            params.station_count
        ),
        cli.format,
        cli.quiet,
    );

    let profile = mesh.analyze_profile(&params)?;

    write_csv(&profile.stations, output_path)
        .with_context(|| format!("Failed to write station table to {:?}", output_path))?;

    let summary = profile.summary();
    let result = AnalyzeResult {
        input: input.display().to_string(),
        output: output_path.display().to_string(),
        span_axis: profile.axis.name().to_string(),
        span_min: profile.span.min,
        span_max: profile.span.max,
        span_length: profile.span.length,
        band_half_width: profile.band_half_width,
        station_count: profile.station_count(),
        measured: summary.measured_count,
        degenerate: summary.degenerate_count,
        vertical_fits: summary.vertical_fit_count,
        twist_range_deg: summary.twist_range.map(|(lo, hi)| [lo, hi]),
        stations: profile.stations.iter().map(StationRow::from).collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            output::print(&result, cli.format, cli.quiet);
        }
        OutputFormat::Text => {
            if !cli.quiet {
                println!();
                let header = format!(
                    "  {:>12} {:>12} {:>12} {:>10} {:>12}",
                    "Position", "Chord", "Thickness", "Twist", "Area"
                );
                println!("{}", header.as_str().bold());
                for row in &result.stations {
                    let line = format!(
                        "  {:>12.3} {:>12.3} {:>12.3} {:>10.2} {:>12.3}",
                        row.span_position,
                        row.chord_length,
                        row.max_thickness,
                        row.twist_angle_deg,
                        row.section_area
                    );
                    match row.status {
                        "measured" => println!("{}", line),
                        _ => println!("{}", line.as_str().dimmed()),
                    }
                }
                println!();

                println!(
                    "  {}: {} described ({} vertical), {} sparse",
                    "Stations".cyan(),
                    result.measured,
                    result.vertical_fits,
                    result.degenerate
                );
                if let Some((chord, at)) = summary.max_chord {
                    println!("  {}: {:.3} at {:.3}", "Max chord".cyan(), chord, at);
                }
                if let Some((thickness, at)) = summary.max_thickness {
                    println!("  {}: {:.3} at {:.3}", "Max thickness".cyan(), thickness, at);
                }
                if let Some([lo, hi]) = result.twist_range_deg {
                    println!("  {}: {:.2}° to {:.2}°", "Twist range".cyan(), lo, hi);
                }

                output::success(
                    &format!("Analysis complete. Data saved to {}", output_path.display()),
                    cli.format,
                    cli.quiet,
                );
            }
        }
    }

    Ok(())
}
