//! Station table export.
//!
//! Values are written with Rust's shortest round-trip float formatting, so
//! the same records always produce the same bytes and parse back exactly.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{BladeError, BladeResult};
use crate::profile::StationRecord;
use crate::tracing_ext::log_io_operation;

/// Table columns, in order.
pub const COLUMNS: [&str; 5] = [
    "Span_Position",
    "Chord_Length",
    "Max_Thickness",
    "Twist_Angle_deg",
    "Section_Area",
];

/// Default output file name used by the command line tool.
pub const DEFAULT_OUTPUT_FILE: &str = "blade_station_data.csv";

/// Append one formatted row, newline included.
fn push_row(out: &mut String, record: &StationRecord) {
    let [position, chord, thickness, twist, area] = record.values();
    out.push_str(&format!("{},{},{},{},{}\n", position, chord, thickness, twist, area));
}

fn write_rows<W: Write>(writer: &mut W, records: &[StationRecord]) -> std::io::Result<()> {
    writeln!(writer, "{}", COLUMNS.join(","))?;
    let mut row = String::new();
    for record in records {
        row.clear();
        push_row(&mut row, record);
        writer.write_all(row.as_bytes())?;
    }
    Ok(())
}

/// Render the table as a string.
pub fn to_csv_string(records: &[StationRecord]) -> String {
    let mut out = String::new();
    out.push_str(&COLUMNS.join(","));
    out.push('\n');
    for record in records {
        push_row(&mut out, record);
    }
    out
}

/// Write the table to `path`, replacing any existing file.
///
/// # Errors
///
/// [`BladeError::IoWrite`] if the file cannot be created or written.
pub fn write_csv(records: &[StationRecord], path: &Path) -> BladeResult<()> {
    let result = File::create(path).and_then(|file| {
        let mut writer = BufWriter::new(file);
        write_rows(&mut writer, records)?;
        writer.flush()
    });

    log_io_operation("write_csv", path, Some("CSV"), result.is_ok());
    result.map_err(|e| BladeError::io_write(path, e))
}
