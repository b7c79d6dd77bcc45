//! Spanwise geometry extraction for blade-like triangle meshes.
//!
//! Given a surface mesh of an elongated part (a propeller or turbine blade, a
//! wing, a fin), this crate samples a fixed number of stations along its
//! longest axis and reports, per station:
//!
//! - **chord length**: section extent along the first cross-section axis
//! - **max thickness**: section extent along the second cross-section axis
//! - **twist angle**: angle of a least-squares line through the section, degrees
//! - **section area**: `chord * thickness * fill_factor` (an estimate)
//!
//! # Method
//!
//! The span axis is the coordinate axis with the largest bounding-box extent.
//! Stations are evenly spaced along it, both ends included. A station's
//! section is made of every triangle whose centroid lies within one station
//! spacing of it; their corners are projected onto the cross-section plane.
//! Bands with fewer than three triangles produce an all-zero record.
//!
//! This is a sampling of the surface, not an exact plane cut. Neighboring
//! bands overlap, and the area is an approximation.
//!
//! # Quick Start
//!
//! ```no_run
//! use blade_profile::{Mesh, ProfileParams, write_csv};
//! use std::path::Path;
//!
//! let mesh = Mesh::load("blade.stl").unwrap();
//! let profile = mesh.analyze_profile(&ProfileParams::default()).unwrap();
//!
//! println!("Span axis: {} ({:.3})", profile.axis, profile.span.length);
//! for s in &profile.stations {
//!     println!("{:8.3}  chord {:.3}  twist {:.2}", s.span_position, s.chord_length, s.twist_angle_deg);
//! }
//!
//! write_csv(&profile.stations, Path::new("blade_station_data.csv")).unwrap();
//! ```
//!
//! # Errors
//!
//! Only preconditions fail: unreadable or unparsable files, meshes without
//! triangles, malformed indices or coordinates, and out-of-range parameters.
//! All of them are reported before any station is processed. Sparse or
//! ill-conditioned stations degrade their own record and never fail the run.
//!
//! ```
//! use blade_profile::{BladeError, Mesh, ProfileParams};
//!
//! match Mesh::new().analyze_profile(&ProfileParams::default()) {
//!     Err(BladeError::EmptyMesh { details }) => println!("nothing to analyze: {}", details),
//!     other => panic!("unexpected: {:?}", other.map(|p| p.station_count())),
//! }
//! ```
//!
//! # Supported Formats
//!
//! | Format | Extension | Notes |
//! |--------|-----------|-------|
//! | STL    | `.stl`    | Binary & ASCII |
//! | OBJ    | `.obj`    | Polygons are triangulated, all models merged |

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod types;

pub mod axis;
pub mod describe;
pub mod io;
pub mod profile;
pub mod section;
pub mod stations;
pub mod table;
pub mod tracing_ext;
pub mod validate;

pub use error::{BladeError, BladeResult, ErrorCode, ErrorLocation, RecoverySuggestion};
pub use types::{Mesh, Triangle, Vertex};

pub use axis::{SpanAxis, SpanRange, select_span_axis, span_range};
pub use describe::{
    DEFAULT_FILL_FACTOR, SectionDescriptors, VERTICAL_TWIST_DEG, describe_points, fit_slope,
};
pub use io::{MeshFormat, load_mesh, save_stl};
pub use profile::{
    BladeProfile, ProfileParams, ProfileSummary, StationRecord, StationStatus, analyze_profile,
    measure_station,
};
pub use section::{MIN_SECTION_TRIANGLES, SectionCloud, extract_section};
pub use stations::{DEFAULT_STATION_COUNT, MIN_STATION_COUNT, band_half_width, plan_stations};
pub use table::{COLUMNS, DEFAULT_OUTPUT_FILE, to_csv_string, write_csv};
pub use tracing_ext::{OperationTimer, log_io_operation, log_mesh_stats, log_station};
pub use validate::{DataValidationResult, validate_mesh_data};

// Convenience methods on Mesh
impl Mesh {
    /// Load a mesh from a file, auto-detecting format from extension.
    pub fn load(path: impl AsRef<std::path::Path>) -> BladeResult<Self> {
        io::load_mesh(path.as_ref())
    }

    /// Save the mesh as binary STL.
    pub fn save_stl(&self, path: impl AsRef<std::path::Path>) -> BladeResult<()> {
        io::save_stl(self, path.as_ref())
    }

    /// Detect the span axis and its extent.
    ///
    /// Returns None for a mesh without vertices.
    pub fn span_axis(&self) -> Option<(SpanAxis, SpanRange)> {
        axis::select_span_axis(self)
    }

    /// Extract the spanwise profile.
    ///
    /// # Example
    ///
    /// ```
    /// use blade_profile::{Mesh, ProfileParams, Vertex};
    ///
    /// let mut mesh = Mesh::new();
    /// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
    /// mesh.vertices.push(Vertex::from_coords(8.0, 0.0, 0.0));
    /// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.5));
    /// mesh.faces.push([0, 1, 2]);
    ///
    /// let profile = mesh.analyze_profile(&ProfileParams::with_stations(4)).unwrap();
    /// assert_eq!(profile.stations.len(), 4);
    /// ```
    pub fn analyze_profile(&self, params: &ProfileParams) -> BladeResult<BladeProfile> {
        profile::analyze_profile(self, params)
    }
}
