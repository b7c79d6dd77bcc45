//! Error types for blade profile extraction with rich diagnostics.
//!
//! Every error carries:
//! - A machine-readable code for programmatic handling
//! - Context about where it happened (file, face, vertex, parameter)
//! - A recovery suggestion
//! - Terminal display via miette
//!
//! # Error Codes
//!
//! Codes use the format `BLADE-XXXX`:
//! - `BLADE-1xxx`: I/O errors (reading meshes, writing tables)
//! - `BLADE-2xxx`: Mesh validation errors (empty surface, bad indices, bad coordinates)
//! - `BLADE-3xxx`: Parameter errors (station count, fill factor)
//! - `BLADE-4xxx`: Format errors
//!
//! All of these are precondition failures: they are raised before any station
//! is processed. Sparse or ill-conditioned stations are not errors; they
//! degrade the record of that one station instead.
//!
//! # Example
//!
//! ```
//! use blade_profile::{BladeError, ErrorCode};
//!
//! let err = BladeError::invalid_param("station_count", "1", "at least 2 stations are required");
//! assert_eq!(err.code(), ErrorCode::InvalidParams);
//! assert_eq!(err.code().as_str(), "BLADE-3001");
//! ```

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for blade profile operations.
pub type BladeResult<T> = Result<T, BladeError>;

/// Machine-readable error codes.
///
/// Codes follow the pattern `BLADE-XXXX` where:
/// - 1xxx = I/O errors
/// - 2xxx = Mesh validation errors
/// - 3xxx = Parameter errors
/// - 4xxx = Format errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // I/O errors (1xxx)
    /// BLADE-1001: Failed to read file
    IoRead = 1001,
    /// BLADE-1002: Failed to write file
    IoWrite = 1002,
    /// BLADE-1003: Failed to parse file format
    ParseError = 1003,

    // Validation errors (2xxx)
    /// BLADE-2001: Face references invalid vertex index
    InvalidVertexIndex = 2001,
    /// BLADE-2002: Vertex has NaN or Infinity coordinate
    InvalidCoordinate = 2002,
    /// BLADE-2003: Mesh has no vertices or faces
    EmptyMesh = 2003,

    // Parameter errors (3xxx)
    /// BLADE-3001: Invalid analysis parameter
    InvalidParams = 3001,

    // Format errors (4xxx)
    /// BLADE-4001: Unsupported file format
    UnsupportedFormat = 4001,
}

impl ErrorCode {
    /// Returns the error code as a string in the format `BLADE-XXXX`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::IoRead => "BLADE-1001",
            ErrorCode::IoWrite => "BLADE-1002",
            ErrorCode::ParseError => "BLADE-1003",
            ErrorCode::InvalidVertexIndex => "BLADE-2001",
            ErrorCode::InvalidCoordinate => "BLADE-2002",
            ErrorCode::EmptyMesh => "BLADE-2003",
            ErrorCode::InvalidParams => "BLADE-3001",
            ErrorCode::UnsupportedFormat => "BLADE-4001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recovery suggestions for blade profile errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecoverySuggestion {
    /// Re-export the file from the original software with different settings.
    ReexportFile { format: Option<String> },
    /// Use a different file format.
    UseDifferentFormat { suggested: Vec<String> },
    /// Check the input or output location.
    CheckSourceMesh { checks: Vec<String> },
    /// Adjust parameters for the analysis.
    AdjustParameters { parameters: Vec<(String, String)> },
}

impl std::fmt::Display for RecoverySuggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecoverySuggestion::ReexportFile { format } => {
                if let Some(fmt) = format {
                    write!(
                        f,
                        "Try re-exporting the mesh as {} from the original software",
                        fmt
                    )
                } else {
                    write!(f, "Try re-exporting the mesh from the original software")
                }
            }
            RecoverySuggestion::UseDifferentFormat { suggested } => {
                write!(f, "Try using a different format: {}", suggested.join(", "))
            }
            RecoverySuggestion::CheckSourceMesh { checks } => {
                write!(f, "Check: {}", checks.join(", "))
            }
            RecoverySuggestion::AdjustParameters { parameters } => {
                let params: Vec<String> = parameters
                    .iter()
                    .map(|(k, v)| format!("{} = {}", k, v))
                    .collect();
                write!(f, "Try adjusting: {}", params.join(", "))
            }
        }
    }
}

/// Location information for errors.
#[derive(Debug, Clone)]
pub enum ErrorLocation {
    /// Error at a specific vertex.
    Vertex { index: usize },
    /// Error at a specific face.
    Face { index: usize },
    /// Error in a file.
    File { path: PathBuf },
    /// Error in a named analysis parameter.
    Parameter { name: String },
}

impl std::fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorLocation::Vertex { index } => write!(f, "vertex {}", index),
            ErrorLocation::Face { index } => write!(f, "face {}", index),
            ErrorLocation::File { path } => write!(f, "{}", path.display()),
            ErrorLocation::Parameter { name } => write!(f, "parameter `{}`", name),
        }
    }
}

/// Errors that can occur while loading a mesh or extracting its profile.
#[derive(Debug, Error, Diagnostic)]
pub enum BladeError {
    /// Error reading from a file.
    #[error("failed to read mesh from {path}")]
    #[diagnostic(
        code(blade::io::read),
        help("Check that the file exists and is readable. Try: ls -la {}", path.display())
    )]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error writing to a file.
    #[error("failed to write {path}")]
    #[diagnostic(
        code(blade::io::write),
        help("Check that the directory exists and is writable")
    )]
    IoWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing mesh file format.
    #[error("failed to parse mesh from {path}: {details}")]
    #[diagnostic(
        code(blade::parse::error),
        help(
            "The file may be corrupted or in an unsupported format variant. Try re-exporting from the original software."
        )
    )]
    ParseError { path: PathBuf, details: String },

    /// Unsupported file format.
    #[error("unsupported mesh format: {extension:?}")]
    #[diagnostic(code(blade::format::unsupported), help("Supported formats: STL, OBJ"))]
    UnsupportedFormat { extension: Option<String> },

    /// Empty mesh (no vertices or faces).
    #[error("mesh is empty: {details}")]
    #[diagnostic(
        code(blade::validation::empty),
        help(
            "The mesh must have at least one vertex and one triangle. Check that the file was exported correctly."
        )
    )]
    EmptyMesh { details: String },

    /// Invalid vertex index in face data.
    #[error(
        "invalid vertex index: face {face_index} references vertex {vertex_index}, but mesh only has {vertex_count} vertices"
    )]
    #[diagnostic(
        code(blade::validation::vertex_index),
        help("Check the mesh export settings; the face table points past the vertex table.")
    )]
    InvalidVertexIndex {
        face_index: usize,
        vertex_index: u32,
        vertex_count: usize,
    },

    /// Invalid coordinate value (NaN or Infinity).
    #[error("invalid coordinate at vertex {vertex_index}: {coordinate} is {value}")]
    #[diagnostic(
        code(blade::validation::coordinate),
        help(
            "Check for numerical issues in the source data. This often happens with very small or very large values."
        )
    )]
    InvalidCoordinate {
        vertex_index: usize,
        coordinate: &'static str,
        value: f64,
    },

    /// Invalid analysis parameter.
    #[error("invalid parameter `{param}` = {value}: {details}")]
    #[diagnostic(
        code(blade::params::invalid),
        help("station_count must be at least 2; fill_factor must be in (0, 1]")
    )]
    InvalidParams {
        param: String,
        value: String,
        details: String,
    },
}

impl BladeError {
    /// Returns the machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        match self {
            BladeError::IoRead { .. } => ErrorCode::IoRead,
            BladeError::IoWrite { .. } => ErrorCode::IoWrite,
            BladeError::ParseError { .. } => ErrorCode::ParseError,
            BladeError::UnsupportedFormat { .. } => ErrorCode::UnsupportedFormat,
            BladeError::EmptyMesh { .. } => ErrorCode::EmptyMesh,
            BladeError::InvalidVertexIndex { .. } => ErrorCode::InvalidVertexIndex,
            BladeError::InvalidCoordinate { .. } => ErrorCode::InvalidCoordinate,
            BladeError::InvalidParams { .. } => ErrorCode::InvalidParams,
        }
    }

    /// Returns a recovery suggestion for this error.
    pub fn recovery_suggestion(&self) -> RecoverySuggestion {
        match self {
            BladeError::IoRead { .. } => RecoverySuggestion::CheckSourceMesh {
                checks: vec!["file exists".into(), "file permissions".into()],
            },
            BladeError::IoWrite { .. } => RecoverySuggestion::CheckSourceMesh {
                checks: vec!["directory exists".into(), "write permissions".into()],
            },
            BladeError::ParseError { .. } => RecoverySuggestion::ReexportFile {
                format: Some("binary STL or OBJ".into()),
            },
            BladeError::UnsupportedFormat { .. } => RecoverySuggestion::UseDifferentFormat {
                suggested: vec!["STL".into(), "OBJ".into()],
            },
            BladeError::EmptyMesh { .. } => RecoverySuggestion::CheckSourceMesh {
                checks: vec!["mesh has geometry".into(), "correct export settings".into()],
            },
            BladeError::InvalidVertexIndex { .. } => RecoverySuggestion::ReexportFile {
                format: None,
            },
            BladeError::InvalidCoordinate { .. } => RecoverySuggestion::CheckSourceMesh {
                checks: vec!["coordinate values".into(), "export precision".into()],
            },
            BladeError::InvalidParams { param, .. } => {
                let hint = match param.as_str() {
                    "station_count" => "2 or more",
                    "fill_factor" => "a value in (0, 1], default 0.6",
                    _ => "a valid value",
                };
                RecoverySuggestion::AdjustParameters {
                    parameters: vec![(param.clone(), hint.into())],
                }
            }
        }
    }

    /// Returns location information if available.
    pub fn location(&self) -> Option<ErrorLocation> {
        match self {
            BladeError::InvalidVertexIndex { face_index, .. } => {
                Some(ErrorLocation::Face { index: *face_index })
            }
            BladeError::InvalidCoordinate { vertex_index, .. } => Some(ErrorLocation::Vertex {
                index: *vertex_index,
            }),
            BladeError::ParseError { path, .. }
            | BladeError::IoRead { path, .. }
            | BladeError::IoWrite { path, .. } => Some(ErrorLocation::File { path: path.clone() }),
            BladeError::InvalidParams { param, .. } => Some(ErrorLocation::Parameter {
                name: param.clone(),
            }),
            _ => None,
        }
    }

    /// Whether this error was caused by the caller's configuration rather than the input mesh.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, BladeError::InvalidParams { .. })
    }

    // Constructor helpers for common error patterns

    /// Create an IoRead error.
    pub fn io_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BladeError::IoRead {
            path: path.into(),
            source,
        }
    }

    /// Create an IoWrite error.
    pub fn io_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BladeError::IoWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a ParseError.
    pub fn parse_error(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        BladeError::ParseError {
            path: path.into(),
            details: details.into(),
        }
    }

    /// Create an EmptyMesh error.
    pub fn empty_mesh(details: impl Into<String>) -> Self {
        BladeError::EmptyMesh {
            details: details.into(),
        }
    }

    /// Create an InvalidVertexIndex error.
    pub fn invalid_vertex_index(face_index: usize, vertex_index: u32, vertex_count: usize) -> Self {
        BladeError::InvalidVertexIndex {
            face_index,
            vertex_index,
            vertex_count,
        }
    }

    /// Create an InvalidCoordinate error.
    pub fn invalid_coordinate(vertex_index: usize, coordinate: &'static str, value: f64) -> Self {
        BladeError::InvalidCoordinate {
            vertex_index,
            coordinate,
            value,
        }
    }

    /// Create an InvalidParams error for a named parameter.
    pub fn invalid_param(
        param: impl Into<String>,
        value: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        BladeError::InvalidParams {
            param: param.into(),
            value: value.into(),
            details: details.into(),
        }
    }

    /// Create an UnsupportedFormat error.
    pub fn unsupported_format(extension: Option<String>) -> Self {
        BladeError::UnsupportedFormat { extension }
    }
}
