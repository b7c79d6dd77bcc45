//! Mesh data checks run before any profile extraction.
//!
//! These only guard what the analysis itself relies on: every face index
//! resolves to a vertex and every coordinate is finite. Topology (holes,
//! winding, non-manifold edges) is deliberately not inspected.

use tracing::debug;

use crate::Mesh;
use crate::error::{BladeError, BladeResult};

/// Summary of a successful data check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataValidationResult {
    /// Number of vertices checked.
    pub vertex_count: usize,
    /// Number of faces checked.
    pub face_count: usize,
}

/// Check that a mesh can be analyzed.
///
/// Fails with:
/// - [`BladeError::EmptyMesh`] if there are no vertices or no faces
/// - [`BladeError::InvalidCoordinate`] on the first NaN or infinite coordinate
/// - [`BladeError::InvalidVertexIndex`] on the first out-of-range face index
pub fn validate_mesh_data(mesh: &Mesh) -> BladeResult<DataValidationResult> {
    if mesh.vertices.is_empty() {
        return Err(BladeError::empty_mesh("mesh has no vertices"));
    }
    if mesh.faces.is_empty() {
        return Err(BladeError::empty_mesh("mesh has no triangles"));
    }

    for (vertex_idx, vertex) in mesh.vertices.iter().enumerate() {
        let coords = [
            ("x", vertex.position.x),
            ("y", vertex.position.y),
            ("z", vertex.position.z),
        ];
        for (coord_name, value) in coords {
            if !value.is_finite() {
                return Err(BladeError::invalid_coordinate(vertex_idx, coord_name, value));
            }
        }
    }

    let vertex_count = mesh.vertices.len();
    for (face_idx, face) in mesh.faces.iter().enumerate() {
        if let Some(&bad) = face.iter().find(|&&idx| idx as usize >= vertex_count) {
            return Err(BladeError::invalid_vertex_index(face_idx, bad, vertex_count));
        }
    }

    debug!(
        vertices = vertex_count,
        faces = mesh.faces.len(),
        "Mesh data validation passed"
    );

    Ok(DataValidationResult {
        vertex_count,
        face_count: mesh.faces.len(),
    })
}
