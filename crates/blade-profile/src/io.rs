//! Mesh file loading for STL and OBJ formats.
//!
//! This is the mesh adapter for the analysis: it turns a file path into a
//! validated [`Mesh`], or fails before any station is processed.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::{BladeError, BladeResult};
use crate::tracing_ext::log_io_operation;
use crate::validate::validate_mesh_data;
use crate::{Mesh, Vertex};

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshFormat {
    Stl,
    Obj,
}

impl MeshFormat {
    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .and_then(|ext| match ext.as_str() {
                "stl" => Some(MeshFormat::Stl),
                "obj" => Some(MeshFormat::Obj),
                _ => None,
            })
    }

    /// Short lowercase name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            MeshFormat::Stl => "stl",
            MeshFormat::Obj => "obj",
        }
    }
}

/// Load a mesh from file, auto-detecting format from extension.
///
/// The returned mesh is guaranteed to have at least one triangle, finite
/// coordinates and in-range face indices.
pub fn load_mesh(path: &Path) -> BladeResult<Mesh> {
    let format = MeshFormat::from_path(path).ok_or_else(|| {
        BladeError::unsupported_format(path.extension().and_then(|e| e.to_str()).map(String::from))
    })?;

    info!("Loading mesh from {:?} (format: {:?})", path, format);

    let loaded = match format {
        MeshFormat::Stl => load_stl(path),
        MeshFormat::Obj => load_obj(path),
    };
    log_io_operation("load", path, Some(format.name()), loaded.is_ok());
    let mesh = loaded?;

    if let Some((min, max)) = mesh.bounds() {
        let dims = max - min;
        info!(
            "Loaded mesh: {} vertices, {} faces",
            mesh.vertex_count(),
            mesh.face_count()
        );
        debug!(
            "Bounding box: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
            min.x, min.y, min.z, max.x, max.y, max.z
        );

        let max_dim = dims.x.max(dims.y).max(dims.z);
        if max_dim <= 0.0 {
            warn!("Mesh collapses to a single point; every station will be degenerate");
        }
    }

    validate_mesh_data(&mesh)?;

    Ok(mesh)
}

/// Load mesh from STL file (binary or ASCII).
fn load_stl(path: &Path) -> BladeResult<Mesh> {
    let file = File::open(path).map_err(|e| BladeError::io_read(path, e))?;
    let mut reader = BufReader::new(file);

    // stl_io merges identical corners into an indexed vertex table
    let stl = stl_io::read_stl(&mut reader)
        .map_err(|e| BladeError::parse_error(path, e.to_string()))?;

    debug!(
        "STL contains {} vertices, {} triangles",
        stl.vertices.len(),
        stl.faces.len()
    );

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());

    for v in &stl.vertices {
        mesh.vertices.push(Vertex::from_coords(
            f64::from(v.0[0]),
            f64::from(v.0[1]),
            f64::from(v.0[2]),
        ));
    }

    // Facets are kept as read, including ones whose corners merged
    for face in &stl.faces {
        let [a, b, c] = face.vertices;
        mesh.faces
            .push([to_index(path, a)?, to_index(path, b)?, to_index(path, c)?]);
    }

    Ok(mesh)
}

fn to_index(path: &Path, idx: usize) -> BladeResult<u32> {
    u32::try_from(idx)
        .map_err(|_| BladeError::parse_error(path, format!("vertex index {} exceeds u32", idx)))
}

/// Load mesh from OBJ file, merging all models into one mesh.
fn load_obj(path: &Path) -> BladeResult<Mesh> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| match e {
        tobj::LoadError::OpenFileFailed => BladeError::io_read(
            path,
            std::io::Error::new(std::io::ErrorKind::NotFound, e.to_string()),
        ),
        other => BladeError::parse_error(path, other.to_string()),
    })?;

    if models.is_empty() {
        return Err(BladeError::empty_mesh("OBJ file contains no faces"));
    }

    let mut mesh = Mesh::new();
    let mut vertex_offset = 0u32;

    for model in &models {
        debug!("OBJ model '{}': loading", model.name);

        let obj_mesh = &model.mesh;

        for chunk in obj_mesh.positions.chunks_exact(3) {
            mesh.vertices.push(Vertex::from_coords(
                f64::from(chunk[0]),
                f64::from(chunk[1]),
                f64::from(chunk[2]),
            ));
        }

        // Indices are per-model
        for chunk in obj_mesh.indices.chunks_exact(3) {
            mesh.faces.push([
                chunk[0] + vertex_offset,
                chunk[1] + vertex_offset,
                chunk[2] + vertex_offset,
            ]);
        }

        vertex_offset = u32::try_from(mesh.vertices.len()).map_err(|_| {
            BladeError::parse_error(path, "OBJ vertex count exceeds u32 index range")
        })?;
    }

    debug!(
        "OBJ loaded: {} vertices, {} faces from {} models",
        mesh.vertices.len(),
        mesh.faces.len(),
        models.len()
    );

    Ok(mesh)
}

/// Save mesh to STL file (binary format).
///
/// Used to produce fixture meshes; the analysis itself never writes meshes.
pub fn save_stl(mesh: &Mesh, path: &Path) -> BladeResult<()> {
    info!("Saving mesh to {:?}", path);

    let file = File::create(path).map_err(|e| BladeError::io_write(path, e))?;
    let mut writer = BufWriter::new(file);

    let triangles: Vec<stl_io::Triangle> = mesh
        .triangles()
        .map(|tri| {
            let n = tri.normal_unnormalized();
            let len = n.norm();
            let n = if len > 0.0 { n / len } else { n };
            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri
                    .vertices()
                    .map(|v| stl_io::Vertex::new([v.x as f32, v.y as f32, v.z as f32])),
            }
        })
        .collect();

    stl_io::write_stl(&mut writer, triangles.iter()).map_err(|e| BladeError::io_write(path, e))?;
    writer.flush().map_err(|e| BladeError::io_write(path, e))?;

    log_io_operation("save", path, Some("stl"), true);

    Ok(())
}
