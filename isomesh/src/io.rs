//! Wavefront OBJ export.
//!
//! Vertices are written in mesh order and faces use 1-based indices, so vertex
//! `i` of the mesh is OBJ vertex `i + 1`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use isomesh_core::{Mesh, Point3};

use crate::error::{IsoMeshError, Result};

/// Write a mesh as OBJ text.
///
/// # Example
///
/// ```
/// use isomesh::{write_obj, Mesh, Point3};
///
/// let mut mesh = Mesh::new();
/// mesh.push_triangle([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
///
/// let mut out = Vec::new();
/// write_obj(&mesh, &mut out)?;
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("f 1 2 3"));
/// # Ok::<(), isomesh::IsoMeshError>(())
/// ```
pub fn write_obj<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    write_header(mesh, writer)?;
    write_vertices(mesh, writer)?;

    writeln!(writer)?;
    for [a, b, c] in &mesh.triangles {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}

/// Write a mesh with one normal per vertex (`vn` lines and `f v//vn` faces).
///
/// # Errors
/// `InvalidConfig` if `normals` does not hold one entry per vertex.
pub fn write_obj_with_normals<W: Write>(
    mesh: &Mesh,
    normals: &[Point3],
    writer: &mut W,
) -> Result<()> {
    if normals.len() != mesh.vertex_count() {
        return Err(IsoMeshError::invalid_config(format!(
            "expected {} normals, got {}",
            mesh.vertex_count(),
            normals.len()
        )));
    }

    write_header(mesh, writer)?;
    write_vertices(mesh, writer)?;
    for n in normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }

    writeln!(writer)?;
    for [a, b, c] in &mesh.triangles {
        let (a, b, c) = (a + 1, b + 1, c + 1);
        writeln!(writer, "f {a}//{a} {b}//{b} {c}//{c}")?;
    }
    Ok(())
}

/// Export a mesh to an OBJ string.
pub fn mesh_to_obj(mesh: &Mesh) -> Result<String> {
    let mut buffer = Vec::new();
    write_obj(mesh, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Save a mesh to an OBJ file, creating or truncating it.
pub fn save_obj<P: AsRef<Path>>(mesh: &Mesh, path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;

    log::info!(
        "Saved {} triangles to {}",
        mesh.triangle_count(),
        path.display()
    );
    Ok(())
}

fn write_header<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    writeln!(writer, "# isomesh generated mesh")?;
    writeln!(
        writer,
        "# {} triangles, {} vertices",
        mesh.triangle_count(),
        mesh.vertex_count()
    )?;
    writeln!(writer)?;
    Ok(())
}

fn write_vertices<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    Ok(())
}
