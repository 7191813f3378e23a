//! Per-vertex normals for extracted meshes.
//!
//! Extraction emits positions only. Triangles wind clockwise when seen from
//! outside the solid, so the right-hand face normal points inward; the normals
//! computed here are flipped to point from inside to outside.

use isomesh_core::{Mesh, Point3};

/// Compute one unit normal per vertex.
///
/// Each triangle adds its area-weighted face normal to its three vertices, and
/// the sums are normalised. Vertices are not shared between triangles, so each
/// normal equals the face normal of the triangle that owns the vertex. Degenerate
/// triangles contribute nothing and leave a zero normal behind.
pub fn compute_vertex_normals(mesh: &Mesh) -> Vec<Point3> {
    let mut normals = vec![Point3::default(); mesh.vertex_count()];

    for &[a, b, c] in &mesh.triangles {
        let (pa, pb, pc) = (
            mesh.vertices[a as usize],
            mesh.vertices[b as usize],
            mesh.vertices[c as usize],
        );
        // Length is twice the triangle area.
        let outward = -(pb - pa).cross(pc - pa);
        for i in [a, b, c] {
            normals[i as usize] += outward;
        }
    }

    for n in &mut normals {
        *n = n.normalize();
    }
    normals
}
