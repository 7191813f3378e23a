//! Indexed triangle mesh produced by extraction.

use crate::alloc_prelude::Vec;
use crate::error::{IsoCoreError, Result};
use crate::types::Point3;

/// Vertex positions plus one index triple per triangle.
///
/// Vertices are never shared between triangles: every call to
/// [`Mesh::push_triangle`] appends three fresh vertices and the triple
/// `(n, n + 1, n + 2)`, where `n` is the vertex count beforehand. Every index
/// therefore refers to a vertex that already exists when it is recorded.
///
/// Indices are `u32`, so a mesh holds at most `u32::MAX` vertices. Debug builds
/// panic when an append would cross that limit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Vertex positions, in emission order.
    pub vertices: Vec<Point3>,
    /// Triangle vertex indices, in emission order.
    pub triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// An empty mesh.
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// An empty mesh with room for `triangles` triangles.
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangles * 3),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Append one triangle and return its position in the index buffer.
    #[inline]
    pub fn push_triangle(&mut self, [a, b, c]: [Point3; 3]) -> usize {
        let n = index_base(self.vertices.len(), 3);
        self.vertices.extend_from_slice(&[a, b, c]);
        self.triangles.push([n, n + 1, n + 2]);
        self.triangles.len() - 1
    }

    /// Append every triangle of `other`, rebasing its indices.
    ///
    /// Concatenating per-worker meshes in a fixed order yields the same buffers
    /// as a single sequential run in that order.
    pub fn append(&mut self, other: Mesh) {
        let base = index_base(self.vertices.len(), other.vertices.len());
        self.vertices.extend(other.vertices);
        self.triangles.extend(
            other
                .triangles
                .into_iter()
                .map(|[a, b, c]| [a + base, b + base, c + base]),
        );
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// True when no triangle has been emitted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Positions of triangle `i`.
    #[inline]
    pub fn triangle(&self, i: usize) -> [Point3; 3] {
        let [a, b, c] = self.triangles[i];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Iterate over triangle positions in emission order.
    pub fn iter_triangles(&self) -> impl Iterator<Item = [Point3; 3]> + '_ {
        (0..self.triangles.len()).map(move |i| self.triangle(i))
    }

    /// Check that every index refers to an existing vertex.
    ///
    /// # Errors
    /// `DanglingIndex` for the first offending triangle.
    pub fn validate(&self) -> Result<()> {
        let vertex_count = self.vertices.len();
        for (triangle, tri) in self.triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(IsoCoreError::DanglingIndex {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        Ok(())
    }
}

/// First index of `count` vertices appended after `len` existing ones.
#[inline]
fn index_base(len: usize, count: usize) -> u32 {
    debug_assert!(
        len.checked_add(count).is_some_and(|end| end <= u32::MAX as usize),
        "mesh exceeds the u32 index range: {} + {} vertices",
        len,
        count
    );
    len as u32
}
