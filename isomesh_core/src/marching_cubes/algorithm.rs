//! Marching Cubes cell classification and triangulation.
//!
//! One cell goes through three steps: its 8 corners are sampled ([`sample_cell`]),
//! the samples are packed into a [`CubeIndex`] ([`classify`]), and the table entry
//! for that index is turned into triangles by interpolating along the named edges
//! ([`triangulate`]).

use crate::error::Result;
use crate::traits::LatticeSource;
use crate::types::{CubeIndex, LatticeCoord, Point3};

#[cfg(any(feature = "std", feature = "alloc"))]
use crate::mesh::Mesh;

use super::table::TriangulationTable;
use super::tables::CORNER_OFFSETS;

/// Most triangles any configuration produces.
pub const MAX_TRIANGLES_PER_CELL: usize = 5;

/// Corner positions and densities of one cell, in corner order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CellSamples {
    /// World-space corner positions.
    pub positions: [Point3; 8],
    /// Density at each corner.
    pub values: [f32; 8],
}

impl CellSamples {
    /// Samples of an axis-aligned cube with minimum corner `min` and edge `size`.
    pub fn from_cube(min: Point3, size: f32, values: [f32; 8]) -> Self {
        let positions = CORNER_OFFSETS.map(|(dx, dy, dz)| {
            Point3::new(
                min.x + dx as f32 * size,
                min.y + dy as f32 * size,
                min.z + dz as f32 * size,
            )
        });
        Self { positions, values }
    }
}

/// Interpolate the isosurface crossing along an edge.
///
/// Returns `p0 + t * (p1 - p0)` with `t = (iso_value - v0) / (v1 - v0)`. For an
/// isovalue of zero this is `t = v0 / (v0 - v1)`. Equal densities have no defined
/// crossing; the midpoint is returned instead of letting a NaN reach the mesh.
///
/// # Example
/// ```
/// use isomesh_core::marching_cubes::interpolate_vertex;
/// use isomesh_core::Point3;
///
/// let p = interpolate_vertex(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0), -2.0, 3.0, 0.0);
/// assert!((p.x - 0.4).abs() < 1e-6);
/// ```
#[inline]
pub fn interpolate_vertex(p0: Point3, p1: Point3, v0: f32, v1: f32, iso_value: f32) -> Point3 {
    let denom = v1 - v0;
    if denom == 0.0 {
        return p0.lerp(p1, 0.5);
    }
    p0.lerp(p1, (iso_value - v0) / denom)
}

/// Pack the inside/outside state of the 8 corners into a cube index.
///
/// Bit `i` is set when `corner_values[i] < iso_value`. A value equal to the
/// isovalue counts as outside.
#[inline]
pub fn classify(corner_values: &[f32; 8], iso_value: f32) -> CubeIndex {
    let mut index = 0u8;
    for (i, &val) in corner_values.iter().enumerate() {
        if val < iso_value {
            index |= 1 << i;
        }
    }
    CubeIndex(index)
}

/// Sample the 8 corners of the cell whose minimum corner is `cell`.
///
/// # Errors
/// Propagates `CoordOutOfBounds` from the source when the cell does not fit
/// inside the lattice.
pub fn sample_cell<S: LatticeSource + ?Sized>(source: &S, cell: LatticeCoord) -> Result<CellSamples> {
    let mut samples = CellSamples::default();
    for (i, &offset) in CORNER_OFFSETS.iter().enumerate() {
        let corner = cell.offset(offset);
        samples.values[i] = source.sample(corner)?;
        samples.positions[i] = source.position(corner);
    }
    Ok(samples)
}

/// Emit every triangle of `cube` into `emit`, in table order.
///
/// Each triangle's vertices follow the table's edge order exactly; that order
/// fixes the facing of the triangle.
#[inline]
pub fn for_each_triangle<F>(
    table: &TriangulationTable,
    cube: CubeIndex,
    samples: &CellSamples,
    iso_value: f32,
    mut emit: F,
) where
    F: FnMut([Point3; 3]),
{
    let edge_vertex = |edge: usize| {
        let (a, b) = table.edge_corners(edge);
        interpolate_vertex(
            samples.positions[a],
            samples.positions[b],
            samples.values[a],
            samples.values[b],
            iso_value,
        )
    };

    for [e0, e1, e2] in table.triangles(cube) {
        emit([edge_vertex(e0), edge_vertex(e1), edge_vertex(e2)]);
    }
}

/// Append the triangles of one classified cell to `mesh`.
///
/// Returns the number of triangles appended.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn triangulate(
    table: &TriangulationTable,
    cube: CubeIndex,
    samples: &CellSamples,
    iso_value: f32,
    mesh: &mut Mesh,
) -> usize {
    let before = mesh.triangle_count();
    for_each_triangle(table, cube, samples, iso_value, |tri| {
        mesh.push_triangle(tri);
    });
    mesh.triangle_count() - before
}

/// Sample, classify and triangulate one cell into `mesh`.
///
/// Returns the number of triangles appended.
///
/// # Errors
/// `CoordOutOfBounds` when the cell does not fit inside the source's lattice.
#[cfg(any(feature = "std", feature = "alloc"))]
pub fn process_cell<S: LatticeSource + ?Sized>(
    source: &S,
    cell: LatticeCoord,
    iso_value: f32,
    table: &TriangulationTable,
    mesh: &mut Mesh,
) -> Result<usize> {
    let samples = sample_cell(source, cell)?;
    let cube = classify(&samples.values, iso_value);
    Ok(triangulate(table, cube, &samples, iso_value, mesh))
}

/// Process a single cell without dynamic allocation.
///
/// Returns a fixed array that holds up to [`MAX_TRIANGLES_PER_CELL`] triangles
/// and the number of valid entries.
///
/// # Errors
/// `CoordOutOfBounds` when the cell does not fit inside the source's lattice.
pub fn process_cell_no_alloc<S: LatticeSource + ?Sized>(
    source: &S,
    cell: LatticeCoord,
    iso_value: f32,
    table: &TriangulationTable,
) -> Result<([[Point3; 3]; MAX_TRIANGLES_PER_CELL], usize)> {
    let samples = sample_cell(source, cell)?;
    let cube = classify(&samples.values, iso_value);

    let mut triangles = [[Point3::default(); 3]; MAX_TRIANGLES_PER_CELL];
    let mut count = 0;
    for_each_triangle(table, cube, &samples, iso_value, |tri| {
        if count < MAX_TRIANGLES_PER_CELL {
            triangles[count] = tri;
            count += 1;
        }
    });

    Ok((triangles, count))
}
