//! Marching Cubes surface extraction.
//!
//! - [`CORNER_OFFSETS`], [`EDGE_CORNERS`], [`TRI_TABLE`]: corner numbering, edge mapping and the 256-entry triangle table
//! - [`TriangulationTable`]: the validated pairing of edge mapping and triangle table
//! - Cell functions: sampling, classification and triangulation of a single cell
//!
//! # Example
//!
//! ```
//! use isomesh_core::marching_cubes::{process_cell, TriangulationTable};
//! use isomesh_core::{FieldLattice, LatticeCoord, Mesh, Point3};
//!
//! let field = |p: Point3| p.y - 0.5;
//! let lattice = FieldLattice::new(&field, Point3::default(), 1.0, [1, 1, 1]);
//!
//! let mut mesh = Mesh::new();
//! let n = process_cell(&lattice, LatticeCoord::new(0, 0, 0), 0.0, TriangulationTable::standard(), &mut mesh)?;
//! assert_eq!(n, 2);
//! # Ok::<(), isomesh_core::IsoCoreError>(())
//! ```

mod algorithm;
mod table;
mod tables;

pub use algorithm::{
    classify, for_each_triangle, interpolate_vertex, process_cell_no_alloc, sample_cell,
    CellSamples, MAX_TRIANGLES_PER_CELL,
};
pub use table::{TriangulationTable, TERMINATOR};
pub use tables::{CORNER_OFFSETS, EDGE_CORNERS, TRI_TABLE};

#[cfg(any(feature = "std", feature = "alloc"))]
pub use algorithm::{process_cell, triangulate};
