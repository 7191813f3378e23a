//! # isomesh_core
//!
//! Pure Marching Cubes algorithms for extracting triangle meshes from scalar fields.
//!
//! This crate holds the math only: corner classification, edge interpolation and
//! table-driven triangulation. Traversal of whole volumes, parallelism and export
//! live in the `isomesh` crate.
//!
//! ## Features
//!
//! - **no_std compatible**: Works in embedded environments with the `alloc` feature
//! - **Validated tables**: The built-in triangle table is checked at compile time
//! - **Pluggable sources**: Any [`ScalarField`] or [`LatticeSource`] can be meshed
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables standard library support
//! - `alloc`: Enables heap allocation ([`Mesh`], [`marching_cubes::process_cell`]) without full std
//!
//! ## Modules
//!
//! - [`types`]: Core data types (Point3, LatticeCoord, CubeIndex)
//! - [`traits`]: Density source traits (ScalarField, LatticeSource)
//! - [`coords`]: Lattice geometry and the field sampler
//! - [`marching_cubes`]: Tables, classification and triangulation
//! - [`mesh`]: Indexed triangle output
//! - [`error`]: Error types
//!
//! ## Usage
//!
//! ```
//! use isomesh_core::prelude::*;
//!
//! let sphere = |p: Point3| (p - Point3::splat(1.0)).length() - 0.6;
//! let lattice = FieldLattice::new(&sphere, Point3::default(), 0.25, [8, 8, 8]);
//! let table = TriangulationTable::standard();
//!
//! let mut mesh = Mesh::new();
//! for z in 0..8 {
//!     for y in 0..8 {
//!         for x in 0..8 {
//!             process_cell(&lattice, LatticeCoord::new(x, y, z), 0.0, table, &mut mesh)?;
//!         }
//!     }
//! }
//! assert!(mesh.triangle_count() > 0);
//! # Ok::<(), IsoCoreError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

// Internal alloc prelude for conditional compilation
#[cfg(feature = "std")]
mod alloc_prelude {
    pub use std::vec::Vec;
}

#[cfg(all(feature = "alloc", not(feature = "std")))]
mod alloc_prelude {
    pub use alloc::vec::Vec;
}

pub mod coords;
pub mod error;
pub mod marching_cubes;
#[cfg(any(feature = "std", feature = "alloc"))]
pub mod mesh;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
///
/// Provides the most commonly used types and functions.
pub mod prelude {
    pub use crate::coords::{check_bounds, lattice_position, FieldLattice};
    pub use crate::error::{Axis, IsoCoreError};
    pub use crate::marching_cubes::{
        classify, interpolate_vertex, process_cell_no_alloc, sample_cell, CellSamples,
        TriangulationTable,
    };
    pub use crate::traits::{corner_from_index, index_from_corner, LatticeSource, ScalarField};
    pub use crate::types::{CubeIndex, LatticeCoord, Point3};

    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::marching_cubes::{process_cell, triangulate};
    #[cfg(any(feature = "std", feature = "alloc"))]
    pub use crate::mesh::Mesh;
}

// Re-export everything at crate root for convenience
pub use coords::{check_bounds, lattice_position, FieldLattice};
pub use error::{Axis, IsoCoreError};
pub use marching_cubes::{TriangulationTable, MAX_TRIANGLES_PER_CELL};
#[cfg(any(feature = "std", feature = "alloc"))]
pub use mesh::Mesh;
pub use traits::{corner_from_index, index_from_corner, LatticeSource, ScalarField};
pub use types::{CubeIndex, LatticeCoord, Point3};
