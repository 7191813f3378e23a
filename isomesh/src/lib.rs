//! # isomesh
//!
//! Marching Cubes runtime: turns scalar density fields into triangle meshes.
//!
//! This crate provides the driver side of the isomesh workspace. The per-cell
//! math (classification, interpolation, the triangulation table) lives in
//! `isomesh_core`; this crate walks whole lattices, optionally in parallel, and
//! stores, measures and exports the result.
//!
//! ## Quick Start
//!
//! ```
//! use isomesh::{ExtractorBuilder, MeshStats, Point3};
//!
//! let center = Point3::new(1.0, 1.0, 1.0);
//! let extractor = ExtractorBuilder::new([20, 20, 20], 0.1)
//!     .with_iso_value(0.0)
//!     .build()?;
//!
//! // Sphere of radius 0.6: negative inside, positive outside
//! let mesh = extractor.extract(&|p: Point3| (p - center).length() - 0.6)?;
//!
//! let stats = MeshStats::from_mesh(&mesh);
//! assert!(stats.triangle_count > 0);
//! # Ok::<(), isomesh::IsoMeshError>(())
//! ```
//!
//! ## Architecture
//!
//! - **Fields**: any `Fn(Point3) -> f32` or [`ScalarField`] is sampled on a regular
//!   lattice; stored data goes through [`VoxelGrid`] or a custom [`LatticeSource`]
//! - **Traversal**: [`MeshExtractor`] visits cells z outermost, then y, then x
//! - **Output**: a [`Mesh`] with three fresh vertices and one index triple per
//!   triangle; vertices are never welded
//!
//! ## Feature Flags
//!
//! - `parallel`: Parallel z-slab extraction via rayon. Output is identical to the
//!   sequential driver.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod config;
mod error;
mod grid;
mod io;
mod mesh;
mod normals;

pub use builder::ExtractorBuilder;
pub use config::ExtractionConfig;
pub use error::{IsoMeshError, Result};
pub use grid::VoxelGrid;
pub use io::{mesh_to_obj, save_obj, write_obj, write_obj_with_normals};
pub use mesh::{extract_mesh, MeshExtractor, MeshStats, Triangle};
pub use normals::compute_vertex_normals;

// Re-export isomesh_core types for convenience
pub use isomesh_core::{
    CubeIndex, FieldLattice, IsoCoreError, LatticeCoord, LatticeSource, Mesh, Point3,
    ScalarField, TriangulationTable,
};

/// Prelude module for convenient imports.
///
/// ```
/// use isomesh::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::ExtractorBuilder;
    pub use crate::config::ExtractionConfig;
    pub use crate::error::{IsoMeshError, Result};
    pub use crate::grid::VoxelGrid;
    pub use crate::mesh::{MeshExtractor, MeshStats, Triangle};

    pub use isomesh_core::{LatticeCoord, LatticeSource, Mesh, Point3, ScalarField};
}
