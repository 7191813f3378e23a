//! Error types for isomesh_core operations.
//!
//! Provides a simple error enum with no external dependencies for no_std compatibility.

use core::fmt;

/// Lattice axis, used to report which coordinate was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// X axis.
    X,
    /// Y axis.
    Y,
    /// Z axis.
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// Error types that can occur during isomesh_core operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IsoCoreError {
    /// A lattice coordinate lies outside the sampled extent.
    CoordOutOfBounds {
        /// Offending axis.
        axis: Axis,
        /// The coordinate that was requested.
        coord: u32,
        /// Number of valid samples along that axis.
        extent: u32,
    },
    /// A triangle table entry holds a number of edges that is not a multiple of 3.
    MalformedTableEntry {
        /// The cube index of the entry.
        cube_index: u8,
        /// Number of edge ids before the terminator.
        len: usize,
    },
    /// A triangle table entry has edge ids after its `-1` terminator.
    DataAfterTerminator {
        /// The cube index of the entry.
        cube_index: u8,
    },
    /// A triangle table entry references an edge id outside 0..12.
    InvalidEdge {
        /// The cube index of the entry.
        cube_index: u8,
        /// The raw edge id found.
        edge: i8,
    },
    /// The edge table joins two corners that do not share a cube edge.
    NonAdjacentEdge {
        /// The edge id.
        edge: u8,
    },
    /// A mesh triangle references a vertex that does not exist.
    DanglingIndex {
        /// Triangle position in the index buffer.
        triangle: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Vertex count of the mesh.
        vertex_count: usize,
    },
}

impl fmt::Display for IsoCoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoCoreError::CoordOutOfBounds { axis, coord, extent } => {
                write!(
                    f,
                    "lattice coordinate {}={} is outside extent {}",
                    axis, coord, extent
                )
            }
            IsoCoreError::MalformedTableEntry { cube_index, len } => {
                write!(
                    f,
                    "triangle table entry {} has {} edges, not a multiple of 3",
                    cube_index, len
                )
            }
            IsoCoreError::DataAfterTerminator { cube_index } => {
                write!(
                    f,
                    "triangle table entry {} has edges after its terminator",
                    cube_index
                )
            }
            IsoCoreError::InvalidEdge { cube_index, edge } => {
                write!(
                    f,
                    "triangle table entry {} references invalid edge {}",
                    cube_index, edge
                )
            }
            IsoCoreError::NonAdjacentEdge { edge } => {
                write!(f, "edge {} joins non-adjacent corners", edge)
            }
            IsoCoreError::DanglingIndex {
                triangle,
                index,
                vertex_count,
            } => {
                write!(
                    f,
                    "triangle {} references vertex {} but mesh has {} vertices",
                    triangle, index, vertex_count
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IsoCoreError {}

/// Result type alias for isomesh_core operations.
pub type Result<T> = core::result::Result<T, IsoCoreError>;
