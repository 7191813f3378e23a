//! Traits for density sources in isomesh_core.
//!
//! The extraction algorithms never depend on a concrete field. Analytic functions,
//! noise generators and voxel storage all plug in through these two traits.

use crate::error::Result;
use crate::marching_cubes::CORNER_OFFSETS;
use crate::types::{LatticeCoord, Point3};

/// A scalar density field defined everywhere in space.
///
/// `density < iso_value` is inside the solid, anything else is outside.
/// Implementations must be pure: the same position always yields the same value.
///
/// Any `Fn(Point3) -> f32` is a field:
///
/// ```
/// use isomesh_core::{Point3, ScalarField};
///
/// let plane = |p: Point3| p.y - 0.5;
/// assert_eq!(plane.density(Point3::new(3.0, 1.0, -2.0)), 0.5);
/// ```
pub trait ScalarField {
    /// Sample the density at a world-space position.
    fn density(&self, position: Point3) -> f32;
}

impl<F> ScalarField for F
where
    F: Fn(Point3) -> f32,
{
    #[inline]
    fn density(&self, position: Point3) -> f32 {
        self(position)
    }
}

/// Density samples addressed by integer lattice coordinates.
///
/// This is what the cell classifier consumes. A lattice of `n` samples per axis
/// holds `n - 1` cells per axis.
pub trait LatticeSource {
    /// Number of samples along each axis.
    fn extent(&self) -> [u32; 3];

    /// Density at a lattice point.
    ///
    /// # Errors
    /// `CoordOutOfBounds` when any component is `>=` the extent on its axis.
    fn sample(&self, coord: LatticeCoord) -> Result<f32>;

    /// World-space position of a lattice point.
    fn position(&self, coord: LatticeCoord) -> Point3;

    /// Number of cells along each axis.
    #[inline]
    fn cell_counts(&self) -> [u32; 3] {
        let [x, y, z] = self.extent();
        [x.saturating_sub(1), y.saturating_sub(1), z.saturating_sub(1)]
    }
}

/// Convert a corner index (0-7) to its lattice offset.
///
/// Corners are bit-packed: bit 0 is x, bit 1 is y, bit 2 is z.
/// ```text
/// Corner:  0      1      2      3      4      5      6      7
/// Offset: (0,0,0)(1,0,0)(0,1,0)(1,1,0)(0,0,1)(1,0,1)(0,1,1)(1,1,1)
/// ```
#[inline]
pub const fn corner_from_index(idx: usize) -> (u32, u32, u32) {
    CORNER_OFFSETS[idx & 7]
}

/// Convert a corner offset to its corner index. Inverse of [`corner_from_index`].
#[inline]
pub const fn index_from_corner(corner: (u32, u32, u32)) -> usize {
    ((corner.0 & 1) | ((corner.1 & 1) << 1) | ((corner.2 & 1) << 2)) as usize
}
