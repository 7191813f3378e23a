//! Lattice geometry: bounds checks, lattice-to-world mapping and the field sampler.
//!
//! A lattice is described by a world-space `origin`, a uniform `cell_size` and a
//! number of cells per axis. Sample `(x, y, z)` sits at
//! `origin + (x, y, z) * cell_size`.

use crate::error::{Axis, IsoCoreError, Result};
use crate::traits::{LatticeSource, ScalarField};
use crate::types::{LatticeCoord, Point3};

/// Reject a coordinate that falls outside `extent` samples per axis.
///
/// Never clamps or wraps.
///
/// # Example
/// ```
/// use isomesh_core::coords::check_bounds;
/// use isomesh_core::LatticeCoord;
///
/// assert!(check_bounds(LatticeCoord::new(2, 2, 2), [3, 3, 3]).is_ok());
/// assert!(check_bounds(LatticeCoord::new(3, 0, 0), [3, 3, 3]).is_err());
/// ```
#[inline]
pub fn check_bounds(coord: LatticeCoord, extent: [u32; 3]) -> Result<()> {
    let axes = [Axis::X, Axis::Y, Axis::Z];
    for ((axis, c), e) in axes.into_iter().zip(coord.as_array()).zip(extent) {
        if c >= e {
            return Err(IsoCoreError::CoordOutOfBounds {
                axis,
                coord: c,
                extent: e,
            });
        }
    }
    Ok(())
}

/// World-space position of a lattice point.
#[inline]
pub fn lattice_position(origin: Point3, coord: LatticeCoord, cell_size: f32) -> Point3 {
    Point3::new(
        origin.x + coord.x as f32 * cell_size,
        origin.y + coord.y as f32 * cell_size,
        origin.z + coord.z as f32 * cell_size,
    )
}

/// Samples a [`ScalarField`] at the points of a regular lattice.
///
/// This is the bridge between continuous fields and the cell classifier. Every
/// sample is bounds-checked against the declared cell counts, so a traversal bug
/// surfaces as `CoordOutOfBounds` rather than silently reading outside the volume.
#[derive(Debug, Clone, Copy)]
pub struct FieldLattice<'a, F: ?Sized> {
    field: &'a F,
    origin: Point3,
    cell_size: f32,
    cells: [u32; 3],
}

impl<'a, F: ScalarField + ?Sized> FieldLattice<'a, F> {
    /// Wrap `field` in a lattice of `cells` cells per axis.
    pub fn new(field: &'a F, origin: Point3, cell_size: f32, cells: [u32; 3]) -> Self {
        Self {
            field,
            origin,
            cell_size,
            cells,
        }
    }

    /// The wrapped field.
    #[inline]
    pub fn field(&self) -> &'a F {
        self.field
    }

    /// Edge length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of lattice point (0, 0, 0).
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }
}

impl<F: ScalarField + ?Sized> LatticeSource for FieldLattice<'_, F> {
    #[inline]
    fn extent(&self) -> [u32; 3] {
        let [x, y, z] = self.cells;
        [x + 1, y + 1, z + 1]
    }

    fn sample(&self, coord: LatticeCoord) -> Result<f32> {
        check_bounds(coord, self.extent())?;
        Ok(self.field.density(self.position(coord)))
    }

    #[inline]
    fn position(&self, coord: LatticeCoord) -> Point3 {
        lattice_position(self.origin, coord, self.cell_size)
    }

    #[inline]
    fn cell_counts(&self) -> [u32; 3] {
        self.cells
    }
}
