//! Dense voxel density storage.

use isomesh_core::coords::{check_bounds, lattice_position};
use isomesh_core::{LatticeCoord, LatticeSource, Point3};

use crate::error::{IsoMeshError, Result};

/// A dense 3D array of density samples.
///
/// Samples are stored with x fastest, then y, then z. The grid holds
/// `extent[axis] - 1` cells per axis, and sample `(x, y, z)` sits at
/// `origin + (x, y, z) * cell_size`.
///
/// # Example
///
/// ```
/// use isomesh::{LatticeCoord, VoxelGrid};
///
/// let mut grid = VoxelGrid::new([3, 3, 3], 1.0)?;
/// grid.set(LatticeCoord::new(1, 1, 1), -1.0)?;
/// assert_eq!(grid.get(LatticeCoord::new(1, 1, 1))?, -1.0);
/// assert!(grid.get(LatticeCoord::new(3, 0, 0)).is_err());
/// # Ok::<(), isomesh::IsoMeshError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VoxelGrid {
    extent: [u32; 3],
    cell_size: f32,
    origin: Point3,
    values: Vec<f32>,
}

impl VoxelGrid {
    /// Create a grid of `extent` samples per axis, all zero.
    ///
    /// # Errors
    /// `InvalidConfig` if an extent is zero or the cell size is not positive.
    pub fn new(extent: [u32; 3], cell_size: f32) -> Result<Self> {
        let len = Self::checked_len(extent, cell_size)?;
        Ok(Self {
            extent,
            cell_size,
            origin: Point3::default(),
            values: vec![0.0; len],
        })
    }

    /// Create a grid by evaluating `f` at every sample coordinate.
    pub fn from_fn<F>(extent: [u32; 3], cell_size: f32, mut f: F) -> Result<Self>
    where
        F: FnMut(LatticeCoord) -> f32,
    {
        let len = Self::checked_len(extent, cell_size)?;
        let values = (0..len)
            .map(|i| f(LatticeCoord::from_flat_index(i, extent)))
            .collect();
        Ok(Self {
            extent,
            cell_size,
            origin: Point3::default(),
            values,
        })
    }

    /// Create a grid from existing samples in x-fastest order.
    ///
    /// # Errors
    /// `SampleCountMismatch` if `values` does not hold exactly one sample per
    /// lattice point.
    pub fn from_values(extent: [u32; 3], cell_size: f32, values: Vec<f32>) -> Result<Self> {
        let len = Self::checked_len(extent, cell_size)?;
        if values.len() != len {
            return Err(IsoMeshError::SampleCountMismatch {
                expected: len,
                got: values.len(),
            });
        }
        Ok(Self {
            extent,
            cell_size,
            origin: Point3::default(),
            values,
        })
    }

    /// Move sample (0, 0, 0) to `origin`.
    pub fn with_origin(mut self, origin: Point3) -> Self {
        self.origin = origin;
        self
    }

    /// Density at a sample.
    ///
    /// # Errors
    /// `CoordOutOfBounds` when any component is outside the extent.
    #[inline]
    pub fn get(&self, coord: LatticeCoord) -> Result<f32> {
        Ok(self.sample(coord)?)
    }

    /// Overwrite the density at a sample.
    ///
    /// # Errors
    /// `CoordOutOfBounds` when any component is outside the extent.
    pub fn set(&mut self, coord: LatticeCoord, value: f32) -> Result<()> {
        check_bounds(coord, self.extent)?;
        self.values[coord.flat_index(self.extent)] = value;
        Ok(())
    }

    /// Edge length of one cell.
    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// World position of sample (0, 0, 0).
    #[inline]
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// All samples in x-fastest order.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Mutable access to all samples in x-fastest order.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    fn checked_len(extent: [u32; 3], cell_size: f32) -> Result<usize> {
        if extent.contains(&0) {
            return Err(IsoMeshError::invalid_config(format!(
                "voxel extent must be positive, got {:?}",
                extent
            )));
        }
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(IsoMeshError::invalid_config(format!(
                "cell_size must be positive, got {}",
                cell_size
            )));
        }
        extent
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e as usize))
            .ok_or_else(|| IsoMeshError::invalid_config("voxel extent overflows usize"))
    }
}

impl LatticeSource for VoxelGrid {
    #[inline]
    fn extent(&self) -> [u32; 3] {
        self.extent
    }

    #[inline]
    fn sample(&self, coord: LatticeCoord) -> isomesh_core::error::Result<f32> {
        check_bounds(coord, self.extent)?;
        Ok(self.values[coord.flat_index(self.extent)])
    }

    #[inline]
    fn position(&self, coord: LatticeCoord) -> Point3 {
        lattice_position(self.origin, coord, self.cell_size)
    }
}
