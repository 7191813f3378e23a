//! Extraction configuration.

use isomesh_core::Point3;

use crate::error::{IsoMeshError, Result};

/// Geometry and threshold of one extraction run.
///
/// Sample `(x, y, z)` of the lattice sits at `origin + (x, y, z) * cell_size`, and
/// the lattice holds `cells[axis] + 1` samples per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractionConfig {
    /// Number of cells per axis.
    pub cells: [u32; 3],

    /// Edge length of each cell in world units.
    pub cell_size: f32,

    /// Density threshold. Samples below it are inside.
    pub iso_value: f32,

    /// World position of lattice sample (0, 0, 0).
    pub origin: Point3,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            cells: [32, 32, 32],
            cell_size: 1.0,
            iso_value: 0.0,
            origin: Point3::default(),
        }
    }
}

impl ExtractionConfig {
    /// Create a configuration with the default isovalue and origin.
    pub fn new(cells: [u32; 3], cell_size: f32) -> Self {
        Self {
            cells,
            cell_size,
            ..Self::default()
        }
    }

    /// Number of samples per axis.
    #[inline]
    pub fn sample_extent(&self) -> [u32; 3] {
        self.cells.map(|c| c.saturating_add(1))
    }

    /// Total number of cells visited by a run.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.iter().map(|&c| c as usize).product()
    }

    /// World-space size of the sampled region.
    #[inline]
    pub fn world_size(&self) -> Point3 {
        let [x, y, z] = self.cells;
        Point3::new(x as f32, y as f32, z as f32) * self.cell_size
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// `InvalidConfig` when a cell count is zero or too large, or when the cell
    /// size, isovalue or origin is not a usable number.
    pub fn validate(&self) -> Result<()> {
        if self.cells.contains(&0) {
            return Err(IsoMeshError::invalid_config(format!(
                "cell counts must be positive, got {:?}",
                self.cells
            )));
        }
        if self.cells.contains(&u32::MAX) {
            return Err(IsoMeshError::invalid_config(
                "cell counts must leave room for one extra sample per axis",
            ));
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(IsoMeshError::invalid_config(format!(
                "cell_size must be positive, got {}",
                self.cell_size
            )));
        }
        if !self.iso_value.is_finite() {
            return Err(IsoMeshError::invalid_config("iso_value must be finite"));
        }
        if !self.origin.is_finite() {
            return Err(IsoMeshError::invalid_config("origin must be finite"));
        }
        Ok(())
    }
}
