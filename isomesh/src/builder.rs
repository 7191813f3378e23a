//! ExtractorBuilder pattern for constructing MeshExtractor.
//!
//! Provides a fluent API for configuring extractions with validation.

use isomesh_core::{Point3, TriangulationTable};

use crate::config::ExtractionConfig;
use crate::error::Result;
use crate::mesh::MeshExtractor;

/// Builder for constructing [`MeshExtractor`] instances.
///
/// # Example
///
/// ```
/// use isomesh::ExtractorBuilder;
/// use isomesh::Point3;
///
/// let extractor = ExtractorBuilder::new([16, 16, 16], 0.125)
///     .with_iso_value(0.0)
///     .with_origin(Point3::new(-1.0, -1.0, -1.0))
///     .build()?;
///
/// let mesh = extractor.extract(&|p: Point3| p.length() - 0.5)?;
/// assert!(mesh.triangle_count() > 0);
/// # Ok::<(), isomesh::IsoMeshError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorBuilder {
    config: ExtractionConfig,
    table: Option<TriangulationTable>,
}

impl ExtractorBuilder {
    /// Create a new builder for a lattice of `cells` cells of edge `cell_size`.
    ///
    /// # Arguments
    /// * `cells` - Number of cells along x, y and z
    /// * `cell_size` - Edge length of each cell in world units
    pub fn new(cells: [u32; 3], cell_size: f32) -> Self {
        Self::from_config(ExtractionConfig::new(cells, cell_size))
    }

    /// Start from an existing configuration.
    pub fn from_config(config: ExtractionConfig) -> Self {
        Self {
            config,
            table: None,
        }
    }

    /// Set the density threshold. The default is 0.0.
    pub fn with_iso_value(mut self, iso_value: f32) -> Self {
        self.config.iso_value = iso_value;
        self
    }

    /// Set the world position of lattice sample (0, 0, 0). The default is the origin.
    pub fn with_origin(mut self, origin: Point3) -> Self {
        self.config.origin = origin;
        self
    }

    /// Use a caller-supplied triangulation table instead of the built-in one.
    pub fn with_table(mut self, table: TriangulationTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Use a raw edge mapping and triangle table, validating them first.
    ///
    /// # Errors
    /// Returns the table validation error (`NonAdjacentEdge`, `InvalidEdge`,
    /// `MalformedTableEntry` or `DataAfterTerminator`).
    pub fn with_raw_table(
        mut self,
        edges: [(usize, usize); 12],
        triangles: [[i8; 16]; 256],
    ) -> Result<Self> {
        self.table = Some(TriangulationTable::new(edges, triangles)?);
        Ok(self)
    }

    /// Get the configuration built so far.
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Build the extractor.
    ///
    /// # Errors
    /// `InvalidConfig` if the configuration fails [`ExtractionConfig::validate`].
    pub fn build(self) -> Result<MeshExtractor> {
        if let Err(e) = self.config.validate() {
            log::warn!("Rejected extraction config {:?}: {}", self.config, e);
            return Err(e);
        }
        let table = self
            .table
            .unwrap_or_else(|| TriangulationTable::standard().clone());
        Ok(MeshExtractor::from_parts(self.config, table))
    }
}
