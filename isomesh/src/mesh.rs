//! Mesh extraction using marching cubes.
//!
//! Wraps isomesh_core's cell processing with whole-lattice traversal, streaming
//! callbacks and parallel slab processing.

use isomesh_core::marching_cubes::{process_cell, process_cell_no_alloc};
use isomesh_core::{
    FieldLattice, LatticeCoord, LatticeSource, Mesh, Point3, ScalarField, TriangulationTable,
};

use crate::config::ExtractionConfig;
use crate::error::Result;

/// A triangle represented by three vertices.
pub type Triangle = [Point3; 3];

/// Runs marching cubes over a whole lattice.
///
/// Cells are visited with z outermost, then y, then x innermost. The parallel
/// driver splits work into z-slabs and concatenates them in ascending z, so every
/// driver produces the same vertex and index buffers for the same input.
///
/// Build one with [`ExtractorBuilder`](crate::ExtractorBuilder).
#[derive(Debug, Clone)]
pub struct MeshExtractor {
    config: ExtractionConfig,
    table: TriangulationTable,
}

impl MeshExtractor {
    pub(crate) fn from_parts(config: ExtractionConfig, table: TriangulationTable) -> Self {
        Self { config, table }
    }

    /// Get the extraction configuration.
    #[inline]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Get the triangulation table in use.
    #[inline]
    pub fn table(&self) -> &TriangulationTable {
        &self.table
    }

    /// Wrap a field in the configured lattice.
    pub fn lattice<'a, F: ScalarField + ?Sized>(&self, field: &'a F) -> FieldLattice<'a, F> {
        FieldLattice::new(
            field,
            self.config.origin,
            self.config.cell_size,
            self.config.cells,
        )
    }

    /// Extract the isosurface of a field over the configured lattice.
    ///
    /// # Errors
    /// Propagates core errors; a run that fails returns no partial mesh.
    pub fn extract<F: ScalarField + ?Sized>(&self, field: &F) -> Result<Mesh> {
        self.extract_lattice(&self.lattice(field))
    }

    /// Extract the isosurface of a lattice source.
    ///
    /// Lattice sources carry their own geometry: the cell counts and positions
    /// come from `source`, only the isovalue and table come from this extractor.
    ///
    /// # Errors
    /// `CoordOutOfBounds` if the source rejects one of its own coordinates.
    pub fn extract_lattice<S: LatticeSource + ?Sized>(&self, source: &S) -> Result<Mesh> {
        let [_, _, cz] = source.cell_counts();
        let mut mesh = Mesh::new();
        for z in 0..cz {
            self.extract_slab(source, z, &mut mesh)?;
        }
        self.log_summary(source, &mesh);
        Ok(mesh)
    }

    /// Stream every triangle to `callback` without building a mesh.
    ///
    /// Triangles arrive in the same order as [`extract_lattice`](Self::extract_lattice)
    /// would store them. Returns the number of triangles produced.
    ///
    /// # Example
    ///
    /// ```
    /// use isomesh::{ExtractorBuilder, Point3};
    ///
    /// let extractor = ExtractorBuilder::new([4, 4, 4], 0.5).build()?;
    /// let field = |p: Point3| p.y - 1.0;
    ///
    /// let mut lowest = f32::MAX;
    /// let count = extractor.extract_with_callback(&extractor.lattice(&field), |tri| {
    ///     lowest = tri.iter().fold(lowest, |m, v| m.min(v.y));
    /// })?;
    /// assert!(count > 0);
    /// assert!((lowest - 1.0).abs() < 1e-6);
    /// # Ok::<(), isomesh::IsoMeshError>(())
    /// ```
    pub fn extract_with_callback<S, F>(&self, source: &S, mut callback: F) -> Result<usize>
    where
        S: LatticeSource + ?Sized,
        F: FnMut(Triangle),
    {
        let [cx, cy, cz] = source.cell_counts();
        let iso_value = self.config.iso_value;
        let mut total = 0;

        for z in 0..cz {
            for y in 0..cy {
                for x in 0..cx {
                    let cell = LatticeCoord::new(x, y, z);
                    let (triangles, count) =
                        process_cell_no_alloc(source, cell, iso_value, &self.table)?;
                    for triangle in triangles.iter().take(count) {
                        callback(*triangle);
                    }
                    total += count;
                }
            }
        }

        Ok(total)
    }

    /// Extract the isosurface of a field using the rayon worker pool.
    ///
    /// # Arguments
    /// * `field` - Density field, shared between workers
    /// * `num_threads` - Number of threads to use, or 0 for rayon's global pool
    #[cfg(feature = "parallel")]
    pub fn extract_parallel<F>(&self, field: &F, num_threads: usize) -> Result<Mesh>
    where
        F: ScalarField + Sync + ?Sized,
    {
        self.extract_lattice_parallel(&self.lattice(field), num_threads)
    }

    /// Extract a lattice source in parallel z-slabs.
    ///
    /// Each slab fills a private mesh; slabs are concatenated in ascending z with
    /// their indices rebased. The result equals [`extract_lattice`](Self::extract_lattice).
    ///
    /// # Errors
    /// `ThreadPool` if a dedicated pool cannot be created, otherwise the first
    /// core error in z order.
    #[cfg(feature = "parallel")]
    pub fn extract_lattice_parallel<S>(&self, source: &S, num_threads: usize) -> Result<Mesh>
    where
        S: LatticeSource + Sync + ?Sized,
    {
        use rayon::prelude::*;

        let run = || -> Result<Mesh> {
            let [_, _, cz] = source.cell_counts();
            let slabs = (0..cz)
                .into_par_iter()
                .map(|z| -> Result<Mesh> {
                    let mut slab = Mesh::new();
                    self.extract_slab(source, z, &mut slab)?;
                    log::debug!("Slab z={} produced {} triangles", z, slab.triangle_count());
                    Ok(slab)
                })
                .collect::<Result<Vec<Mesh>>>()?;

            let total = slabs.iter().map(Mesh::triangle_count).sum();
            let mut mesh = Mesh::with_capacity(total);
            for slab in slabs {
                mesh.append(slab);
            }
            Ok(mesh)
        };

        let mesh = if num_threads > 0 {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| crate::error::IsoMeshError::ThreadPool {
                    message: e.to_string(),
                })?;
            pool.install(run)?
        } else {
            run()?
        };

        self.log_summary(source, &mesh);
        Ok(mesh)
    }

    /// Append the triangles of every cell in layer `z` to `mesh`.
    fn extract_slab<S: LatticeSource + ?Sized>(&self, source: &S, z: u32, mesh: &mut Mesh) -> Result<()> {
        let [cx, cy, _] = source.cell_counts();
        for y in 0..cy {
            for x in 0..cx {
                process_cell(
                    source,
                    LatticeCoord::new(x, y, z),
                    self.config.iso_value,
                    &self.table,
                    mesh,
                )?;
            }
        }
        Ok(())
    }

    fn log_summary<S: LatticeSource + ?Sized>(&self, source: &S, mesh: &Mesh) {
        let [cx, cy, cz] = source.cell_counts();
        log::info!(
            "Extracted {} triangles ({} vertices) from {}x{}x{} cells at iso {}",
            mesh.triangle_count(),
            mesh.vertex_count(),
            cx,
            cy,
            cz,
            self.config.iso_value
        );
    }
}

/// Extract the isosurface of `field` with the built-in table.
///
/// Shorthand for building a [`MeshExtractor`] and calling
/// [`extract`](MeshExtractor::extract).
///
/// # Errors
/// `InvalidConfig` for unusable geometry, otherwise core errors.
pub fn extract_mesh<F: ScalarField + ?Sized>(
    field: &F,
    cells: [u32; 3],
    cell_size: f32,
    iso_value: f32,
) -> Result<Mesh> {
    crate::ExtractorBuilder::new(cells, cell_size)
        .with_iso_value(iso_value)
        .build()?
        .extract(field)
}

/// Mesh statistics after extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshStats {
    /// Total number of triangles.
    pub triangle_count: usize,
    /// Number of vertices (triangle_count * 3 for extracted meshes).
    pub vertex_count: usize,
    /// Approximate surface area (sum of triangle areas).
    pub surface_area: f32,
    /// Bounding box minimum.
    pub bbox_min: Point3,
    /// Bounding box maximum.
    pub bbox_max: Point3,
}

impl MeshStats {
    /// Compute statistics from a mesh.
    ///
    /// An empty mesh reports a zero area and a bounding box at the origin.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        let mut surface_area = 0.0;
        let mut bbox_min = Point3::splat(f32::MAX);
        let mut bbox_max = Point3::splat(f32::MIN);

        for &v in &mesh.vertices {
            bbox_min = bbox_min.min(v);
            bbox_max = bbox_max.max(v);
        }

        for [a, b, c] in mesh.iter_triangles() {
            surface_area += (b - a).cross(c - a).length() * 0.5;
        }

        if mesh.vertices.is_empty() {
            bbox_min = Point3::default();
            bbox_max = Point3::default();
        }

        Self {
            triangle_count: mesh.triangle_count(),
            vertex_count: mesh.vertex_count(),
            surface_area,
            bbox_min,
            bbox_max,
        }
    }
}
