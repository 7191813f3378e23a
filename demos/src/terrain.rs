//! Noise Terrain Export
//!
//! Builds a heightmap from gradient noise, fills a voxel grid with the terrain
//! density `y - height(x, z)`, extracts the surface and writes it as OBJ.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --release --bin terrain -- output/terrain.obj
//! ```

use std::env;
use std::path::Path;
use std::process::ExitCode;

use instant::Instant;
use simdnoise::NoiseBuilder;

use isomesh::{
    compute_vertex_normals, write_obj_with_normals, ExtractorBuilder, IsoMeshError, MeshStats,
    VoxelGrid,
};

/// Samples per axis; the grid holds one fewer cell.
const GRID_SIZE: u32 = 20;
const THRESHOLD: f32 = 0.5;
const HEIGHT_SCALE: f32 = 10.0;
const NOISE_FREQ: f32 = 0.1;
const SEED: i32 = 42;

/// Heightmap in `[0, 1]`, indexed `z * size + x`.
fn heightmap(size: usize) -> Vec<f32> {
    let (noise, min, max) = NoiseBuilder::gradient_2d(size, size)
        .with_seed(SEED)
        .with_freq(NOISE_FREQ)
        .generate();

    let range = max - min;
    if range <= f32::EPSILON {
        return vec![0.5; noise.len()];
    }
    noise.into_iter().map(|n| (n - min) / range).collect()
}

fn run(output_path: &str) -> Result<(), IsoMeshError> {
    let samples = GRID_SIZE as usize;

    let start = Instant::now();
    let heights = heightmap(samples);
    let grid = VoxelGrid::from_fn([GRID_SIZE; 3], 1.0, |c| {
        let h = heights[c.z as usize * samples + c.x as usize];
        c.y as f32 - h * HEIGHT_SCALE
    })?;
    log::info!("Sampled {} densities in {:?}", grid.values().len(), start.elapsed());

    let extractor = ExtractorBuilder::new([GRID_SIZE - 1; 3], 1.0)
        .with_iso_value(THRESHOLD)
        .build()?;

    let start = Instant::now();
    let mesh = extractor.extract_lattice(&grid)?;
    let elapsed = start.elapsed();

    let stats = MeshStats::from_mesh(&mesh);
    println!("Extracted terrain in {:?}", elapsed);
    println!("  triangles:    {}", stats.triangle_count);
    println!("  vertices:     {}", stats.vertex_count);
    println!("  surface area: {:.2}", stats.surface_area);
    println!("  bounds:       {:?} .. {:?}", stats.bbox_min, stats.bbox_max);

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let normals = compute_vertex_normals(&mesh);
    let mut file = std::io::BufWriter::new(std::fs::File::create(output_path)?);
    write_obj_with_normals(&mesh, &normals, &mut file)?;
    println!("Wrote {}", output_path);

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let output_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "output/terrain.obj".to_string());

    match run(&output_path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("terrain failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
