//! Sphere Extraction Timing
//!
//! Extracts a sphere at increasing resolutions and compares the sequential
//! driver with slab-parallel extraction. Both paths must produce the same mesh.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release --bin sphere_benchmark -- [threads]
//! ```

use std::env;
use std::process::ExitCode;

use instant::Instant;

use isomesh::{ExtractorBuilder, IsoMeshError, Point3};

const RESOLUTIONS: [u32; 4] = [32, 64, 96, 128];
const ITERATIONS: u32 = 5;

fn sphere(p: Point3) -> f32 {
    (p - Point3::splat(1.0)).length() - 0.8
}

fn run(threads: usize) -> Result<(), IsoMeshError> {
    println!(
        "{:>6} {:>10} {:>12} {:>12} {:>8}",
        "cells", "triangles", "seq (ms)", "par (ms)", "speedup"
    );

    for cells in RESOLUTIONS {
        let extractor = ExtractorBuilder::new([cells; 3], 2.0 / cells as f32).build()?;

        let mut seq_ms = 0.0;
        let mut par_ms = 0.0;
        let mut triangles = 0;

        for _ in 0..ITERATIONS {
            let start = Instant::now();
            let sequential = extractor.extract(&sphere)?;
            seq_ms += start.elapsed().as_secs_f64() * 1000.0;

            let start = Instant::now();
            let parallel = extractor.extract_parallel(&sphere, threads)?;
            par_ms += start.elapsed().as_secs_f64() * 1000.0;

            if parallel != sequential {
                log::error!("parallel mesh differs at {} cells", cells);
            }
            triangles = sequential.triangle_count();
        }

        let seq_ms = seq_ms / f64::from(ITERATIONS);
        let par_ms = par_ms / f64::from(ITERATIONS);
        println!(
            "{:>6} {:>10} {:>12.2} {:>12.2} {:>7.2}x",
            cells,
            triangles,
            seq_ms,
            par_ms,
            seq_ms / par_ms.max(f64::EPSILON)
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let threads = match env::args().nth(1).map(|s| s.parse::<usize>()) {
        None => 0,
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            eprintln!("invalid thread count: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(threads) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("sphere_benchmark failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
