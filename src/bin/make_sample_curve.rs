use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use exo_hunter::config::{PERSISTENCE, SAMPLE};
use exo_hunter::data::generate_sample;

fn main() -> Result<()> {
    // 1. Setup Logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 2. Optional seed as the only argument
    let seed = match std::env::args().nth(1) {
        Some(arg) => Some(
            arg.parse::<u64>()
                .with_context(|| format!("Seed must be an unsigned integer, got {:?}", arg))?,
        ),
        None => None,
    };

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    log::info!(
        "Generating {} samples: period {} samples, depth {}, noise sigma {}",
        SAMPLE.num_points,
        SAMPLE.period_samples,
        SAMPLE.depth,
        SAMPLE.noise_sigma
    );
    let curve = generate_sample(&SAMPLE, &mut rng)?;

    // 3. Save
    let dir = PathBuf::from(PERSISTENCE.sample.directory);
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create directory: {:?}", dir))?;
    let output_path = dir.join(PERSISTENCE.sample.filename);

    let file = File::create(&output_path)
        .with_context(|| format!("Failed to create file: {:?}", output_path))?;
    serde_json::to_writer(BufWriter::new(file), &curve)
        .with_context(|| format!("Failed to write sample curve to: {:?}", output_path))?;

    log::info!("Wrote {:?}", output_path);
    log::info!("Run: exo-hunter detect {}", output_path.display());

    Ok(())
}
