use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use umbra_renderer::{render, write_ppm, RenderConfig};

mod cli;
mod scenes;

use cli::Args;

/// Render settings from the optional JSON file, then command-line overrides.
fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => RenderConfig::default(),
    };

    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    Ok(config)
}

fn read_config(path: &Path) -> Result<RenderConfig> {
    let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
    let config = serde_json::from_reader(io::BufReader::new(file))
        .with_context(|| format!("parsing config {}", path.display()))?;
    log::info!("Loaded render settings from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut config = load_config(&args)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let scene = scenes::build(args.scene, args.aspect, args.texture.as_deref(), &mut rng)?;

    // A config file's background wins over the preset's
    if args.config.is_none() {
        config.background = scene.background;
        config.use_sky_gradient = scene.use_sky_gradient;
    }

    let width = args.width;
    let height = ((width as f64 / scene.aspect_ratio) as u32).max(1);

    let image = render(&scene.camera, &scene.world, width, height, &config);

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            write_ppm(&image, &mut BufWriter::new(file))
                .with_context(|| format!("writing {}", path.display()))?;
            log::info!("Saved to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            write_ppm(&image, &mut out).context("writing image to stdout")?;
            out.flush()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_flags_override_config_file() {
        let path = std::env::temp_dir().join("umbra_cli_test_config.json");
        let mut file = File::create(&path).unwrap();
        write!(file, r#"{{"samples_per_pixel": 12, "max_depth": 7, "seed": 5}}"#).unwrap();
        drop(file);

        let args = Args::parse_from([
            "umbra",
            "--config",
            path.to_str().unwrap(),
            "--max-depth",
            "3",
        ]);
        let config = load_config(&args).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.samples_per_pixel, 12);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.seed, 5);
    }

    #[test]
    fn test_missing_config_is_an_error() {
        let args = Args::parse_from(["umbra", "--config", "/nonexistent/umbra.json"]);
        assert!(load_config(&args).is_err());
    }
}
