use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenePreset {
    /// Field of small random spheres around three large ones, with motion blur
    RandomSpheres,
    /// Two large checkered spheres
    TwoSpheres,
    /// Marble ground and sphere
    TwoPerlinSpheres,
    /// Image-textured globe (needs --texture)
    Earth,
    /// Marble spheres lit by a rectangular area light
    SimpleLight,
    /// Cornell box with two rotated blocks
    CornellBox,
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "umbra")]
#[command(about = "CPU path tracer writing plain-text PPM")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "random-spheres")]
    pub scene: ScenePreset,

    /// Image width in pixels
    #[arg(long, default_value = "400")]
    pub width: u32,

    /// Width over height; defaults to the scene's preferred ratio
    #[arg(long, value_parser = parse_aspect)]
    pub aspect: Option<f64>,

    /// Samples per pixel (overrides the config file)
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum bounce depth (overrides the config file)
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Random seed for scene layout, BVH construction and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with render settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file; the image goes to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Bitmap for the earth scene
    #[arg(long)]
    pub texture: Option<PathBuf>,
}

/// Aspect ratios must be finite and positive.
fn parse_aspect(value: &str) -> Result<f64, String> {
    let aspect: f64 = value
        .parse()
        .map_err(|e| format!("`{value}` is not a number: {e}"))?;
    if aspect.is_finite() && aspect > 0.0 {
        Ok(aspect)
    } else {
        Err(format!("aspect ratio must be a positive finite number, got {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["umbra"]);
        assert_eq!(args.scene, ScenePreset::RandomSpheres);
        assert_eq!(args.width, 400);
        assert!(args.aspect.is_none());
        assert!(args.output.is_none());
    }

    #[test]
    fn test_scene_names() {
        let args = Args::parse_from(["umbra", "--scene", "cornell-box", "-s", "16", "--seed", "3"]);
        assert_eq!(args.scene, ScenePreset::CornellBox);
        assert_eq!(args.samples, Some(16));
        assert_eq!(args.seed, Some(3));
    }

    #[test]
    fn test_aspect_accepts_positive_ratio() {
        let args = Args::parse_from(["umbra", "--aspect", "1.5"]);
        assert_eq!(args.aspect, Some(1.5));
    }

    #[test]
    fn test_aspect_rejects_degenerate_ratios() {
        for bad in ["0", "-1.5", "NaN", "inf", "wide"] {
            let parsed = Args::try_parse_from(["umbra", "--aspect", bad]);
            assert!(parsed.is_err(), "accepted --aspect {bad}");
        }
    }
}
