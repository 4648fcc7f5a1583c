use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;

use prismtrace::presets::PRESET_NAMES;
use prismtrace::CameraConfig;

use crate::cli::Args;

const DEFAULT_WIDTH: usize = 800;
const DEFAULT_HEIGHT: usize = 600;

/// Render configuration as read from a JSON file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub scene: Option<String>,
    pub output: Option<String>,
    pub max_depth: Option<u32>,
    pub parallel_degree: Option<usize>,
    pub shadows: Option<bool>,
    pub seed: Option<u64>,
    pub camera: Option<CameraConfig>,
}

/// Fully resolved settings for one render.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub camera: CameraConfig,
    pub scene: String,
    pub output: String,
    pub max_depth: Option<u32>,
    pub parallel_degree: usize,
    pub shadows: bool,
    pub seed: u64,
}

pub fn load_config(path: &Path) -> anyhow::Result<RenderConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid config file {}", path.display()))
}

impl RenderSettings {
    /// Merge CLI arguments over the config file over built-in defaults.
    pub fn resolve(args: &Args, file: RenderConfig) -> Self {
        let width = args.width.or(file.width);
        let height = args.height.or(file.height);
        let camera = match file.camera {
            // An explicit resolution keeps the configured viewport but retargets the grid.
            Some(mut camera) => {
                camera.res_width = width.unwrap_or(camera.res_width);
                camera.res_height = height.unwrap_or(camera.res_height);
                camera
            }
            None => CameraConfig::looking_along_y(
                width.unwrap_or(DEFAULT_WIDTH),
                height.unwrap_or(DEFAULT_HEIGHT),
            ),
        };

        Self {
            camera,
            scene: args.scene.clone().or(file.scene).unwrap_or_else(|| "spheres".into()),
            output: args.output.clone().or(file.output).unwrap_or_else(|| "output.png".into()),
            max_depth: args.max_depth.or(file.max_depth),
            parallel_degree: args
                .threads
                .or(file.parallel_degree)
                .unwrap_or_else(rayon::current_num_threads),
            shadows: args.shadows || file.shadows.unwrap_or(false),
            seed: args.seed.or(file.seed).unwrap_or(0),
        }
    }
}

/// Reject settings that cannot produce an image file.
pub fn validate_settings(settings: &RenderSettings) -> anyhow::Result<()> {
    if settings.parallel_degree == 0 {
        bail!("parallel degree must be at least 1");
    }
    if settings.camera.res_width < 2 || settings.camera.res_height < 2 {
        bail!(
            "resolution must be at least 2x2, got {}x{}",
            settings.camera.res_width,
            settings.camera.res_height
        );
    }
    if !PRESET_NAMES
        .iter()
        .any(|name| name.eq_ignore_ascii_case(&settings.scene))
    {
        bail!(
            "unknown scene '{}', expected one of: {}",
            settings.scene,
            PRESET_NAMES.join(", ")
        );
    }

    let extension = Path::new(&settings.output)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("png") | Some("ppm") => Ok(()),
        _ => bail!(
            "unsupported output '{}': only .png and .ppm are supported",
            settings.output
        ),
    }
}
