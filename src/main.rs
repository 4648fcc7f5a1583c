use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use log::{error, info};

use prismtrace::presets::build_scene;
use prismtrace::Camera;

mod cli;
mod config;
mod logger;
mod output;

use cli::Args;
use config::{load_config, validate_settings, RenderConfig, RenderSettings};
use logger::init_logger;
use output::{save_image, send_image_to_tev};

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Prismtrace - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let file = match &args.config {
        Some(path) => load_config(Path::new(path))?,
        None => RenderConfig::default(),
    };
    let settings = RenderSettings::resolve(args, file);
    validate_settings(&settings)?;

    let mut scene = build_scene(&settings.scene, settings.seed)
        .with_context(|| format!("failed to build scene '{}'", settings.scene))?;
    if let Some(max_depth) = settings.max_depth {
        scene.max_depth = max_depth;
    }
    scene.shadows = settings.shadows;
    scene.log_summary();

    let camera = Camera::new(settings.camera.clone()).context("invalid camera")?;
    let (width, height) = (settings.camera.res_width, settings.camera.res_height);
    info!(
        "Scene '{}' at {}x{}, max depth {}, shadows {}",
        settings.scene,
        width,
        height,
        scene.max_depth,
        if scene.shadows { "on" } else { "off" }
    );

    let image = camera.render(&scene, settings.parallel_degree)?;

    let width = u32::try_from(width).context("image width exceeds u32")?;
    let height = u32::try_from(height).context("image height exceeds u32")?;
    let stride = settings.camera.channel_stride;

    // Send image to TEV if requested
    if args.tev || args.tev_address.is_some() {
        let tev_address = args.tev_address.as_deref().unwrap_or("localhost:14158");
        send_image_to_tev(&image, stride, tev_address, width, height);
    }

    save_image(&image, stride, &settings.output, width, height)
}
