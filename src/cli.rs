use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, Default, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros.
///
/// Options left unset fall back to the JSON config file, then to built-in
/// defaults.
#[derive(Parser, Debug, Default)]
#[command(name = "prismtrace")]
#[command(about = "A recursive Phong ray tracer in Rust")]
pub struct Args {
    /// JSON render configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, help = "Image width in pixels [default: 800]")]
    pub width: Option<usize>,

    /// Image height in pixels
    #[arg(long, help = "Image height in pixels [default: 600]")]
    pub height: Option<usize>,

    /// Scene preset to render
    #[arg(long, help = "Scene preset: spheres, mirror-box or random [default: spheres]")]
    pub scene: Option<String>,

    /// Override the preset's reflection depth limit
    #[arg(long, short = 'd', help = "Maximum reflection depth (overrides the preset)")]
    pub max_depth: Option<u32>,

    /// Number of render workers
    #[arg(long, short = 'j', help = "Number of render workers [default: all cores]")]
    pub threads: Option<usize>,

    /// Enable hard shadows
    #[arg(long, help = "Gate diffuse and specular light on shadow tests")]
    pub shadows: bool,

    /// Seed for the random preset
    #[arg(long, help = "Seed for the random scene preset [default: 0]")]
    pub seed: Option<u64>,

    /// Output file path (.png or .ppm)
    #[arg(short, long, help = "Output file path, .png or .ppm [default: output.png]")]
    pub output: Option<String>,

    /// Send image to TEV for visualization
    #[arg(long, help = "Send image to TEV for visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,
}

