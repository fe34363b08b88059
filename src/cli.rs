use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

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

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "chromacore")]
#[command(about = "Render a sphere scene with the chromacore ray tracing kernel")]
pub struct Args {
    /// Shortcut for --debug-level debug
    #[arg(short, long)]
    pub verbose: bool,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 450)]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 20.0)]
    pub vfov: f32,

    /// Defocus blur angle in degrees (0 disables depth of field)
    #[arg(long, default_value_t = 0.6)]
    pub defocus_angle: f32,

    /// Distance to the plane of perfect focus
    #[arg(long, default_value_t = 10.0)]
    pub focus_dist: f32,

    /// Seed for a reproducible image (scene layout and sampling)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Hide the progress bar
    #[arg(long)]
    pub quiet: bool,

    /// Output file path (.png for 8-bit with gamma correction, .exr for HDR linear)
    #[arg(short, long, default_value = "output.png")]
    pub output: PathBuf,
}

impl Args {
    /// Effective log level after applying --verbose.
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::from(self.debug_level).max(LevelFilter::Debug)
        } else {
            self.debug_level.into()
        }
    }
}
