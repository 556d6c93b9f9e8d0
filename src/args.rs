use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use path_scatter::{BlendStrategy, HemisphereStrategy};

#[derive(Debug, Parser)]
#[command(name = "path_scatter", about = "Render the demo scene with the scatter engine")]
pub struct Args {
    /// Width of the output image
    #[arg(long, default_value_t = 400)]
    pub width: usize,
    /// Height of the output image
    #[arg(long, default_value_t = 266)]
    pub height: usize,
    /// Samples per pixel
    #[arg(short, long, default_value_t = 32)]
    pub samples: u32,
    /// Bounce budget per path
    #[arg(short, long, default_value_t = 8)]
    pub depth: u32,
    /// Seed for every per-path random stream
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
    /// Threads to use for rendering (0 for automatic setting)
    #[arg(short, long, default_value_t = 0)]
    pub threads: usize,
    #[arg(long, value_enum, default_value_t = HemisphereArg::Cosine)]
    pub hemisphere: HemisphereArg,
    #[arg(long, value_enum, default_value_t = BlendArg::Schlick)]
    pub blend: BlendArg,
    /// Path to save the PPM render to
    #[arg(short, long, default_value_os_t = PathBuf::from("image.ppm"))]
    pub output: PathBuf,
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum HemisphereArg {
    Cosine,
    Uniform,
}

impl From<HemisphereArg> for HemisphereStrategy {
    fn from(h: HemisphereArg) -> Self {
        match h {
            HemisphereArg::Cosine => Self::CosineWeighted,
            HemisphereArg::Uniform => Self::Uniform,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum BlendArg {
    Schlick,
    Linear,
}

impl From<BlendArg> for BlendStrategy {
    fn from(b: BlendArg) -> Self {
        match b {
            BlendArg::Schlick => Self::Schlick,
            BlendArg::Linear => Self::Linear,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
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
