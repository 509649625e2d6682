use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen::{Float, RenderConfig, RenderError, Scene};
use std::path::PathBuf;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel{
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter{
    fn from(level: LogLevel) -> Self{
        match level{
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneChoice{
    CornellBox,
    CornellClassic,
    Spheres,
}

impl SceneChoice{
    pub fn build(self, aspect_ratio: Float) -> Result<Scene, RenderError>{
        match self{
            SceneChoice::CornellBox => Scene::cornell_box(aspect_ratio),
            SceneChoice::CornellClassic => Scene::cornell_classic(aspect_ratio),
            SceneChoice::Spheres => Scene::spheres(aspect_ratio),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lumen")]
#[command(about = "Monte Carlo path tracer with light importance sampling")]
pub struct Args{
    /// Scene to render
    #[arg(long, value_enum, default_value = "cornell-box")]
    pub scene: SceneChoice,

    /// Image width in pixels
    #[arg(long, default_value_t = 600)]
    pub width: usize,

    /// Image height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 100)]
    pub samples_per_pixel: usize,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: usize,

    /// Seed for the per-pixel random generators
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Output PPM file; written to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args{
    pub fn render_config(&self) -> RenderConfig{
        RenderConfig{
            image_width: self.width,
            image_height: self.height,
            samples_per_pixel: self.samples_per_pixel,
            max_depth: self.max_depth,
            seed: self.seed,
        }
    }
}
