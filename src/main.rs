use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use std::fs::File;
use std::io::{self, BufWriter};

mod cli;

use cli::Args;

// stderr keeps stdout free for the image
fn init_logger(level: LevelFilter){
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()>{
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let config = args.render_config();
    config.validate()?;
    let scene = args.scene.build(config.aspect_ratio()).context("Failed to build scene")?;
    info!("Scene {:?}: {} light(s)", args.scene, scene.lights.len());

    let image = lumen::render(&scene, &config)?;

    match &args.output{
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
            image.write_ppm(&mut BufWriter::new(file)).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            image.write_ppm(&mut BufWriter::new(stdout.lock())).context("Failed to write image to stdout")?;
        }
    }
    Ok(())
}
