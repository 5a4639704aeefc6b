use anyhow::{Context, Result};
use clap::Parser;
use easel::Config;
use easel::draw::{CairoSurface, Renderer, write_png};
use std::path::PathBuf;

mod demo;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("EASEL_BUILD_VERSION"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Render a demonstration scene with the easel drawing layer"
)]
struct Cli {
    /// PNG file to write
    #[arg(long, short = 'o', value_name = "PATH", default_value = "easel.png")]
    output: PathBuf,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=16384))]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS", value_parser = clap::value_parser!(u32).range(1..=16384))]
    height: Option<u32>,

    /// Config file to read instead of ~/.config/easel/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }

    let (width, height) = (config.canvas.width as i32, config.canvas.height as i32);
    log::info!("Rendering {}x{} scene", width, height);

    let image = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
        .context("Failed to create image surface")?;
    let surface = CairoSurface::for_image(&image)?;
    let mut renderer = Renderer::with_baseline(surface, config.baseline());

    demo::render_scene(&mut renderer, &config).context("Failed to render scene")?;
    drop(renderer);

    write_png(&image, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("Wrote {}", cli.output.display());
    Ok(())
}
