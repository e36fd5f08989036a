use clap::Parser;
use image::GenericImageView;
use image::ImageFormat;
use log::*;
use nude::config::{self, Config};
use std::path::{Path, PathBuf};

const MAX_WIDTH: u32 = 600;
const MAX_HEIGHT: u32 = 800;

#[derive(Debug, Parser)]
#[command(name = "nude", about = "Detect nudity in images", long_about = None)]
struct Args {
    /// Reduce image size to increase speed of scanning
    #[arg(short, long)]
    resize: bool,
    /// Write an image of the detected skin regions next to each input
    #[arg(short, long)]
    visualization: bool,
    /// JSON file overriding the detection thresholds
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Images you wish to test
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

fn inspect(path: &Path, args: &Args, config: &Config) -> nude::Result<()> {
    let img = image::open(path)?;
    let format = ImageFormat::from_path(path)
        .map(|f| format!("{:?}", f))
        .unwrap_or_else(|_| String::from("unknown"));

    let img = if args.resize {
        let (img, resized) = nude::resize::resize(&img, Some(MAX_WIDTH), Some(MAX_HEIGHT));
        debug!("resize code for {:?}: {}", path, resized.code());
        img
    } else {
        img
    };
    let (width, height) = img.dimensions();

    let mut scan = nude::scan_with(&img, config.clone())?;
    let analysis = scan.analyse();
    if let Some(note) = &analysis.note {
        info!("{:?}: {}", path, note);
    }

    if args.visualization {
        let out = nude::render::save_mask(&scan, path, analysis.nude)?;
        info!("wrote skin regions to {:?}", out);
    }

    println!(
        "{} {} {} {} {}: result={} message='{}'",
        analysis.nude,
        path.display(),
        format,
        width,
        height,
        analysis.nude,
        analysis.message()
    );
    Ok(())
}

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => Config::default(),
    };
    debug!("using {:?}", config);

    for path in &args.files {
        if !path.is_file() {
            println!("{} is not a file", path.display());
            continue;
        }

        if let Err(err) = inspect(path, &args, &config) {
            error!("failed to scan {:?}: {}", path, err);
        }
    }

    Ok(())
}
