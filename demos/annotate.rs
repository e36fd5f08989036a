#[macro_use]
extern crate log;

use image::GenericImageView;
use std::env;
use std::path::Path;

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let path = env::args().nth(1).expect("argv[1]");

    let mut img = image::open(&path)?;
    info!("dimensions {:?}", img.dimensions());

    let mut scan = nude::scan(&img)?;
    let nude = scan.is_nude();

    nude::render::colorize_regions(&scan, &mut img)?;
    img.save("output.jpg")?;

    let mask = nude::render::save_mask(&scan, Path::new(&path), nude)?;
    info!("skin mask written to {:?}", mask);
    Ok(())
}
