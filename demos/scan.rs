#[macro_use]
extern crate log;

use image::GenericImageView;
use std::env;

fn main() -> Result<(), failure::Error> {
    env_logger::init();

    let path = env::args().nth(1).expect("argv[1]");

    let img = image::open(path)?;
    info!("dimensions {:?}", img.dimensions());

    let analysis = nude::scan(&img)?.analyse();
    println!("nude={:?} message={:?}", analysis.nude, analysis.message());
    Ok(())
}
