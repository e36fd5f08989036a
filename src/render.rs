//! Turn the detected skin regions back into images

use crate::error::{Error, Result};
use crate::Scan;
use image::DynamicImage;
use image::GenericImage;
use image::GenericImageView;
use image::Rgb;
use image::RgbImage;
use image::Rgba;
use log::*;
use rand::Rng;
use std::path::{Path, PathBuf};

/// Black image with every pixel of a skin region painted white
pub fn skin_mask(scan: &Scan) -> RgbImage {
    let mut mask = RgbImage::new(scan.width(), scan.height());
    for region in scan.skin_regions() {
        for (x, y) in region.coordinates() {
            mask.put_pixel(x, y, Rgb([255, 255, 255]));
        }
    }
    mask
}

/// `dir/name.jpg` becomes `dir/name_Nude.jpg` or `dir/name_Normal.jpg`
pub fn mask_path(input: &Path, nude: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let suffix = if nude { "Nude" } else { "Normal" };

    let mut name = format!("{}_{}", stem, suffix);
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    input.with_file_name(name)
}

/// Write the skin mask next to `input` and return where it went
pub fn save_mask(scan: &Scan, input: &Path, nude: bool) -> Result<PathBuf> {
    let path = mask_path(input, nude);
    debug!("writing skin mask to {:?}", path);
    skin_mask(scan).save(&path)?;
    Ok(path)
}

/// Paint every skin region of `img` in a random color
pub fn colorize_regions(scan: &Scan, img: &mut DynamicImage) -> Result<()> {
    let (width, height) = img.dimensions();
    if (width, height) != (scan.width(), scan.height()) {
        return Err(Error::DimensionMismatch {
            width,
            height,
            expected_width: scan.width(),
            expected_height: scan.height(),
        });
    }

    let mut rng = rand::thread_rng();
    for region in scan.skin_regions() {
        let r: u8 = rng.gen();
        let g: u8 = rng.gen();
        let b: u8 = rng.gen();

        for (x, y) in region.coordinates() {
            img.put_pixel(x, y, Rgba([r, g, b, 255]));
        }
    }
    Ok(())
}
