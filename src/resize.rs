use image::imageops::FilterType;
use image::DynamicImage;
use image::GenericImageView;
use log::*;

/// Which bounds caused a resize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resized {
    pub width: bool,
    pub height: bool,
}

impl Resized {
    /// 0 if unchanged, 1 for width, 2 for height, 3 for both
    pub fn code(&self) -> u8 {
        let mut code = 0;
        if self.width {
            code += 1;
        }
        if self.height {
            code += 2;
        }
        code
    }
}

/// Scale `image` down proportionally until it fits the given bounds.
///
/// The width bound is applied first, the height bound is then checked
/// against the already scaled image. Scanning a smaller image is faster
/// but may change the verdict.
pub fn resize(
    image: &DynamicImage,
    max_width: Option<u32>,
    max_height: Option<u32>,
) -> (DynamicImage, Resized) {
    let mut img = image.clone();
    let mut resized = Resized::default();

    if let Some(max_width) = max_width {
        let (width, height) = img.dimensions();
        if width > max_width {
            let h = (f64::from(height) * f64::from(max_width) / f64::from(width)) as u32;
            debug!("resizing {}x{} to {}x{}", width, height, max_width, h);
            img = img.resize_exact(max_width, h.max(1), FilterType::Lanczos3);
            resized.width = true;
        }
    }

    if let Some(max_height) = max_height {
        let (width, height) = img.dimensions();
        if height > max_height {
            let w = (f64::from(width) * f64::from(max_height) / f64::from(height)) as u32;
            debug!("resizing {}x{} to {}x{}", width, height, w, max_height);
            img = img.resize_exact(w.max(1), max_height, FilterType::Lanczos3);
            resized.height = true;
        }
    }

    (img, resized)
}
