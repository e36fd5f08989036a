//! ```rust
//! # fn main() -> Result<(), nude::Error> {
//! let img = image::DynamicImage::new_rgb8(10, 10);
//! let nudity = nude::scan(&img)?.analyse();
//! println!("nudity={:?}", nudity);
//! assert!(!nudity.nude);
//! # Ok(())
//! # }
//! ```

use image::DynamicImage;
use log::*;

pub mod analyse;
pub mod buffer;
pub mod classify;
pub mod config;
pub mod error;
pub mod label;
pub mod merge;
pub mod region;
pub mod render;
pub mod resize;

pub use crate::analyse::{decide, Analysis, Reason};
pub use crate::buffer::RgbBuffer;
pub use crate::classify::classify_skin;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::label::Skin;
pub use crate::region::Region;

/// The skin regions found in an image
#[derive(Debug, Clone)]
pub struct Scan {
    skin_regions: Vec<Region>,
    width: u32,
    height: u32,
    config: Config,
    analysis: Option<Analysis>,
}

/// Scan an image for skin regions
pub fn scan(image: &DynamicImage) -> Result<Scan> {
    scan_with(image, Config::default())
}

/// Scan an image for skin regions with custom thresholds
pub fn scan_with(image: &DynamicImage, config: Config) -> Result<Scan> {
    let rgb = image.to_rgb8();
    let buffer = RgbBuffer::from_image(&rgb)?;
    Ok(scan_buffer(&buffer, config))
}

/// Scan an already decoded rgb buffer
pub fn scan_buffer(buffer: &RgbBuffer<'_>, config: Config) -> Scan {
    let labeling = label::label(buffer);
    let regions = merge::merge(labeling.detected_regions, &labeling.merges);
    let skin_regions = region::clear_regions(regions, config.min_region_pixels);

    Scan {
        skin_regions,
        width: buffer.width(),
        height: buffer.height(),
        config,
        analysis: None,
    }
}

impl Scan {
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn total_pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Regions that survived filtering, largest first once analysed
    pub fn skin_regions(&self) -> &[Region] {
        &self.skin_regions
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify the image, the verdict is only computed once per scan
    pub fn analyse(&mut self) -> Analysis {
        if let Some(analysis) = &self.analysis {
            return analysis.clone();
        }

        // sort the detected regions by size
        debug!("sorting skin regions");
        self.skin_regions
            .sort_by(|a, b| a.len().cmp(&b.len()).reverse());

        let sizes = self
            .skin_regions
            .iter()
            .map(Region::len)
            .collect::<Vec<_>>();
        let analysis = decide(&sizes, self.total_pixels(), &self.config);
        info!("nude={}, message={:?}", analysis.nude, analysis.message());

        self.analysis = Some(analysis.clone());
        analysis
    }

    #[inline]
    pub fn is_nude(&mut self) -> bool {
        let analysis = self.analyse();
        analysis.nude
    }
}
