use crate::label::Skin;
use log::*;

/// A connected group of skin pixels
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    pixels: Vec<Skin>,
}

impl Region {
    pub fn new(pixels: Vec<Skin>) -> Region {
        Region { pixels }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Skin] {
        &self.pixels
    }

    /// The `(x, y)` position of every pixel, in the order they were collected
    pub fn coordinates(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.pixels.iter().map(|px| (px.x(), px.y()))
    }

    pub(crate) fn append(&mut self, mut pixels: Vec<Skin>) {
        self.pixels.append(&mut pixels);
    }
}

/// Drop every region that doesn't have more than `min_pixels` pixels
pub fn clear_regions(regions: Vec<Region>, min_pixels: usize) -> Vec<Region> {
    let before = regions.len();
    let skin_regions = regions
        .into_iter()
        .filter(|region| region.len() > min_pixels)
        .collect::<Vec<_>>();
    debug!(
        "kept {} of {} regions with more than {} pixels",
        skin_regions.len(),
        before,
        min_pixels
    );
    skin_regions
}
