use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Thresholds used by the region filter and the decision rules
///
/// Missing fields fall back to their defaults when deserialized, so a config
/// file only has to name the values it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Regions need more than this many pixels to be considered at all
    pub min_region_pixels: usize,
    /// Fewer regions than this are never nude
    pub min_regions: usize,
    /// Images with less skin than this (in percent of all pixels) are never nude
    pub min_skin_percent: f64,
    /// Share of all skin (in percent) the largest region is expected to have
    pub min_largest_region_percent: f64,
    /// More regions than this are never nude
    pub max_regions: usize,
    /// Treat a small largest region as a final "not nude" instead of a note
    pub strict_largest_region: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_region_pixels: 30,
            min_regions: 3,
            min_skin_percent: 15.0,
            min_largest_region_percent: 45.0,
            max_regions: 60,
            strict_largest_region: false,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path)?;
    let config = serde_json::from_str(&data)?;
    Ok(config)
}
