use crate::config::Config;
use log::*;
use std::fmt;

/// Which rule decided the verdict
#[derive(Debug, Clone, PartialEq)]
pub enum Reason {
    TooFewRegions { count: usize, min: usize },
    LowSkinPercent { percent: f64, min: f64 },
    SmallLargestRegion { percent: f64, min: f64 },
    TooManyRegions { count: usize, max: usize },
    Nude,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::TooFewRegions { count, min } => {
                write!(f, "Less than {} skin regions ({})", min, count)
            }
            Reason::LowSkinPercent { percent, min } => {
                write!(f, "Total skin percentage lower than {} ({:.2})", min, percent)
            }
            Reason::SmallLargestRegion { percent, min } => write!(
                f,
                "The largest region contains less than {} percent ({:.2})",
                min, percent
            ),
            Reason::TooManyRegions { count, max } => {
                write!(f, "More than {} skin regions ({})", max, count)
            }
            Reason::Nude => write!(f, "Nude!"),
        }
    }
}

/// The final analysis of an image
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// The classification whether this image is a nudie
    pub nude: bool,
    /// The percentage of skin pixels in the image
    pub skin_percent: f64,
    /// The rule that decided `nude`
    pub reason: Reason,
    /// Set when the largest region was small but didn't decide the verdict
    pub note: Option<Reason>,
}

impl Analysis {
    fn new(nude: bool, skin_percent: f64, reason: Reason) -> Analysis {
        Analysis {
            nude,
            skin_percent,
            reason,
            note: None,
        }
    }

    /// Human readable explanation of the verdict
    pub fn message(&self) -> String {
        self.reason.to_string()
    }

    /// Returns a combined score of `nude` and `skin_percent`.
    /// score > 1.0 indicates a detected nudie.
    ///
    /// ```
    /// # use nude::{Analysis, Reason};
    /// let analysis = Analysis {
    ///     nude: true,
    ///     skin_percent: 65.34,
    ///     reason: Reason::Nude,
    ///     note: None,
    /// };
    /// assert_eq!(analysis.score(), 1.6534);
    ///
    /// let analysis = Analysis {
    ///     nude: false,
    ///     skin_percent: 12.3,
    ///     reason: Reason::LowSkinPercent { percent: 12.3, min: 15.0 },
    ///     note: None,
    /// };
    /// assert_eq!(analysis.score(), 0.12300000000000001);
    /// ```
    #[inline]
    pub fn score(&self) -> f64 {
        let nude = if self.nude { 1.0 } else { 0.0 };
        nude + (self.skin_percent / 100.0)
    }
}

#[inline]
fn percent_of(part: usize, total: f64) -> f64 {
    part as f64 / total * 100.0
}

/// Decide on the pixel counts of the filtered skin regions.
///
/// The rules are checked in order and the first one with a verdict wins.
/// Only the counts matter, so the same counts always give the same result.
pub fn decide(region_sizes: &[usize], total_pixels: u64, config: &Config) -> Analysis {
    let mut sizes = region_sizes.to_vec();
    let total_skin: usize = sizes.iter().sum();
    let total_pixels = total_pixels as f64;
    let skin_percent = percent_of(total_skin, total_pixels);
    debug!("total skin percent is {}%", skin_percent);

    // if there are less than 3 regions
    debug!("skin regions: {}", sizes.len());
    if sizes.is_empty() || sizes.len() < config.min_regions {
        debug!("not nude - less than {} regions", config.min_regions);
        return Analysis::new(
            false,
            skin_percent,
            Reason::TooFewRegions {
                count: sizes.len(),
                min: config.min_regions,
            },
        );
    }

    // sort the detected regions by size
    sizes.sort_by(|a, b| b.cmp(a));

    if (total_skin as f64) < total_pixels * (config.min_skin_percent / 100.0) {
        debug!("not nude - skin percent is < {}%", config.min_skin_percent);
        return Analysis::new(
            false,
            skin_percent,
            Reason::LowSkinPercent {
                percent: skin_percent,
                min: config.min_skin_percent,
            },
        );
    }

    let mut note = None;
    let largest = percent_of(sizes[0], total_skin as f64);
    if largest < config.min_largest_region_percent {
        let reason = Reason::SmallLargestRegion {
            percent: largest,
            min: config.min_largest_region_percent,
        };

        if config.strict_largest_region {
            debug!("not nude - the biggest region contains {}%", largest);
            return Analysis::new(false, skin_percent, reason);
        }

        debug!("the biggest region only contains {}%", largest);
        note = Some(reason);
    }

    if sizes.len() > config.max_regions {
        debug!("not nude - more than {} skin regions", config.max_regions);
        let mut analysis = Analysis::new(
            false,
            skin_percent,
            Reason::TooManyRegions {
                count: sizes.len(),
                max: config.max_regions,
            },
        );
        analysis.note = note;
        return analysis;
    }

    // otherwise it is nude
    let mut analysis = Analysis::new(true, skin_percent, Reason::Nude);
    analysis.note = note;
    analysis
}
