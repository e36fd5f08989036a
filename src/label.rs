use crate::buffer::RgbBuffer;
use crate::classify::classify_skin;
use crate::merge::MergeInstruction;
use log::*;

/// A classified pixel in an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skin {
    id: usize,
    skin: bool,
    region: Option<usize>,
    x: u32,
    y: u32,
}

impl Skin {
    pub fn new(skin: bool, x: u32, y: u32, width: u32) -> Skin {
        let id = x as usize + y as usize * width as usize + 1;
        Skin {
            id,
            skin,
            region: None,
            x,
            y,
        }
    }

    /// 1-based position in raster order
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub fn is_skin(&self) -> bool {
        self.skin
    }

    /// The provisional region, set for skin pixels only
    #[inline]
    pub fn region(&self) -> Option<usize> {
        self.region
    }

    #[inline]
    pub fn x(&self) -> u32 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> u32 {
        self.y
    }
}

/// Output of the labeling pass
#[derive(Debug, Clone, Default)]
pub struct Labeling {
    /// Provisional regions, indexed by provisional region id
    pub detected_regions: Vec<Vec<Skin>>,
    /// Pairs of provisional regions that turned out to be connected
    pub merges: Vec<MergeInstruction>,
    pub skin_pixels: usize,
}

/// State of a single labeling run
struct LabelContext {
    width: u32,
    skin_map: Vec<Skin>,
    detected_regions: Vec<Vec<Skin>>,
    merges: Vec<MergeInstruction>,
    last_merge: Option<MergeInstruction>,
    skin_pixels: usize,
}

impl LabelContext {
    fn new(width: u32, height: u32) -> LabelContext {
        LabelContext {
            width,
            skin_map: Vec::with_capacity(width as usize * height as usize),
            detected_regions: Vec::new(),
            merges: Vec::new(),
            last_merge: None,
            skin_pixels: 0,
        }
    }

    /// Region of an already visited pixel, `None` if it isn't skin
    #[inline]
    fn region_at(&self, x: u32, y: u32) -> Option<usize> {
        let index = x as usize + y as usize * self.width as usize;
        self.skin_map[index].region
    }

    /// Left, upper-left, upper and upper-right, skipping everything outside the image
    fn causal_neighbors(&self, x: u32, y: u32) -> [Option<(u32, u32)>; 4] {
        let left = if x > 0 { Some((x - 1, y)) } else { None };
        if y == 0 {
            return [left, None, None, None];
        }
        let upper_left = if x > 0 { Some((x - 1, y - 1)) } else { None };
        let upper = Some((x, y - 1));
        let upper_right = if x + 1 < self.width {
            Some((x + 1, y - 1))
        } else {
            None
        };
        [left, upper_left, upper, upper_right]
    }

    fn add_merge(&mut self, from: usize, to: usize) {
        let instruction = MergeInstruction::new(from, to);
        if let Some(last) = &self.last_merge {
            if last.same_pair(&instruction) {
                return;
            }
        }
        trace!("merge region {} with {}", from, to);
        self.last_merge = Some(instruction);
        self.merges.push(instruction);
    }

    fn visit(&mut self, x: u32, y: u32, skin: bool) {
        let mut pixel = Skin::new(skin, x, y, self.width);

        if !skin {
            self.skin_map.push(pixel);
            return;
        }
        self.skin_pixels += 1;

        let mut region = None;
        for (nx, ny) in self.causal_neighbors(x, y).iter().flatten() {
            let neighbor = match self.region_at(*nx, *ny) {
                Some(neighbor) => neighbor,
                None => continue,
            };

            if let Some(current) = region {
                if current != neighbor {
                    self.add_merge(current, neighbor);
                }
            }
            region = Some(neighbor);
        }

        let region = match region {
            Some(region) => region,
            None => {
                self.detected_regions.push(Vec::new());
                self.detected_regions.len() - 1
            }
        };
        trace!("skin at x={}, y={} joins region {}", x, y, region);

        pixel.region = Some(region);
        self.skin_map.push(pixel);
        self.detected_regions[region].push(pixel);
    }

    fn finish(self) -> Labeling {
        Labeling {
            detected_regions: self.detected_regions,
            merges: self.merges,
            skin_pixels: self.skin_pixels,
        }
    }
}

/// Classify every pixel and group skin pixels into provisional regions.
///
/// This is a single raster-order pass, every skin pixel joins the region of
/// the last labeled neighbor it sees. Neighbors from different regions are
/// recorded as merge instructions instead of being relabeled.
pub fn label(buffer: &RgbBuffer<'_>) -> Labeling {
    let (width, height) = (buffer.width(), buffer.height());
    let mut ctx = LabelContext::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let skin = buffer.get(x, y).map(classify_skin).unwrap_or(false);
            ctx.visit(x, y, skin);
        }
    }

    let labeling = ctx.finish();
    debug!(
        "labeled {} skin pixels into {} provisional regions, {} merges pending",
        labeling.skin_pixels,
        labeling.detected_regions.len(),
        labeling.merges.len()
    );
    labeling
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const SKIN: Rgb<u8> = Rgb([200, 80, 60]);

    fn image_from(rows: &[&str]) -> RgbImage {
        let width = rows[0].len() as u32;
        let height = rows.len() as u32;
        let mut img = RgbImage::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    img.put_pixel(x as u32, y as u32, SKIN);
                }
            }
        }
        img
    }

    fn label_rows(rows: &[&str]) -> Labeling {
        let img = image_from(rows);
        let buffer = RgbBuffer::from_image(&img).unwrap();
        label(&buffer)
    }

    #[test]
    fn test_skin_id() {
        let px = Skin::new(true, 0, 0, 10);
        assert_eq!(px.id(), 1);
        let px = Skin::new(true, 3, 2, 10);
        assert_eq!(px.id(), 24);
        assert_eq!(px.region(), None);
    }

    #[test]
    fn test_no_skin() {
        let labeling = label_rows(&["....", "....", "...."]);
        assert_eq!(labeling.skin_pixels, 0);
        assert!(labeling.detected_regions.is_empty());
        assert!(labeling.merges.is_empty());
    }

    #[test]
    fn test_single_blob() {
        let labeling = label_rows(&[".##.", ".##.", "...."]);
        assert_eq!(labeling.detected_regions.len(), 1);
        assert_eq!(labeling.detected_regions[0].len(), 4);
        assert!(labeling.merges.is_empty());
        for px in &labeling.detected_regions[0] {
            assert_eq!(px.region(), Some(0));
            assert!(px.is_skin());
        }
    }

    #[test]
    fn test_diagonal_upper_right() {
        let labeling = label_rows(&[".#", "#."]);
        assert_eq!(labeling.detected_regions.len(), 1);
        assert_eq!(labeling.detected_regions[0].len(), 2);
    }

    #[test]
    fn test_no_wrap_around_rows() {
        // the last pixel of a row is not a neighbor of the first pixel of the next one
        let labeling = label_rows(&["..#", "#.."]);
        assert_eq!(labeling.detected_regions.len(), 2);
        assert!(labeling.merges.is_empty());
    }

    #[test]
    fn test_u_shape_emits_merge() {
        let labeling = label_rows(&["#...#", "#...#", "#####"]);
        assert_eq!(labeling.detected_regions.len(), 2);
        assert_eq!(labeling.merges, vec![MergeInstruction::new(0, 1)]);
    }

    #[test]
    fn test_duplicate_merge_elided() {
        // the bottom row keeps seeing regions 0 and 1 side by side
        let labeling = label_rows(&["#.#", "###", "##."]);
        assert_eq!(labeling.detected_regions.len(), 2);
        assert_eq!(labeling.merges, vec![MergeInstruction::new(0, 1)]);
    }

    #[test]
    fn test_region_sizes_match_skin_pixels() {
        let labeling = label_rows(&[
            "#.#.#.##",
            ".#.#..#.",
            "##..####",
            "...#...#",
            "#.#.#.#.",
        ]);
        let total: usize = labeling.detected_regions.iter().map(Vec::len).sum();
        assert_eq!(total, labeling.skin_pixels);
        assert_eq!(total, 20);
    }
}
