use tracing::trace;

use crate::image_pipeline::color::types::{ColorCategory, ColorRange, ColorTable};
use crate::image_pipeline::raster::{HsvImage, HsvPixel};

pub const QUADRANT_COUNT: usize = 4;

/// Number of pixels whose every channel lies inside `range`.
pub fn count_in_range(pixels: &[HsvPixel], range: &ColorRange) -> usize {
    pixels.iter().filter(|p| range.contains(p)).count()
}

/// Matching-pixel counts for every category of a region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorCounts([usize; 5]);

impl ColorCounts {
    pub fn get(&self, category: ColorCategory) -> usize {
        self.0[category.index()]
    }

    /// Category with the highest count, ties going to the earlier entry of
    /// [`ColorCategory::PRIORITY`]. `None` when nothing matched at all.
    pub fn dominant(&self) -> Option<ColorCategory> {
        let mut best: Option<(ColorCategory, usize)> = None;
        for category in ColorCategory::PRIORITY {
            let count = self.get(category);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, top)) if top >= count => {}
                _ => best = Some((category, count)),
            }
        }
        best.map(|(category, _)| category)
    }
}

pub fn count_categories(pixels: &[HsvPixel], table: &ColorTable) -> ColorCounts {
    let mut counts = ColorCounts::default();
    for (category, range) in table.ranges() {
        counts.0[category.index()] += count_in_range(pixels, range);
    }
    counts
}

/// True if any marker color (everything except gray) has at least one pixel.
pub fn has_marker_color(pixels: &[HsvPixel], table: &ColorTable) -> bool {
    table
        .ranges()
        .iter()
        .filter(|(category, _)| category.is_marker())
        .any(|(_, range)| pixels.iter().any(|p| range.contains(p)))
}

/// Row bounds `[top, bottom)` of quadrant `index`; the last band takes the remainder.
pub fn quadrant_bounds(height: u32, index: usize) -> (u32, u32) {
    let n = QUADRANT_COUNT as u32;
    let i = index as u32;
    let top = i * height / n;
    let bottom = if i + 1 == n { height } else { (i + 1) * height / n };
    (top, bottom)
}

/// Dominant color of each horizontal quadrant, top to bottom.
pub fn quadrant_colors(image: &HsvImage, table: &ColorTable) -> [Option<ColorCategory>; QUADRANT_COUNT] {
    std::array::from_fn(|index| {
        let (top, bottom) = quadrant_bounds(image.height(), index);
        let counts = count_categories(image.rows(top, bottom), table);
        let dominant = counts.dominant();
        trace!(quadrant = index, ?counts, ?dominant, "quadrant color counts");
        dominant
    })
}
