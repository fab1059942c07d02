use tracing::trace;

use crate::image_pipeline::color::{ColorCategory, ColorTable, QUADRANT_COUNT, has_marker_color};
use crate::image_pipeline::raster::HsvImage;
use crate::image_pipeline::texture::types::{PairReading, Position};

pub const SLICE_COUNT: usize = 8;

/// Row bounds `[top, bottom)` of slice `index`. Slices are `height / 8`
/// rows tall; leftover rows at the bottom belong to no slice.
pub fn slice_bounds(height: u32, index: usize) -> (u32, u32) {
    let slice_height = height / SLICE_COUNT as u32;
    let top = index as u32 * slice_height;
    (top, top + slice_height)
}

/// Marker-color presence for each of the 8 slices of the strip, top to bottom.
pub fn slice_markers(strip: &HsvImage, table: &ColorTable) -> [bool; SLICE_COUNT] {
    std::array::from_fn(|index| {
        let (top, bottom) = slice_bounds(strip.height(), index);
        has_marker_color(strip.rows(top, bottom), table)
    })
}

/// Position label of each consecutive slice pair `(0,1) (2,3) (4,5) (6,7)`.
pub fn pair_positions(markers: &[bool; SLICE_COUNT]) -> [Position; QUADRANT_COUNT] {
    std::array::from_fn(|pair| Position::from_markers(markers[2 * pair], markers[2 * pair + 1]))
}

/// Reads the strip and pairs each position label with the quadrant of the same index.
pub fn analyze_pairs(
    strip: &HsvImage,
    dominant: &[Option<ColorCategory>; QUADRANT_COUNT],
    table: &ColorTable,
) -> [PairReading; QUADRANT_COUNT] {
    let markers = slice_markers(strip, table);
    trace!(?markers, "slice marker presence");
    let positions = pair_positions(&markers);

    std::array::from_fn(|i| PairReading {
        color: dominant[i],
        position: positions[i],
    })
}
