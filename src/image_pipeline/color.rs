//! Color classification module
//!
//! Fixed HSV ranges per color category, pixel counting over regions, and
//! dominant-color selection for the four quadrants of a token face.

mod classifier;
pub mod types;

pub use classifier::{
    ColorCounts, QUADRANT_COUNT, count_categories, count_in_range, has_marker_color,
    quadrant_bounds, quadrant_colors,
};
pub use types::{ColorCategory, ColorRange, ColorTable};
