//! Texture analysis module
//!
//! Splits the central strip into 8 slices, checks each for marker color,
//! and turns every slice pair into a position label.

mod analyzer;
pub mod types;

pub use analyzer::{SLICE_COUNT, analyze_pairs, pair_positions, slice_bounds, slice_markers};
pub use types::{PairReading, Position};
