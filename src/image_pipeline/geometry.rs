//! Geometry normalization module
//!
//! Locates the token in a raw photo (blur, Canny edges, external contours),
//! crops to its bounding rectangle, rescales to the canonical height and
//! cuts the central vertical strip.

mod boundary;
mod normalizer;

pub use boundary::{
    Boundary, BoundingRect, MIN_BOUNDARY_SIDE, external_contours, largest_boundary,
};
pub use normalizer::{
    BLUR_SIGMA, CANNY_HIGH_THRESHOLD, CANNY_LOW_THRESHOLD, GeometryNormalizer, MAX_ASPECT_RATIO,
    NormalizedToken, WidthPolicy, canonical_width, center_strip,
};
