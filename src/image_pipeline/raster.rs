//! Raster image module
//!
//! This module provides the decoded color image type, its HSV and
//! intensity views, and format-agnostic decoding.

mod reader;
mod image_reader;
pub mod types;

pub use reader::RasterReader;
pub use image_reader::ImageCrateReader;
pub use types::{HsvImage, HsvPixel, RasterImage, rgb_to_gray, rgb_to_hsv, to_gray};
