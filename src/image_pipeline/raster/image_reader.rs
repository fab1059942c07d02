//! Raster reader implementation using the image library.
//!
//! Any container the `image` crate can decode (PNG, JPEG, BMP, ...) is
//! accepted. Alpha and 16-bit samples are flattened to 8-bit RGB so the
//! rest of the pipeline only ever sees three byte channels.

use tracing::debug;

use crate::image_pipeline::common::error::{ClassificationError, Result};
use crate::image_pipeline::raster::reader::RasterReader;
use crate::image_pipeline::raster::types::RasterImage;

/// Raster reader backed by `image::load_from_memory`.
pub struct ImageCrateReader;

impl RasterReader for ImageCrateReader {
    /// Decodes an encoded image into an 8-bit RGB raster.
    ///
    /// # Errors
    ///
    /// * `ClassificationError::ImageLoadFailure` - the bytes are not a
    ///   decodable image, or the image has no pixels
    fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
        debug!("Decoding image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| ClassificationError::ImageLoadFailure(e.to_string()))?;

        let rgb = decoded.to_rgb8();
        if rgb.width() == 0 || rgb.height() == 0 {
            return Err(ClassificationError::ImageLoadFailure(format!(
                "empty image {}x{}",
                rgb.width(),
                rgb.height()
            )));
        }

        debug!("Decoded image: {}x{}", rgb.width(), rgb.height());
        Ok(rgb)
    }
}
