use image::imageops::{self, FilterType};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;
use tracing::{debug, trace};

use crate::image_pipeline::common::error::{ClassificationError, Result};
use crate::image_pipeline::geometry::boundary::{BoundingRect, external_contours, largest_boundary};
use crate::image_pipeline::raster::{RasterImage, to_gray};

/// Sigma of a 5x5 Gaussian kernel.
pub const BLUR_SIGMA: f32 = 1.1;
pub const CANNY_LOW_THRESHOLD: f32 = 50.0;
pub const CANNY_HIGH_THRESHOLD: f32 = 150.0;
/// Canonical width never exceeds this multiple of the target height.
pub const MAX_ASPECT_RATIO: u32 = 8;

/// Which aspect ratio the canonical width is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidthPolicy {
    /// Keep the cropped token's own proportions.
    #[default]
    FromCrop,
    /// Use the full source photo's proportions, stretching the crop.
    FromSource,
}

/// Token cropped to its boundary and rescaled, plus its central strip.
#[derive(Debug, Clone)]
pub struct NormalizedToken {
    pub canonical: RasterImage,
    pub strip: RasterImage,
    /// Boundary rectangle in source-image coordinates.
    pub bounds: BoundingRect,
}

/// Width that keeps `width:height` when the height becomes `target_height`.
/// Truncates, never returns zero and is capped at
/// `MAX_ASPECT_RATIO * target_height`.
pub fn canonical_width(target_height: u32, width: u32, height: u32) -> u32 {
    if height == 0 {
        return 1;
    }
    let max_width = (target_height as u64 * MAX_ASPECT_RATIO as u64).clamp(1, u32::MAX as u64);
    let scaled = target_height as u64 * width as u64 / height as u64;
    scaled.clamp(1, max_width) as u32
}

/// Vertical band of width `min(cut_width, image width)`, horizontally centred.
pub fn center_strip(image: &RasterImage, cut_width: u32) -> RasterImage {
    let width = image.width();
    let strip_width = cut_width.min(width);
    let left = width / 2 - strip_width / 2;
    imageops::crop_imm(image, left, 0, strip_width, image.height()).to_image()
}

pub struct GeometryNormalizer {
    target_height: u32,
    cut_width: u32,
    width_policy: WidthPolicy,
}

impl GeometryNormalizer {
    pub fn new(target_height: u32, cut_width: u32, width_policy: WidthPolicy) -> Self {
        Self {
            target_height,
            cut_width,
            width_policy,
        }
    }

    /// Bounding rectangle of the largest external contour of the edge map.
    ///
    /// # Errors
    ///
    /// * `ClassificationError::NoBoundaryDetected` - no contour at least
    ///   `MIN_BOUNDARY_SIDE` pixels wide and tall
    pub fn detect_boundary(&self, image: &RasterImage) -> Result<BoundingRect> {
        let gray = to_gray(image);
        let smoothed = gaussian_blur_f32(&gray, BLUR_SIGMA);
        let edges = canny(&smoothed, CANNY_LOW_THRESHOLD, CANNY_HIGH_THRESHOLD);
        let contours = external_contours(&edges);
        trace!(contours = contours.len(), "external contours found");

        let boundary = largest_boundary(&contours).ok_or(ClassificationError::NoBoundaryDetected {
            width: image.width(),
            height: image.height(),
        })?;

        debug!(area = boundary.area, bounds = ?boundary.rect, "token boundary");
        Ok(boundary.rect)
    }

    pub fn normalize(&self, image: &RasterImage) -> Result<NormalizedToken> {
        let bounds = self.detect_boundary(image)?;

        let cropped = imageops::crop_imm(image, bounds.x, bounds.y, bounds.width, bounds.height).to_image();

        let (ref_width, ref_height) = match self.width_policy {
            WidthPolicy::FromCrop => cropped.dimensions(),
            WidthPolicy::FromSource => image.dimensions(),
        };
        let width = canonical_width(self.target_height, ref_width, ref_height);

        let canonical = imageops::resize(&cropped, width, self.target_height, FilterType::Triangle);
        let strip = center_strip(&canonical, self.cut_width);

        debug!(
            canonical_width = canonical.width(),
            canonical_height = canonical.height(),
            strip_width = strip.width(),
            "token normalized"
        );

        Ok(NormalizedToken {
            canonical,
            strip,
            bounds,
        })
    }
}
