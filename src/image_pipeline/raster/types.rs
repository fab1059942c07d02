//! Raster image types

use image::{GrayImage, Luma, RgbImage};
use palette::{FromColor, Hsv, Srgb};

/// 3-channel 8-bit color image as decoded from the source.
///
/// Every stage produces a new buffer; nothing downstream mutates a
/// `RasterImage` it was handed.
pub type RasterImage = RgbImage;

/// A single HSV pixel: hue in `0..=180`, saturation and value in `0..=255`.
pub type HsvPixel = [u8; 3];

/// Image converted to the 8-bit HSV convention used by the color table.
#[derive(Debug, Clone)]
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<HsvPixel>,
}

impl HsvImage {
    pub fn from_rgb(image: &RasterImage) -> Self {
        let pixels = image
            .pixels()
            .map(|p| rgb_to_hsv(p[0], p[1], p[2]))
            .collect();

        Self {
            width: image.width(),
            height: image.height(),
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[HsvPixel] {
        &self.pixels
    }

    /// Pixels of the full-width horizontal band `[top, bottom)`.
    ///
    /// Bounds are clamped to the image height.
    pub fn rows(&self, top: u32, bottom: u32) -> &[HsvPixel] {
        let bottom = bottom.min(self.height);
        let top = top.min(bottom);
        let stride = self.width as usize;
        &self.pixels[top as usize * stride..bottom as usize * stride]
    }
}

/// Converts one RGB pixel to 8-bit HSV.
///
/// Hue is expressed in degrees halved so it fits a byte (`0..=180`).
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> HsvPixel {
    let hsv: Hsv = Hsv::from_color(Srgb::new(r, g, b).into_format::<f32>());
    let hue = hsv.hue.into_positive_degrees() / 2.0;
    [
        hue.round() as u8,
        (hsv.saturation * 255.0).round() as u8,
        (hsv.value * 255.0).round() as u8,
    ]
}

/// Luma with the 0.299/0.587/0.114 weights, in 14-bit fixed point.
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    const SHIFT: u32 = 14;
    let y = r as u32 * 4899 + g as u32 * 9617 + b as u32 * 1868 + (1 << (SHIFT - 1));
    (y >> SHIFT) as u8
}

pub fn to_gray(image: &RasterImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let p = image.get_pixel(x, y);
        Luma([rgb_to_gray(p[0], p[1], p[2])])
    })
}
