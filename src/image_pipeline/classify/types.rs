//! Classification configuration and result types

use std::path::PathBuf;

use crate::image_pipeline::codes::{ResultMatrix, ResultRow};
use crate::image_pipeline::color::{ColorCategory, ColorTable, QUADRANT_COUNT};
use crate::image_pipeline::common::error::{ClassificationError, Result};
use crate::image_pipeline::geometry::{BoundingRect, WidthPolicy};
use crate::image_pipeline::texture::{PairReading, SLICE_COUNT};

pub const DEFAULT_TARGET_HEIGHT: u32 = 800;
pub const DEFAULT_CUT_WIDTH: u32 = 60;

/// Configuration for token classification
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Height every token crop is rescaled to
    pub target_height: u32,
    /// Requested width of the central strip; clamped to the canonical width
    pub cut_width: u32,
    /// Aspect ratio the canonical width is derived from
    pub width_policy: WidthPolicy,
    /// HSV ranges for every color category
    pub color_table: ColorTable,
    /// Abort a batch on the first failed image instead of recording it
    pub fail_fast: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            target_height: DEFAULT_TARGET_HEIGHT,
            cut_width: DEFAULT_CUT_WIDTH,
            width_policy: WidthPolicy::default(),
            color_table: ColorTable::default(),
            fail_fast: false,
        }
    }
}

impl ClassifierConfig {
    pub fn builder() -> ClassifierConfigBuilder {
        ClassifierConfigBuilder::default()
    }

    /// Rejects settings that would leave a slice or the strip without pixels.
    pub fn validate(&self) -> Result<()> {
        if self.target_height < SLICE_COUNT as u32 {
            return Err(ClassificationError::InvalidConfiguration(format!(
                "target height {} is below the minimum of {} rows",
                self.target_height, SLICE_COUNT
            )));
        }
        if self.cut_width == 0 {
            return Err(ClassificationError::InvalidConfiguration(
                "cut width must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for ClassifierConfig
#[derive(Default)]
pub struct ClassifierConfigBuilder {
    target_height: Option<u32>,
    cut_width: Option<u32>,
    width_policy: Option<WidthPolicy>,
    color_table: Option<ColorTable>,
    fail_fast: Option<bool>,
}

impl ClassifierConfigBuilder {
    pub fn target_height(mut self, height: u32) -> Self {
        self.target_height = Some(height);
        self
    }

    pub fn cut_width(mut self, width: u32) -> Self {
        self.cut_width = Some(width);
        self
    }

    pub fn width_policy(mut self, policy: WidthPolicy) -> Self {
        self.width_policy = Some(policy);
        self
    }

    pub fn color_table(mut self, table: ColorTable) -> Self {
        self.color_table = Some(table);
        self
    }

    pub fn fail_fast(mut self, enable: bool) -> Self {
        self.fail_fast = Some(enable);
        self
    }

    pub fn build(self) -> ClassifierConfig {
        let default = ClassifierConfig::default();
        ClassifierConfig {
            target_height: self.target_height.unwrap_or(default.target_height),
            cut_width: self.cut_width.unwrap_or(default.cut_width),
            width_policy: self.width_policy.unwrap_or(default.width_policy),
            color_table: self.color_table.unwrap_or(default.color_table),
            fail_fast: self.fail_fast.unwrap_or(default.fail_fast),
        }
    }
}

/// Everything derived from one token image.
#[derive(Debug, Clone)]
pub struct TokenAnalysis {
    /// Token boundary in source-image coordinates
    pub bounds: BoundingRect,
    pub dominant: [Option<ColorCategory>; QUADRANT_COUNT],
    pub readings: [PairReading; QUADRANT_COUNT],
    pub row: ResultRow,
}

/// An image of a batch that produced no row.
#[derive(Debug)]
pub struct ImageFailure {
    /// Position of the image in the input list
    pub index: usize,
    pub path: PathBuf,
    pub error: ClassificationError,
}

/// Outcome of a batch run: rows of the images that succeeded, in input
/// order, and a failure entry for every image that did not.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub matrix: ResultMatrix,
    pub failures: Vec<ImageFailure>,
}

impl BatchReport {
    pub fn processed(&self) -> usize {
        self.matrix.len() + self.failures.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
