//! Token classification pipeline module
//!
//! This module turns photos of a layered token face into rows of short
//! codes, with separate modules for decoding, geometric normalization,
//! color and texture analysis, code mapping and report writing.

pub mod raster;
pub mod color;
pub mod geometry;
pub mod texture;
pub mod codes;
pub mod report;
pub mod classify;
pub mod common;

pub use common::{
    ClassificationError,
    Result,
};

pub use raster::{
    HsvImage,
    ImageCrateReader,
    RasterImage,
    RasterReader,
};

pub use color::{
    ColorCategory,
    ColorRange,
    ColorTable,
};

pub use geometry::{
    GeometryNormalizer,
    NormalizedToken,
    WidthPolicy,
};

pub use texture::{
    PairReading,
    Position,
};

pub use codes::{
    ResultMatrix,
    ResultRow,
};

pub use report::{
    ReportWriter,
    XmlReportWriter,
};

pub use classify::{
    BatchReport,
    ClassifierConfig,
    ClassifierConfigBuilder,
    ImageFailure,
    TokenAnalysis,
    TokenPipeline,
};
