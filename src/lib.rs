//! Classifies photos of a layered token face into compact color/position
//! codes and writes them as an XML report.

pub mod image_pipeline;
pub mod logger;
