mod pipeline;
mod types;

#[cfg(test)]
mod tests;

pub use pipeline::TokenPipeline;
pub use types::{
    BatchReport, ClassifierConfig, ClassifierConfigBuilder, DEFAULT_CUT_WIDTH, DEFAULT_TARGET_HEIGHT,
    ImageFailure, TokenAnalysis,
};
