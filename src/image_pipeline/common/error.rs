use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassificationError {
    #[error("Failed to load image: {0}")]
    ImageLoadFailure(String),

    #[error("No token boundary detected in {width}x{height} image")]
    NoBoundaryDetected { width: u32, height: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to write report: {0}")]
    ReportWriteFailure(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClassificationError {
    /// Whether the error concerns a single image only, so a batch may continue past it.
    pub fn is_per_image(&self) -> bool {
        matches!(
            self,
            ClassificationError::ImageLoadFailure(_) | ClassificationError::NoBoundaryDetected { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ClassificationError>;
