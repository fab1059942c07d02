use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    classify::types::{BatchReport, ClassifierConfig, ImageFailure, TokenAnalysis},
    codes::{ResultMatrix, ResultRow, map_codes},
    color::quadrant_colors,
    common::error::{ClassificationError, Result},
    geometry::GeometryNormalizer,
    raster::{HsvImage, ImageCrateReader, RasterImage, RasterReader},
    report::{ReportWriter, XmlReportWriter, write_report_file},
    texture::analyze_pairs,
};

pub struct TokenPipeline<R: RasterReader, W: ReportWriter> {
    reader: R,
    writer: W,
    config: ClassifierConfig,
}

impl TokenPipeline<ImageCrateReader, XmlReportWriter> {
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        Self::with_custom(ImageCrateReader, XmlReportWriter, config)
    }
}

impl<R: RasterReader, W: ReportWriter> TokenPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            reader,
            writer,
            config,
        })
    }

    fn normalizer(&self) -> GeometryNormalizer {
        GeometryNormalizer::new(
            self.config.target_height,
            self.config.cut_width,
            self.config.width_policy,
        )
    }

    /// Runs every stage on a decoded image. Nothing is kept on failure.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn analyze_image(&self, image: &RasterImage) -> Result<TokenAnalysis> {
        let token = {
            let _span = tracing::info_span!("normalize").entered();
            self.normalizer().normalize(image)?
        };

        let dominant = {
            let _span = tracing::info_span!("quadrant_colors").entered();
            quadrant_colors(&HsvImage::from_rgb(&token.canonical), &self.config.color_table)
        };

        let readings = {
            let _span = tracing::info_span!("texture").entered();
            analyze_pairs(&HsvImage::from_rgb(&token.strip), &dominant, &self.config.color_table)
        };

        let row = {
            let _span = tracing::info_span!("codes").entered();
            map_codes(&readings)
        };

        info!(%row, "Token classified");
        Ok(TokenAnalysis {
            bounds: token.bounds,
            dominant,
            readings,
            row,
        })
    }

    pub fn classify_image(&self, image: &RasterImage) -> Result<ResultRow> {
        Ok(self.analyze_image(image)?.row)
    }

    #[instrument(skip(self, input_data), fields(input_size = input_data.len()))]
    pub fn classify(&self, input_data: &[u8]) -> Result<ResultRow> {
        let image = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_raster(input_data)?
        };
        self.classify_image(&image)
    }

    #[instrument(skip(self, input_path))]
    pub fn classify_file<P: AsRef<Path>>(&self, input_path: P) -> Result<ResultRow> {
        let input_path = input_path.as_ref();
        info!(input = %input_path.display(), "Processing image");

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ClassificationError::ImageLoadFailure(format!("{}: {}", input_path.display(), e))
            })?
        };

        self.classify(&input_data)
    }

    /// Classifies the images in input order.
    ///
    /// Per-image failures are recorded in the report and the batch goes on,
    /// unless `fail_fast` is set, in which case the first one is returned.
    pub fn classify_batch<P: AsRef<Path>>(&self, input_paths: &[P]) -> Result<BatchReport> {
        let mut matrix = ResultMatrix::new();
        let mut failures = Vec::new();

        for (index, input_path) in input_paths.iter().enumerate() {
            let input_path = input_path.as_ref();
            match self.classify_file(input_path) {
                Ok(row) => matrix.push(row),
                Err(error) if self.config.fail_fast || !error.is_per_image() => return Err(error),
                Err(error) => {
                    warn!(index, input = %input_path.display(), %error, "Image skipped");
                    failures.push(ImageFailure {
                        index,
                        path: PathBuf::from(input_path),
                        error,
                    });
                }
            }
        }

        info!(
            classified = matrix.len(),
            failed = failures.len(),
            "Batch complete"
        );
        Ok(BatchReport { matrix, failures })
    }

    /// Writes the matrix next to `base_path`, never overwriting an existing file.
    pub fn save_report<P: AsRef<Path>>(&self, matrix: &ResultMatrix, base_path: P) -> Result<PathBuf> {
        write_report_file(&self.writer, matrix, base_path.as_ref())
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ClassifierConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
