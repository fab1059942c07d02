#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};
    use std::sync::{Arc, Mutex};

    use image::{ImageFormat, Rgb};

    use crate::image_pipeline::classify::pipeline::TokenPipeline;
    use crate::image_pipeline::classify::types::ClassifierConfig;
    use crate::image_pipeline::codes::ResultMatrix;
    use crate::image_pipeline::color::ColorCategory;
    use crate::image_pipeline::common::error::{ClassificationError, Result};
    use crate::image_pipeline::geometry::WidthPolicy;
    use crate::image_pipeline::raster::{RasterImage, RasterReader};
    use crate::image_pipeline::report::{ReportWriter, XmlReportWriter};
    use crate::image_pipeline::texture::Position;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const BODY: Rgb<u8> = Rgb([160, 160, 160]);
    const RED: Rgb<u8> = Rgb([255, 60, 60]);
    const WHITE: Rgb<u8> = Rgb([250, 250, 250]);

    /// 120x200 gray token body at (40, 50) on a black 200x300 photo.
    fn token_photo(paint: impl Fn(u32, u32) -> Option<Rgb<u8>>) -> RasterImage {
        RasterImage::from_fn(200, 300, |x, y| {
            if (40..160).contains(&x) && (50..250).contains(&y) {
                paint(x, y).unwrap_or(BODY)
            } else {
                BLACK
            }
        })
    }

    /// Red band across the top fifth of the token.
    fn red_top_token() -> RasterImage {
        token_photo(|_, y| (y < 90).then_some(RED))
    }

    /// Small white patch near the middle, inside slice 5 after normalization.
    fn white_patch_token() -> RasterImage {
        token_photo(|x, y| ((80..120).contains(&x) && (178..198).contains(&y)).then_some(WHITE))
    }

    fn black_photo() -> RasterImage {
        RasterImage::from_pixel(120, 120, BLACK)
    }

    /// Maps fake file contents to synthetic photos.
    struct MockReader;

    impl RasterReader for MockReader {
        fn read_raster(&self, data: &[u8]) -> Result<RasterImage> {
            match data {
                b"red" => Ok(red_top_token()),
                b"white" => Ok(white_patch_token()),
                b"black" => Ok(black_photo()),
                _ => Err(ClassificationError::ImageLoadFailure("Mock decode error".to_string())),
            }
        }
    }

    struct MockWriter {
        should_fail: bool,
        written: Arc<Mutex<Vec<ResultMatrix>>>,
    }

    impl ReportWriter for MockWriter {
        fn write_report(&self, matrix: &ResultMatrix, _output: &mut dyn Write) -> Result<()> {
            if self.should_fail {
                return Err(ClassificationError::ReportWriteFailure("Mock write error".to_string()));
            }
            self.written.lock().unwrap().push(matrix.clone());
            Ok(())
        }
    }

    fn mock_pipeline(config: ClassifierConfig) -> TokenPipeline<MockReader, MockWriter> {
        let writer = MockWriter {
            should_fail: false,
            written: Arc::new(Mutex::new(Vec::new())),
        };
        TokenPipeline::with_custom(MockReader, writer, config).unwrap()
    }

    fn write_inputs(dir: &std::path::Path, contents: &[&[u8]]) -> Vec<std::path::PathBuf> {
        contents
            .iter()
            .enumerate()
            .map(|(i, data)| {
                let path = dir.join(format!("input{i}.img"));
                std::fs::write(&path, data).unwrap();
                path
            })
            .collect()
    }

    #[test]
    fn test_config_builder() {
        let config = ClassifierConfig::builder()
            .target_height(400)
            .cut_width(30)
            .width_policy(WidthPolicy::FromSource)
            .fail_fast(true)
            .build();

        assert_eq!(config.target_height, 400);
        assert_eq!(config.cut_width, 30);
        assert_eq!(config.width_policy, WidthPolicy::FromSource);
        assert!(config.fail_fast);

        let defaults = ClassifierConfig::builder().build();
        assert_eq!(defaults.target_height, 800);
        assert_eq!(defaults.cut_width, 60);
        assert_eq!(defaults.width_policy, WidthPolicy::FromCrop);
        assert!(!defaults.fail_fast);
    }

    #[test]
    fn test_invalid_configuration_fails_fast() {
        for config in [
            ClassifierConfig::builder().target_height(0).build(),
            ClassifierConfig::builder().target_height(7).build(),
            ClassifierConfig::builder().cut_width(0).build(),
        ] {
            let result = TokenPipeline::new(config);
            assert!(matches!(result, Err(ClassificationError::InvalidConfiguration(_))));
        }
        assert!(TokenPipeline::new(ClassifierConfig::builder().target_height(8).build()).is_ok());
    }

    #[test]
    fn test_set_config_rejects_invalid() {
        let mut pipeline = mock_pipeline(ClassifierConfig::default());
        let result = pipeline.set_config(ClassifierConfig::builder().cut_width(0).build());
        assert!(matches!(result, Err(ClassificationError::InvalidConfiguration(_))));
        assert_eq!(pipeline.config().cut_width, 60);

        pipeline
            .set_config(ClassifierConfig::builder().cut_width(20).build())
            .unwrap();
        assert_eq!(pipeline.config().cut_width, 20);
    }

    #[test]
    fn test_red_top_band() {
        let pipeline = mock_pipeline(ClassifierConfig::default());
        let analysis = pipeline.analyze_image(&red_top_token()).unwrap();

        assert_eq!(
            analysis.dominant,
            [
                Some(ColorCategory::Red),
                Some(ColorCategory::Gray),
                Some(ColorCategory::Gray),
                Some(ColorCategory::Gray)
            ]
        );
        assert_eq!(analysis.dominant[0].unwrap().label(), "vermelho");
        assert_eq!(analysis.readings[0].position, Position::Middle);
        assert!(analysis.readings[1..].iter().all(|r| r.position == Position::Empty));
        assert_eq!(analysis.row.codes(), &["vmm", "vzo", "vzo", "vzo"]);
    }

    #[test]
    fn test_marker_in_lower_slice_of_pair() {
        let pipeline = mock_pipeline(ClassifierConfig::default());
        let row = pipeline.classify_image(&white_patch_token()).unwrap();
        assert_eq!(row.codes(), &["vzo", "vzo", "vzoi", "vzo"]);
    }

    #[test]
    fn test_black_image_has_no_row() {
        let pipeline = mock_pipeline(ClassifierConfig::default());
        let result = pipeline.classify(b"black");
        assert!(matches!(result, Err(ClassificationError::NoBoundaryDetected { .. })));
    }

    #[test]
    fn test_reader_failure() {
        let pipeline = mock_pipeline(ClassifierConfig::default());
        let result = pipeline.classify(b"garbage");
        assert!(matches!(result, Err(ClassificationError::ImageLoadFailure(_))));
    }

    #[test]
    fn test_missing_file_is_load_failure() {
        let pipeline = mock_pipeline(ClassifierConfig::default());
        let result = pipeline.classify_file("/definitely/not/here.png");
        assert!(matches!(result, Err(ClassificationError::ImageLoadFailure(_))));
    }

    #[test]
    fn test_batch_keeps_order_and_records_failures() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), &[b"red", b"black", b"white", b"garbage", b"red"]);

        let pipeline = mock_pipeline(ClassifierConfig::default());
        let report = pipeline.classify_batch(&paths).unwrap();

        assert_eq!(report.matrix.len(), 3);
        assert_eq!(report.processed(), 5);
        assert!(!report.is_complete());
        let rows: Vec<_> = report.matrix.iter().map(|r| r.codes()[0].clone()).collect();
        assert_eq!(rows, ["vmm", "vzo", "vmm"]);
        assert!(report.matrix.iter().all(|r| r.codes().len() == 4));

        assert_eq!(report.failures.len(), 2);
        assert_eq!(report.failures[0].index, 1);
        assert_eq!(report.failures[0].path, paths[1]);
        assert!(matches!(
            report.failures[0].error,
            ClassificationError::NoBoundaryDetected { .. }
        ));
        assert_eq!(report.failures[1].index, 3);
        assert!(matches!(
            report.failures[1].error,
            ClassificationError::ImageLoadFailure(_)
        ));
    }

    #[test]
    fn test_batch_fail_fast() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_inputs(dir.path(), &[b"red", b"black", b"red"]);

        let pipeline = mock_pipeline(ClassifierConfig::builder().fail_fast(true).build());
        let result = pipeline.classify_batch(&paths);
        assert!(matches!(result, Err(ClassificationError::NoBoundaryDetected { .. })));
    }

    #[test]
    fn test_save_report_uses_writer() {
        let dir = tempfile::tempdir().unwrap();
        let written = Arc::new(Mutex::new(Vec::new()));
        let writer = MockWriter {
            should_fail: false,
            written: written.clone(),
        };
        let pipeline = TokenPipeline::with_custom(MockReader, writer, ClassifierConfig::default()).unwrap();

        let matrix: ResultMatrix = [pipeline.classify(b"red").unwrap()].into_iter().collect();
        let path = pipeline.save_report(&matrix, dir.path().join("out.xml")).unwrap();

        assert_eq!(path, dir.path().join("out.xml"));
        assert_eq!(written.lock().unwrap().as_slice(), &[matrix]);
    }

    #[test]
    fn test_writer_failure() {
        let dir = tempfile::tempdir().unwrap();
        let writer = MockWriter {
            should_fail: true,
            written: Arc::new(Mutex::new(Vec::new())),
        };
        let pipeline = TokenPipeline::with_custom(MockReader, writer, ClassifierConfig::default()).unwrap();

        let result = pipeline.save_report(&ResultMatrix::new(), dir.path().join("out.xml"));
        assert!(matches!(result, Err(ClassificationError::ReportWriteFailure(_))));
        assert!(!dir.path().join("out.xml").exists());
    }

    #[test]
    fn test_png_files_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("token.png");
        let mut encoded = Vec::new();
        red_top_token()
            .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
            .unwrap();
        std::fs::write(&input, encoded).unwrap();

        let pipeline = TokenPipeline::new(ClassifierConfig::default()).unwrap();
        let report = pipeline.classify_batch(&[&input]).unwrap();
        assert!(report.is_complete());

        let base = dir.path().join("output").join("output.xml");
        let first = pipeline.save_report(&report.matrix, &base).unwrap();
        let second = pipeline.save_report(&report.matrix, &base).unwrap();
        assert_eq!(first, base);
        assert_eq!(second, dir.path().join("output").join("output1.xml"));

        let xml = std::fs::read_to_string(&first).unwrap();
        assert_eq!(xml, XmlReportWriter.render(&report.matrix));
        assert!(xml.contains("<col>vmm</col>"));
    }
}
