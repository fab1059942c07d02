use std::io::Write;

use crate::image_pipeline::codes::ResultMatrix;
use crate::image_pipeline::common::error::Result;

pub trait ReportWriter {
    fn write_report(&self, matrix: &ResultMatrix, output: &mut dyn Write) -> Result<()>;
}
