use std::io::Write;

use tracing::debug;

use crate::image_pipeline::codes::ResultMatrix;
use crate::image_pipeline::common::error::{ClassificationError, Result};
use crate::image_pipeline::report::writer::ReportWriter;

const INDENT: &str = "    ";

/// Writes the matrix as an `EloMaluco` XML document: one `row` element per
/// result row under `EstadoAtual`, one `col` element per code.
pub struct XmlReportWriter;

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl XmlReportWriter {
    pub fn render(&self, matrix: &ResultMatrix) -> String {
        let mut xml = String::from("<?xml version=\"1.0\" ?>\n<EloMaluco>\n");

        if matrix.is_empty() {
            xml.push_str(&format!("{INDENT}<EstadoAtual/>\n"));
        } else {
            xml.push_str(&format!("{INDENT}<EstadoAtual>\n"));
            for row in matrix {
                xml.push_str(&format!("{INDENT}{INDENT}<row>\n"));
                for code in row.codes() {
                    xml.push_str(&format!(
                        "{INDENT}{INDENT}{INDENT}<col>{}</col>\n",
                        escape_text(code)
                    ));
                }
                xml.push_str(&format!("{INDENT}{INDENT}</row>\n"));
            }
            xml.push_str(&format!("{INDENT}</EstadoAtual>\n"));
        }

        xml.push_str("</EloMaluco>\n");
        xml
    }
}

impl ReportWriter for XmlReportWriter {
    fn write_report(&self, matrix: &ResultMatrix, output: &mut dyn Write) -> Result<()> {
        debug!("Rendering XML report with {} rows", matrix.len());

        output
            .write_all(self.render(matrix).as_bytes())
            .map_err(|e| ClassificationError::ReportWriteFailure(e.to_string()))?;

        debug!("XML report written");
        Ok(())
    }
}
