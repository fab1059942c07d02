//! Report writing module
//!
//! Serializes a result matrix and stores it without clobbering earlier reports.

mod path;
mod writer;
mod xml_writer;

pub use path::{MAX_SUFFIX, numbered_path, write_report_file};
pub use writer::ReportWriter;
pub use xml_writer::XmlReportWriter;
