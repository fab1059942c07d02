//! Collision-free report destinations.
//!
//! An existing report is never overwritten: `out.xml` is tried first, then
//! `out1.xml`, `out2.xml`, ... until a name is free. Files are opened with
//! `create_new`, so a name taken between probing and writing is skipped too.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::image_pipeline::codes::ResultMatrix;
use crate::image_pipeline::common::error::{ClassificationError, Result};
use crate::image_pipeline::report::writer::ReportWriter;

pub const MAX_SUFFIX: u32 = 10_000;

/// `base` itself for `n == 0`, otherwise `n` inserted before the extension.
pub fn numbered_path(base: &Path, n: u32) -> PathBuf {
    if n == 0 {
        return base.to_path_buf();
    }
    let stem = base.file_stem().map(|s| s.to_string_lossy()).unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}{n}"),
    };
    base.with_file_name(name)
}

fn create_unique(base: &Path) -> Result<(File, PathBuf)> {
    if let Some(parent) = base.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            ClassificationError::ReportWriteFailure(format!("{}: {}", parent.display(), e))
        })?;
    }

    for n in 0..=MAX_SUFFIX {
        let path = numbered_path(base, n);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((file, path)),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                debug!("{} exists, trying next suffix", path.display());
            }
            Err(e) => {
                return Err(ClassificationError::ReportWriteFailure(format!(
                    "{}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    Err(ClassificationError::ReportWriteFailure(format!(
        "no free file name for {} after {} attempts",
        base.display(),
        MAX_SUFFIX
    )))
}

/// Writes the report next to `base` without overwriting anything and
/// returns the path actually used.
pub fn write_report_file<W: ReportWriter + ?Sized>(
    writer: &W,
    matrix: &ResultMatrix,
    base: &Path,
) -> Result<PathBuf> {
    let (file, path) = create_unique(base)?;

    let mut output = BufWriter::new(file);
    let written = writer.write_report(matrix, &mut output).and_then(|()| {
        output
            .flush()
            .map_err(|e| ClassificationError::ReportWriteFailure(format!("{}: {}", path.display(), e)))
    });
    drop(output);

    if let Err(error) = written {
        // a half-written report must not keep its name taken
        if let Err(e) = fs::remove_file(&path) {
            warn!("could not remove incomplete report {}: {}", path.display(), e);
        }
        return Err(error);
    }

    info!(path = %path.display(), rows = matrix.len(), "Report saved");
    Ok(path)
}
