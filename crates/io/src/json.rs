//! JSON encoding of templates and range summaries.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use lunaria_calendar::RitualYearTemplate;
use lunaria_range::RangeSummary;
use serde::Serialize;
use tracing::debug;

use crate::error::IoError;

/// Writes `template` to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created or written and
/// [`IoError::Json`] if encoding fails.
pub fn write_template_json(path: &Path, template: &RitualYearTemplate) -> Result<(), IoError> {
    write_json(path, template)?;
    debug!(path = %path.display(), base_year = template.base_year(), "wrote template");
    Ok(())
}

/// Reads a template from `path` and checks its 13×28 shape.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if `path` does not exist,
/// [`IoError::Json`] if the content does not decode and
/// [`IoError::InvalidTemplate`] if the decoded template is malformed.
pub fn read_template_json(path: &Path) -> Result<RitualYearTemplate, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|e| IoError::io(path, e))?;
    let template: RitualYearTemplate = serde_json::from_reader(BufReader::new(file))?;
    template.validate()?;
    debug!(path = %path.display(), base_year = template.base_year(), "read template");
    Ok(template)
}

/// Writes a range summary to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::Json`] on failure.
pub fn write_summary_json(path: &Path, summary: &RangeSummary) -> Result<(), IoError> {
    write_json(path, summary)?;
    debug!(path = %path.display(), n_days = summary.len(), "wrote range summary");
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), IoError> {
    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n").map_err(|e| IoError::io(path, e))?;
    writer.flush().map_err(|e| IoError::io(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let err = read_template_json(&path).unwrap_err();
        assert!(matches!(err, IoError::FileNotFound { .. }));
    }

    #[test]
    fn garbage_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_template_json(&path).unwrap_err();
        assert!(matches!(err, IoError::Json { .. }));
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no/such/dir/t.json");
        let t = lunaria_calendar::TemplateCache::standard().get(2025).unwrap();
        let err = write_template_json(&path, &t).unwrap_err();
        assert!(matches!(err, IoError::Io { .. }));
    }
}
