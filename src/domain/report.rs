//! Report file handle
//!
//! This module defines the handle for a user-selected report file. Accepted
//! file types (PDF and raster images) are enforced at selection time through
//! the constructor, never deferred to extraction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// File extensions accepted for report uploads
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// Handle to a user-chosen report file
///
/// Holds the display name and on-disk location of a scanned or photographed
/// report. A handle is owned exclusively by its upload session and is
/// replaced wholesale on re-selection, never mutated in place.
///
/// # Examples
///
/// ```
/// use krishi::domain::report::ReportFile;
///
/// let file = ReportFile::new("report.pdf", "/tmp/report.pdf").unwrap();
/// assert_eq!(file.name(), "report.pdf");
///
/// assert!(ReportFile::new("report.docx", "/tmp/report.docx").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFile {
    name: String,
    path: PathBuf,
}

impl ReportFile {
    /// Creates a handle for a selected report file
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the file, including its extension
    /// * `path` - Location of the file contents on disk
    ///
    /// # Errors
    ///
    /// Returns an error if the file name has no extension or the extension
    /// is not one of [`ACCEPTED_EXTENSIONS`].
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Result<Self, String> {
        let name = name.into();
        let extension = Path::new(&name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension {
            Some(ext) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(Self {
                name,
                path: path.into(),
            }),
            Some(ext) => Err(format!(
                "Unsupported report file type .{ext}. Accepted types: .pdf, .jpg, .jpeg, .png"
            )),
            None => Err(format!(
                "Report file {name} has no extension. Accepted types: .pdf, .jpg, .jpeg, .png"
            )),
        }
    }

    /// Display name of the file, including its extension
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Location of the file contents on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lower-cased file extension
    pub fn extension(&self) -> String {
        Path::new(&self.name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase())
            .unwrap_or_default()
    }
}

impl fmt::Display for ReportFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("report.pdf"; "pdf")]
    #[test_case("scan.jpg"; "jpg")]
    #[test_case("scan.jpeg"; "jpeg")]
    #[test_case("photo.png"; "png")]
    #[test_case("REPORT.PDF"; "uppercase extension")]
    fn test_accepted_file_types(name: &str) {
        assert!(ReportFile::new(name, "/tmp/report").is_ok());
    }

    #[test_case("report.docx"; "word document")]
    #[test_case("report.txt"; "plain text")]
    #[test_case("archive.tar.gz"; "archive")]
    #[test_case("report"; "no extension")]
    fn test_rejected_file_types(name: &str) {
        assert!(ReportFile::new(name, "/tmp/report").is_err());
    }

    #[test]
    fn test_rejection_message_names_accepted_types() {
        let err = ReportFile::new("report.docx", "/tmp/report.docx").unwrap_err();
        assert!(err.contains(".pdf"));
        assert!(err.contains(".docx"));
    }

    #[test]
    fn test_report_file_accessors() {
        let file = ReportFile::new("report.pdf", "/data/uploads/report.pdf").unwrap();
        assert_eq!(file.name(), "report.pdf");
        assert_eq!(file.path(), Path::new("/data/uploads/report.pdf"));
        assert_eq!(file.extension(), "pdf");
    }

    #[test]
    fn test_report_file_display() {
        let file = ReportFile::new("scan.jpeg", "/tmp/scan.jpeg").unwrap();
        assert_eq!(format!("{}", file), "scan.jpeg");
    }
}
