//! Saving the bundled resume to disk.

use anyhow::{Context, Result};
use rfolio::content::BUNDLED_RESUME;
use std::path::{Path, PathBuf};

/// Asks the user where to save the resume and writes it there.
///
/// The dialog starts in the download directory. Returns `Ok(None)` when the
/// dialog is cancelled.
pub fn save_resume(file_name: &str) -> Result<Option<PathBuf>> {
    let mut dialog = rfd::FileDialog::new()
        .set_file_name(file_name)
        .add_filter("PDF Document", &["pdf"]);

    if let Some(dir) = dirs::download_dir() {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.save_file() else {
        tracing::debug!("resume save cancelled");
        return Ok(None);
    };

    write_resume(&path)?;
    Ok(Some(path))
}

/// Writes the bundled resume to `path`, replacing any existing file.
pub fn write_resume(path: &Path) -> Result<()> {
    std::fs::write(path, BUNDLED_RESUME)
        .with_context(|| format!("Failed to write resume to {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = BUNDLED_RESUME.len(), "saved resume");
    Ok(())
}

/// `file://` URL for opening a saved file in the browser.
pub fn file_url(path: &Path) -> String {
    let path = path.to_string_lossy().replace('\\', "/");
    if path.starts_with('/') {
        format!("file://{}", path)
    } else {
        format!("file:///{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_resume_copies_bundled_bytes() {
        let path = std::env::temp_dir().join(format!("rfolio_resume_{}.pdf", std::process::id()));

        write_resume(&path).unwrap();
        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(written, BUNDLED_RESUME);
        assert!(written.starts_with(b"%PDF"));
    }

    #[test]
    fn test_file_url() {
        assert_eq!(file_url(Path::new("/home/sam/Downloads/cv.pdf")), "file:///home/sam/Downloads/cv.pdf");
        assert_eq!(file_url(Path::new("C:\\Users\\sam\\cv.pdf")), "file:///C:/Users/sam/cv.pdf");
    }

    #[test]
    fn test_write_resume_reports_bad_path() {
        let path = std::env::temp_dir().join("rfolio_missing_dir").join("nested").join("resume.pdf");
        let err = write_resume(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to write resume"));
    }
}
