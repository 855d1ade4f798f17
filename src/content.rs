//! Bundled portfolio content.
//!
//! Two ordered, immutable collections (experience records and project
//! records) plus the profile block used by the header and link bar. The
//! content is parsed once at startup, either from the JSON compiled into
//! the binary or from a user-supplied override file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const BUNDLED_CONTENT: &str = include_str!("../assets/content.json");

/// Resume bytes shipped with the application.
pub static BUNDLED_RESUME: &[u8] = include_bytes!("../assets/resume.pdf");

/// Errors raised while loading content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read content file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("content is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content has no experience records")]
    Empty,
}

/// Outbound links shown in the link bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    pub github: String,
    pub linkedin: String,
    /// Full `mailto:` URL
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub greeting: String,
    pub headline: String,
    pub description: String,
    pub photo_initials: String,
    pub links: ProfileLinks,
    /// Filename offered when the resume is saved
    pub resume_file_name: String,
    pub skills: Vec<String>,
}

/// One job entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub position: String,
    pub period: String,
    pub details: Vec<String>,
}

/// One project card. Only the project cards panel reads the fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    profile: Profile,
    experiences: Vec<ExperienceRecord>,
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

impl Content {
    /// Parses the content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(BUNDLED_CONTENT)
    }

    /// Loads content from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let json = fs::read_to_string(path).map_err(|source| ContentError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Parses content from a JSON string.
    ///
    /// At least one experience record is required since both layouts open
    /// on the first one.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let Content { profile, experiences, projects } = serde_json::from_str(json)?;
        Self::new(profile, experiences, projects)
    }

    /// Builds content directly from its parts.
    ///
    /// Fails with [`ContentError::Empty`] when `experiences` is empty.
    pub fn new(
        profile: Profile,
        experiences: Vec<ExperienceRecord>,
        projects: Vec<ProjectRecord>,
    ) -> Result<Self, ContentError> {
        if experiences.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(Self { profile, experiences, projects })
    }

    // ===== Read-only accessors =====

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn experiences(&self) -> &[ExperienceRecord] {
        &self.experiences
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_bundled_content_parses() {
        let content = Content::bundled().unwrap();
        assert_eq!(content.experiences().len(), 3);
        assert_eq!(content.experiences()[0].company, "Northwind Labs");
        assert_eq!(content.projects().len(), 3);
        assert_eq!(content.projects()[2].link, None);
        assert!(content.profile().links.email.starts_with("mailto:"));
        assert!(content.profile().resume_file_name.ends_with(".pdf"));
    }

    #[test]
    fn test_bundled_resume_is_pdf() {
        assert!(BUNDLED_RESUME.starts_with(b"%PDF"));
    }

    #[test]
    fn test_empty_experiences_rejected() {
        let mut value: serde_json::Value = serde_json::from_str(BUNDLED_CONTENT).unwrap();
        value["experiences"] = serde_json::json!([]);
        let err = Content::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ContentError::Empty));
    }

    #[test]
    fn test_new_requires_an_experience() {
        let bundled = Content::bundled().unwrap();

        let err = Content::new(bundled.profile().clone(), Vec::new(), bundled.projects().to_vec()).unwrap_err();
        assert!(matches!(err, ContentError::Empty));

        let single = Content::new(bundled.profile().clone(), bundled.experiences()[..1].to_vec(), Vec::new()).unwrap();
        assert_eq!(single.experiences().len(), 1);
        assert!(single.projects().is_empty());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Content::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }

    #[test]
    fn test_from_path() {
        let path = env::temp_dir().join("rfolio_content_test.json");
        fs::write(&path, BUNDLED_CONTENT).unwrap();
        let content = Content::from_path(&path).unwrap();
        assert_eq!(content, Content::bundled().unwrap());
        let _ = fs::remove_file(&path);

        let missing = env::temp_dir().join("rfolio_content_missing.json");
        assert!(matches!(Content::from_path(&missing), Err(ContentError::Read { .. })));
    }
}
