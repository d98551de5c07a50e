//! Static site content (about text, navigation, qualities, dishes, team).
//!
//! The marketing pages render this data verbatim. It is loaded once at
//! startup, either from a JSON file or from the copy compiled into the
//! binary, and has no bearing on reservation handling.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Content shipped with the binary, used when no file is configured.
const BUILTIN_CONTENT: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to read site content from {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Malformed site content: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid site content: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct About {
    pub title: String,
    pub tagline: String,
    pub body: String,
}

/// A navigation entry pointing at a page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub title: String,
    pub link: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quality {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: u32,
    pub name: String,
    pub designation: String,
    pub image: String,
}

/// Everything the marketing pages display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub about: About,
    pub navbar_links: Vec<NavLink>,
    pub our_qualities: Vec<Quality>,
    pub dishes: Vec<Dish>,
    pub team: Vec<TeamMember>,
}

impl SiteContent {
    /// The content compiled into the binary.
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json_str(BUILTIN_CONTENT)
    }

    /// Read and validate content from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse and validate content from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self, ContentError> {
        let content: Self = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Check that navigation targets and per-section ids are unique and
    /// that navigation entries are non-empty.
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut targets = HashSet::new();
        for link in &self.navbar_links {
            if link.title.is_empty() || link.link.is_empty() {
                return Err(ContentError::Invalid(
                    "Navbar links need both a title and a target".into(),
                ));
            }
            if !targets.insert(link.link.as_str()) {
                return Err(ContentError::Invalid(format!(
                    "Duplicate navbar target '{}'",
                    link.link
                )));
            }
        }

        ensure_unique_ids("ourQualities", self.our_qualities.iter().map(|q| q.id))?;
        ensure_unique_ids("dishes", self.dishes.iter().map(|d| d.id))?;
        ensure_unique_ids("team", self.team.iter().map(|t| t.id))?;
        Ok(())
    }
}

fn ensure_unique_ids(
    section: &str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Invalid(format!(
                "Duplicate id {id} in {section}"
            )));
        }
    }
    Ok(())
}
