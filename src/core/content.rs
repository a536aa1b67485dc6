//! # Slide Content
//!
//! The portfolio is static view data: the controller only ever needs
//! `slides.len()`. Everything else is handed to the renderer untouched.
//!
//! Content is read from a TOML or JSON file (picked by extension), or from
//! the copy bundled into the binary at `assets/portfolio.toml`.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

const BUNDLED_PORTFOLIO: &str = include_str!("../../assets/portfolio.toml");

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Portfolio {
    pub owner: String,
    pub initials: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub links: Vec<ContactLink>,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ContactLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Slide {
    /// Short label for the navbar.
    pub title: String,
    /// Panel heading, rendered as `heading accent` with the accent highlighted.
    pub heading: String,
    #[serde(default)]
    pub accent: String,
    pub body: SlideBody,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideBody {
    About {
        #[serde(default)]
        badge: Option<String>,
        paragraphs: Vec<String>,
    },
    Competencies {
        skills: Vec<Skill>,
    },
    Experience {
        jobs: Vec<Job>,
    },
    Projects {
        projects: Vec<Project>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Skill {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Job {
    pub date: String,
    pub role: String,
    pub company: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub country: Option<String>,
    pub desc: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A project tag: either a bare label or a label pointing somewhere.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum Tag {
    Label(String),
    Link { name: String, url: String },
}

impl Tag {
    pub fn name(&self) -> &str {
        match self {
            Tag::Label(name) => name,
            Tag::Link { name, .. } => name,
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Tag::Label(_) => None,
            Tag::Link { url, .. } => Some(url),
        }
    }
}

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    /// A portfolio must have at least one slide to navigate.
    Empty,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Toml(e) => write!(f, "content parse error (toml): {e}"),
            ContentError::Json(e) => write!(f, "content parse error (json): {e}"),
            ContentError::Empty => write!(f, "content has no slides"),
        }
    }
}

impl std::error::Error for ContentError {}

impl Portfolio {
    /// The portfolio compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_toml(BUNDLED_PORTFOLIO)
    }

    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = toml::from_str(source).map_err(ContentError::Toml)?;
        portfolio.validated()
    }

    pub fn from_json(source: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(source).map_err(ContentError::Json)?;
        portfolio.validated()
    }

    /// Load from disk. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ContentError> {
        let source = fs::read_to_string(path).map_err(ContentError::Io)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let portfolio = if is_json {
            Self::from_json(&source)?
        } else {
            Self::from_toml(&source)?
        };
        info!(
            "Loaded {} slides from {}",
            portfolio.slides.len(),
            path.display()
        );
        Ok(portfolio)
    }

    /// Load `path` if given, the bundled portfolio otherwise.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, ContentError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using bundled portfolio content");
                Self::bundled()
            }
        }
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide titles in order, as shown in the navbar.
    pub fn titles(&self) -> Vec<String> {
        self.slides.iter().map(|s| s.title.clone()).collect()
    }

    fn validated(self) -> Result<Self, ContentError> {
        if self.slides.is_empty() {
            return Err(ContentError::Empty);
        }
        Ok(self)
    }
}
