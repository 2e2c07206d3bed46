//! Blog collection schema
//!
//! Rules a post's front-matter must satisfy before it joins the collection.
//! The publish date is only required to be present here; its format is
//! checked when the collection is ordered.

use thiserror::Error;

use super::FrontMatter;
use crate::config::SiteConfig;

/// A front-matter rule violation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("no front-matter block found")]
    MissingFrontMatter,

    #[error("invalid front-matter: {0}")]
    InvalidYaml(String),

    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("unknown tag '{tag}' (allowed: {allowed})")]
    UnknownTag { tag: String, allowed: String },

    #[error("image is missing 'src'")]
    MissingImageSrc,

    #[error("related post '{0}' does not exist")]
    UnknownRelatedPost(String),

    #[error("slug '{slug}' is already used by {first}")]
    DuplicateSlug { slug: String, first: String },
}

impl FrontMatter {
    /// Check the front-matter against the collection schema.
    /// Returns every violation found; an empty list means valid.
    pub fn validate(&self, config: &SiteConfig) -> Vec<SchemaError> {
        let mut errors = Vec::new();

        if self.title.is_none() {
            errors.push(SchemaError::MissingField("title"));
        }
        if self.description.is_none() {
            errors.push(SchemaError::MissingField("description"));
        }
        if self.tags.is_none() {
            errors.push(SchemaError::MissingField("tags"));
        }
        if self.publish_date.is_none() {
            errors.push(SchemaError::MissingField("publishDate"));
        }

        for tag in self.tags.iter().flatten() {
            if !config.is_known_tag(tag) {
                errors.push(SchemaError::UnknownTag {
                    tag: tag.clone(),
                    allowed: config.tags.join(", "),
                });
            }
        }

        if let Some(image) = &self.image {
            if image.src.as_deref().map_or(true, str::is_empty) {
                errors.push(SchemaError::MissingImageSrc);
            }
        }

        errors
    }
}
