//! Site configuration (blog.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::order::MalformedDatePolicy;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,

    // URL
    /// Public URL used when building under CI
    pub site: String,
    /// URL used for local development
    pub dev_site: String,

    // Content
    pub content_dir: String,
    /// Allowed values for a post's `tags`
    pub tags: Vec<String>,

    // Listing
    pub date_format: String,
    pub malformed_dates: MalformedDatePolicy,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),

            site: "https://example.com".to_string(),
            dev_site: "http://localhost:4321".to_string(),

            content_dir: "src/content/blog".to_string(),
            tags: vec![
                "Ruby on Rails".to_string(),
                "indie making".to_string(),
                "Tag3".to_string(),
            ],

            date_format: "%d/%m/%Y".to_string(),
            malformed_dates: MalformedDatePolicy::Strict,

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded site config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Base URL for permalinks; `ci` selects the public site
    pub fn base_url(&self, ci: bool) -> &str {
        let url = if ci { &self.site } else { &self.dev_site };
        url.trim_end_matches('/')
    }

    /// Base URL for the current environment (the `CI` variable is set on CI)
    pub fn current_base_url(&self) -> &str {
        self.base_url(std::env::var_os("CI").is_some())
    }

    /// Whether a tag is one of the configured values
    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.content_dir, "src/content/blog");
        assert_eq!(config.malformed_dates, MalformedDatePolicy::Strict);
        assert!(config.is_known_tag("indie making"));
        assert!(!config.is_known_tag("Indie Making"));
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
site: https://blog.example.org/
tags:
  - rust
  - notes
malformed_dates: lenient
analytics: true
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.tags, vec!["rust", "notes"]);
        assert_eq!(config.malformed_dates, MalformedDatePolicy::Lenient);
        assert_eq!(config.content_dir, "src/content/blog");
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_base_url() {
        let config = SiteConfig {
            site: "https://blog.example.org/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.base_url(true), "https://blog.example.org");
        assert_eq!(config.base_url(false), "http://localhost:4321");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.yml");
        fs::write(&path, "title: On Disk\n").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.title, "On Disk");
    }

    #[test]
    fn test_load_invalid_policy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.yml");
        fs::write(&path, "malformed_dates: sometimes\n").unwrap();

        assert!(SiteConfig::load(&path).is_err());
    }
}
