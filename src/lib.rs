//! blog-posts: content collection tooling for a personal blog
//!
//! Loads the blog collection, validates each post's front-matter and
//! orders posts by their `DD/MM/YYYY` publish date, newest first.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod order;

use anyhow::Result;
use std::path::Path;

pub use order::{order, order_lenient, order_with, MalformedDatePolicy, OrderError, PublishDated};

/// The blog site
#[derive(Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Blog collection directory
    pub content_dir: std::path::PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("blog.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
        })
    }

    /// List posts (newest first) or tags
    pub fn list(&self, content_type: &str, options: commands::list::Options) -> Result<()> {
        commands::list::run(self, content_type, options)
    }

    /// Validate the collection
    pub fn check(&self) -> Result<()> {
        commands::check::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<()> {
        commands::new::run(self, title)
    }
}
