//! Content loader - loads blog posts from the content directory

use anyhow::Result;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, Post, SchemaError};
use crate::helpers::parse_publish_date;
use crate::order::{order_with, MalformedDatePolicy, OrderError};
use crate::Blog;

/// Something wrong with one file of the collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Source path relative to the content directory
    pub source: String,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Loads posts from the blog collection
pub struct ContentLoader<'a> {
    blog: &'a Blog,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Load all valid posts in file-name order.
    ///
    /// Files that fail the schema are logged and skipped. Duplicate slugs and
    /// dangling `relatedPosts` references are logged but the post is kept.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let mut posts = Vec::new();

        for path in self.markdown_files() {
            match self.read_post(&path)? {
                Ok(post) => posts.push(post),
                Err(errors) => {
                    for e in errors {
                        tracing::warn!("Skipping post {:?}: {}", path, e);
                    }
                }
            }
        }

        for problem in duplicate_slugs(&posts)
            .into_iter()
            .chain(dangling_references(&posts))
        {
            tracing::warn!("{}", problem);
        }

        tracing::debug!(
            "Loaded {} posts from {:?}",
            posts.len(),
            self.blog.content_dir
        );
        Ok(posts)
    }

    /// Load all valid posts, newest first
    pub fn load_ordered(&self, policy: MalformedDatePolicy) -> Result<Vec<Post>> {
        let posts = self.load_posts()?;
        let sources: Vec<String> = posts.iter().map(|p| p.source.clone()).collect();

        order_with(posts, policy).map_err(|e| {
            let OrderError::MalformedDate { index, .. } = &e;
            let source = sources.get(*index).map_or("?", String::as_str);
            anyhow::anyhow!("{}: {}", source, e)
        })
    }

    /// Validate the whole collection and report every problem found
    pub fn check(&self) -> Result<Vec<Problem>> {
        let mut problems = Vec::new();
        let mut posts = Vec::new();

        for path in self.markdown_files() {
            let source = self.relative_source(&path);
            match self.read_post(&path)? {
                Ok(post) => {
                    if let Err(e) = parse_publish_date(&post.publish_date) {
                        problems.push(Problem {
                            source,
                            message: format!("publishDate '{}': {}", post.publish_date, e),
                        });
                    }
                    posts.push(post);
                }
                Err(errors) => problems.extend(errors.into_iter().map(|e| Problem {
                    source: source.clone(),
                    message: e.to_string(),
                })),
            }
        }

        problems.extend(duplicate_slugs(&posts));
        problems.extend(dangling_references(&posts));
        Ok(problems)
    }

    /// Read and validate one file. The outer error is I/O, the inner one
    /// lists schema violations.
    fn read_post(&self, path: &Path) -> Result<std::result::Result<Post, Vec<SchemaError>>> {
        let content = fs::read_to_string(path)?;

        let (fm, body) = match FrontMatter::parse(&content) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(Err(vec![e])),
        };

        let errors = fm.validate(&self.blog.config);
        if !errors.is_empty() {
            return Ok(Err(errors));
        }

        let slug = post_slug(path.strip_prefix(&self.blog.content_dir).unwrap_or(path));
        let permalink = format!(
            "{}/blog/{}/",
            self.blog.config.current_base_url(),
            slug
        );

        // validate() guarantees the required fields
        let mut post = Post::new(
            slug,
            fm.title.unwrap_or_default(),
            fm.description.unwrap_or_default(),
            fm.publish_date.unwrap_or_default(),
        );
        post.tags = fm.tags.unwrap_or_default();
        post.image = fm.image;
        post.related_posts = fm.related_posts;
        post.raw = body.to_string();
        post.source = self.relative_source(path);
        post.full_source = path.to_path_buf();
        post.permalink = permalink;
        post.extra = fm.extra;

        Ok(Ok(post))
    }

    /// Markdown files of the collection, sorted by file name
    fn markdown_files(&self) -> Vec<std::path::PathBuf> {
        let dir = &self.blog.content_dir;
        if !dir.exists() {
            tracing::debug!("Content directory {:?} does not exist", dir);
            return Vec::new();
        }

        WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .map(|e| e.into_path())
            .filter(|p| p.is_file() && is_markdown_file(p))
            .collect()
    }

    fn relative_source(&self, path: &Path) -> String {
        path.strip_prefix(&self.blog.content_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string()
    }
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "mdx" || e == "markdown")
        .unwrap_or(false)
}

/// Slug from the path inside the collection: `2024/Intro.md` -> `2024/intro`
fn post_slug(relative: &Path) -> String {
    let slug = relative
        .with_extension("")
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .map(slug::slugify)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if slug.is_empty() {
        "untitled".to_string()
    } else {
        slug
    }
}

/// Posts whose slug was already taken by an earlier file
fn duplicate_slugs(posts: &[Post]) -> Vec<Problem> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    let mut problems = Vec::new();

    for post in posts {
        match seen.entry(post.slug.as_str()) {
            Entry::Occupied(first) => problems.push(Problem {
                source: post.source.clone(),
                message: SchemaError::DuplicateSlug {
                    slug: post.slug.clone(),
                    first: first.get().to_string(),
                }
                .to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(post.source.as_str());
            }
        }
    }

    problems
}

/// `relatedPosts` entries naming no post in the collection
fn dangling_references(posts: &[Post]) -> Vec<Problem> {
    posts
        .iter()
        .flat_map(|post| {
            post.related_posts
                .iter()
                .filter(move |slug| !posts.iter().any(|p| &p.slug == *slug))
                .map(move |slug| Problem {
                    source: post.source.clone(),
                    message: SchemaError::UnknownRelatedPost(slug.clone()).to_string(),
                })
        })
        .collect()
}
