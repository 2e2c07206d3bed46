//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::content::{ContentLoader, Post};
use crate::helpers::parse_publish_date;
use crate::order::MalformedDatePolicy;
use crate::Blog;

/// Listing options
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print JSON instead of text
    pub json: bool,
    /// Overrides `malformed_dates` from the site config
    pub policy: Option<MalformedDatePolicy>,
}

/// List site content by type
pub fn run(blog: &Blog, content_type: &str, options: Options) -> Result<()> {
    let policy = options.policy.unwrap_or(blog.config.malformed_dates);
    let posts = ContentLoader::new(blog).load_ordered(policy)?;

    let output = match content_type {
        "post" | "posts" => {
            if options.json {
                serde_json::to_string_pretty(&posts)?
            } else {
                render_posts(blog, &posts)
            }
        }
        "tag" | "tags" => {
            let tags = tag_counts(&posts);
            if options.json {
                serde_json::to_string_pretty(&tags)?
            } else {
                render_tags(&tags)
            }
        }
        _ => {
            anyhow::bail!("Unknown type: {}. Available: post, tag", content_type);
        }
    };

    println!("{}", output);
    Ok(())
}

/// One line per post, newest first
fn render_posts(blog: &Blog, posts: &[Post]) -> String {
    let mut out = format!("Posts ({}):", posts.len());
    for post in posts {
        // Lenient listings may still hold unparseable dates; show them raw
        let date = parse_publish_date(&post.publish_date)
            .map(|d| d.format(&blog.config.date_format).to_string())
            .unwrap_or_else(|_| post.publish_date.clone());
        out.push_str(&format!("\n  {} - {} [{}]", date, post.title, post.source));
    }
    out
}

/// Post count per tag, most used first. Ties keep first-seen order.
fn tag_counts(posts: &[Post]) -> IndexMap<String, usize> {
    let mut tags: IndexMap<String, usize> = IndexMap::new();
    for post in posts {
        for tag in &post.tags {
            *tags.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    tags.sort_by(|_, a, _, b| b.cmp(a));
    tags
}

fn render_tags(tags: &IndexMap<String, usize>) -> String {
    let mut out = format!("Tags ({}):", tags.len());
    for (tag, count) in tags {
        out.push_str(&format!("\n  {} ({})", tag, count));
    }
    out
}
