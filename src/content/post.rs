//! Post model

use serde::Serialize;
use std::collections::HashMap;
use std::path::PathBuf;

use super::frontmatter::Image;
use crate::order::PublishDated;

/// A blog post from the collection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-friendly name, derived from the path inside the collection
    pub slug: String,

    pub title: String,

    pub description: String,

    pub tags: Vec<String>,

    /// Optional cover image
    pub image: Option<Image>,

    /// Publish date as written in front-matter (`DD/MM/YYYY`)
    pub publish_date: String,

    /// Slugs of related posts
    pub related_posts: Vec<String>,

    /// Raw markdown body
    #[serde(skip_serializing)]
    pub raw: String,

    /// Source file path (relative to the content directory)
    pub source: String,

    /// Full source file path
    #[serde(skip)]
    pub full_source: PathBuf,

    /// Full permalink URL
    pub permalink: String,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(slug: String, title: String, description: String, publish_date: String) -> Self {
        Self {
            source: format!("{}.md", slug),
            full_source: PathBuf::from(format!("{}.md", slug)),
            slug,
            title,
            description,
            tags: Vec::new(),
            image: None,
            publish_date,
            related_posts: Vec::new(),
            raw: String::new(),
            permalink: String::new(),
            extra: HashMap::new(),
        }
    }

    /// Resolve `relatedPosts` against a collection, skipping unknown slugs
    pub fn related<'a>(&self, posts: &'a [Post]) -> Vec<&'a Post> {
        self.related_posts
            .iter()
            .filter_map(|slug| posts.iter().find(|p| &p.slug == slug))
            .collect()
    }
}

impl PublishDated for Post {
    fn publish_date(&self) -> &str {
        &self.publish_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::order;

    fn post(slug: &str, date: &str) -> Post {
        Post::new(
            slug.to_string(),
            slug.to_uppercase(),
            String::new(),
            date.to_string(),
        )
    }

    #[test]
    fn test_related() {
        let mut first = post("first", "01/01/2024");
        first.related_posts = vec!["third".to_string(), "missing".to_string()];
        let posts = vec![first.clone(), post("second", "02/01/2024"), post("third", "03/01/2024")];

        let related = first.related(&posts);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].slug, "third");
    }

    #[test]
    fn test_posts_order_untouched() {
        let mut a = post("a", "01/03/2023");
        a.tags = vec!["Tag3".to_string()];
        a.raw = "body a".to_string();
        let b = post("b", "15/01/2023");
        let c = post("c", "20/06/2023");

        let ordered = order(vec![a.clone(), b.clone(), c.clone()]).unwrap();
        assert_eq!(ordered, vec![c, a, b]);
    }

    #[test]
    fn test_serialize_camel_case() {
        let post = post("hello", "05/05/2020");
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["publishDate"], "05/05/2020");
        assert!(json.get("raw").is_none());
        assert!(json.get("fullSource").is_none());
    }
}
