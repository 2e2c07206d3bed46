//! Create a new post

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

use crate::helpers::format_publish_date;
use crate::Blog;

/// Write a new post scaffold dated `date` and return its path
pub fn create_post(blog: &Blog, title: &str, date: NaiveDate) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Title {:?} has no characters usable in a file name", title);
    }

    fs::create_dir_all(&blog.content_dir)?;
    let file_path = blog.content_dir.join(format!("{}.md", slug));

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    // Quote the title so YAML keeps it a string
    let content = format!(
        "---\ntitle: {}\ndescription: \"\"\ntags: []\npublishDate: {}\n---\n",
        serde_json::to_string(title)?,
        format_publish_date(&date)
    );

    fs::write(&file_path, content)?;
    tracing::debug!("Wrote scaffold to {:?}", file_path);

    Ok(file_path)
}

/// Run the new command
pub fn run(blog: &Blog, title: &str) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let path = create_post(blog, title, today)?;
    println!("Created: {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentLoader;

    #[test]
    fn test_create_post_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let path = create_post(&blog, "Hello: World", date).unwrap();
        assert!(path.ends_with("src/content/blog/hello-world.md"));

        let posts = ContentLoader::new(&blog).load_posts().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Hello: World");
        assert_eq!(posts[0].publish_date, "07/03/2024");
        assert_eq!(posts[0].description, "");
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        create_post(&blog, "Twice", date).unwrap();
        let err = create_post(&blog, "Twice", date).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_create_post_empty_slug() {
        let dir = tempfile::tempdir().unwrap();
        let blog = Blog::new(dir.path()).unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert!(create_post(&blog, "!!!", date).is_err());
    }
}
