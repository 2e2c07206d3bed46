//! Validate the blog collection

use anyhow::Result;

use crate::content::ContentLoader;
use crate::Blog;

/// Check every post and fail if anything is wrong
pub fn run(blog: &Blog) -> Result<()> {
    let problems = ContentLoader::new(blog).check()?;

    if problems.is_empty() {
        println!("All posts are valid.");
        return Ok(());
    }

    for problem in &problems {
        println!("  {}", problem);
    }
    anyhow::bail!("Found {} problem(s) in {:?}", problems.len(), blog.content_dir)
}
