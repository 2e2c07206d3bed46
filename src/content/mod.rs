//! Content module - blog posts, their front-matter and schema

mod frontmatter;
pub mod loader;
mod post;
mod schema;

pub use frontmatter::{FrontMatter, Image};
pub use loader::{ContentLoader, Problem};
pub use post::Post;
pub use schema::SchemaError;
