//! CLI entry point for blog-posts

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blog_posts::commands;
use blog_posts::MalformedDatePolicy;

#[derive(Parser)]
#[command(name = "blog-posts")]
#[command(version)]
#[command(about = "Validate and list the posts of a blog collection", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts newest first, or tag counts
    #[command(alias = "ls")]
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON
        #[arg(long)]
        json: bool,

        /// Put posts with malformed publish dates last instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Validate every post in the collection
    Check,

    /// Create a new post dated today
    New {
        /// Title of the new post
        title: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blog_posts=debug,info"
    } else {
        "blog_posts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            json,
            lenient,
        } => {
            let blog = blog_posts::Blog::new(&base_dir)?;
            let options = commands::list::Options {
                json,
                policy: lenient.then_some(MalformedDatePolicy::Lenient),
            };
            blog.list(&r#type, options)?;
        }

        Commands::Check => {
            let blog = blog_posts::Blog::new(&base_dir)?;
            tracing::info!("Checking {:?}", blog.content_dir);
            blog.check()?;
        }

        Commands::New { title } => {
            let blog = blog_posts::Blog::new(&base_dir)?;
            tracing::info!("Creating new post with title: {}", title);
            blog.new_post(&title)?;
        }

        Commands::Version => {
            println!("blog-posts version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
