use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use underwood::build::build_blog;
use underwood::config::{BlogInfo, Options};

/// Generates a static blog from a JSON (or YAML) info file.
#[derive(Parser, Debug)]
#[command(name = "underwood", version, about)]
struct Cli {
    /// Path to the blog info file.
    info: PathBuf,

    /// Number of post summaries on the home page. Overrides the info file.
    #[arg(long = "home-posts", value_parser = clap::value_parser!(u64).range(1..))]
    home_posts: Option<u64>,

    /// Log every document as it's written.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    // --verbose forces INFO, otherwise honor RUST_LOG and default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let info = BlogInfo::from_file(&cli.info)
        .with_context(|| format!("Loading blog info from `{}`", cli.info.display()))?;

    let mut options = Options::new(&info, Local::now().date_naive());
    if let Some(home_posts) = cli.home_posts {
        options.home_page_posts = home_posts as usize;
    }

    build_blog(&info, &options)?;
    Ok(())
}
