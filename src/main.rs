mod assemble;
mod config;
mod extract;
mod fetch;
mod pipeline;
mod records;
mod sanitize;
mod store;

use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};

use crate::store::ContentStore;

#[derive(Parser)]
#[command(name = "guide_scraper", about = "Museum guide content pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the theme and all object pages, write the corpus
    Fetch,
    /// Print the theme summary from the corpus
    Theme,
    /// Print one object record from the corpus
    Object {
        /// Object id (last path segment of its source URL)
        id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch => {
            let stats = pipeline::run(Path::new(config::OUTPUT_DIR)).await?;
            println!(
                "Done: {} objects ({} ok, {} skipped).",
                stats.total, stats.ok, stats.skipped
            );
            Ok(())
        }
        Commands::Theme => {
            let mut store = ContentStore::open(config::OUTPUT_DIR);
            let theme = store.theme()?;

            println!("{}", theme.title);
            if !theme.ingress.is_empty() {
                println!("{}", theme.ingress);
            }

            println!("\n{:>3} | {:<28} | {}", "#", "Object", "Id");
            println!("{}", "-".repeat(60));
            let refs = theme.primary_objects.iter().chain(&theme.secondary_objects);
            for (i, r) in refs.enumerate() {
                let marker = if i < theme.primary_objects.len() { " " } else { "*" };
                println!("{:>2}{} | {:<28} | {}", i + 1, marker, truncate(&r.title, 28), r.id);
            }
            println!(
                "\n{} primary, {} secondary (* = secondary)",
                theme.primary_objects.len(),
                theme.secondary_objects.len()
            );
            Ok(())
        }
        Commands::Object { id } => {
            let mut store = ContentStore::open(config::OUTPUT_DIR);
            let object = store.object(&id)?;

            println!("{} ({})", object.title, object.id);
            if !object.object_number.is_empty() {
                println!("Number:    {}", object.object_number);
            }
            println!("Thumbnail: {}", object.thumbnail);
            for image in &object.images {
                println!("Image:     {}", image);
            }
            if !object.intro.is_empty() {
                println!("\n{}", object.intro);
            }
            for section in &object.description.sections {
                println!("\n{}", section.text);
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}
