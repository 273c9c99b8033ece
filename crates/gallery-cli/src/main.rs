mod logger;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gallery_pages::{BuildOptions, BuildOutcome, Slot};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "galp", about = "Gallery page layout CLI", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct BuildArgs {
    /// Input JSON item list (bare array, {"gallery": [...]} or {"data": {"gallery": [...]}})
    #[arg(short, long)]
    input: PathBuf,

    /// Options JSON file; --lookahead overrides its value
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of leading items searched for the next featured video
    #[arg(long)]
    lookahead: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Group items into three-slot pages
    Build {
        #[command(flatten)]
        args: BuildArgs,

        /// Output JSON page list
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show statistics only, don't print or write pages
        #[arg(long)]
        stats_only: bool,
    },

    /// Find which page and slot an item lands on
    Locate {
        #[command(flatten)]
        args: BuildArgs,

        /// Item id to look up
        id: String,
    },
}

async fn resolve_options(args: &BuildArgs) -> Result<BuildOptions> {
    let mut options = match &args.config {
        Some(path) => BuildOptions::load(path)
            .await
            .with_context(|| format!("loading options from {}", path.display()))?,
        None => BuildOptions::default(),
    };
    if let Some(lookahead) = args.lookahead {
        options.lookahead = lookahead;
    }
    Ok(options)
}

fn slot_name(slot: Slot) -> &'static str {
    match slot {
        Slot::Left => "left",
        Slot::RightTop => "right-top",
        Slot::RightBottom => "right-bottom",
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::new(logger::level_for(cli.verbose, cli.quiet)).init()?;

    match cli.command {
        Commands::Build {
            args,
            output,
            stats_only,
        } => {
            let options = resolve_options(&args).await?;
            let items = gallery_pages::load_items(&args.input)
                .await
                .with_context(|| format!("loading items from {}", args.input.display()))?;

            let pages = gallery_pages::build_pages(&items, &options)?;

            let stats = gallery_pages::calculate_statistics(&items, &pages);
            println!("Page Statistics:");
            println!(
                "  Source items: {} ({} images, {} videos)",
                stats.source_items, stats.images, stats.videos
            );
            println!("  Pages: {}", stats.pages);
            println!("  Video pages: {}", stats.video_pages);
            println!("  Image pages: {}", stats.image_pages);
            println!("  Leftover items: {}", stats.leftover_items);
            match stats.outcome {
                BuildOutcome::Exhausted if stats.leftover_items == 0 => {
                    println!("  Outcome: all items placed");
                }
                BuildOutcome::Exhausted => println!("  Outcome: too few items for another page"),
                BuildOutcome::Stalled => {
                    println!("  Outcome: stopped, remaining items cannot form a page");
                }
            }

            if stats_only {
                return Ok(());
            }

            match output {
                Some(output) => {
                    gallery_pages::save_layouts(&pages.layouts(), &output).await?;
                    println!("Pages → {}", output.display());
                }
                None => {
                    for (index, page) in pages.iter().enumerate() {
                        println!(
                            "{:>4}: {} | {} / {}",
                            index + 1,
                            page.left.id,
                            page.right_top.id,
                            page.right_bottom.id
                        );
                    }
                }
            }
        }

        Commands::Locate { args, id } => {
            let options = resolve_options(&args).await?;
            let items = gallery_pages::load_items(&args.input)
                .await
                .with_context(|| format!("loading items from {}", args.input.display()))?;

            let pages = gallery_pages::build_pages(&items, &options)?;
            match pages.locate(&id) {
                Some((index, slot)) => println!("{}: page {} {}", id, index + 1, slot_name(slot)),
                None => anyhow::bail!("item {} is not placed on any page", id),
            }
        }
    }

    Ok(())
}
