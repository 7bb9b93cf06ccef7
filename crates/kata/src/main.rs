use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use libkata::{minesweeper, summarize, tvseries, Config};

#[derive(Parser)]
#[clap(name = "kata")]
#[clap(version = "0.1.0")]
#[clap(max_term_width = 80)]
#[clap(about = "Run the coding-challenge reference solutions", long_about = None)]
struct Cli {
    /// Increase output verbosity
    #[clap(short, long, action = clap::ArgAction::Count, default_value = "0")]
    verbose: u8,

    /// Decrease output verbosity
    #[clap(short, long)]
    quiet: bool,

    /// Path to a TOML config file
    #[clap(long)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate a minesweeper board with neighbouring mine counts
    Minesweeper {
        /// Path to a JSON board; stdin is read if omitted
        board: Option<PathBuf>,
    },
    /// Find the best-rated TV series in a genre
    #[clap(name = "best-in-genre")]
    BestInGenre {
        /// The genre to search for
        genre: String,
    },
    /// Summarize a text file via the configured model
    Summarize {
        /// Path to the text file to summarize (positional also accepted)
        #[clap(short, long)]
        input: Option<PathBuf>,

        /// Positional file path
        file: Option<PathBuf>,

        /// Summary type: short|medium|bullet
        #[clap(short = 't', long = "type", default_value = "short")]
        style: summarize::Style,
    },
}

fn log_filter(verbosity: u8) -> EnvFilter {
    match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => {
            let contents = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read config {}", p.display()))?;
            Ok(Config::from_toml(&contents)?)
        }
        None => Ok(Config::default()),
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let verbosity = if cli.quiet { 0 } else { cli.verbose };
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity))
        .without_time()
        .init();

    let config = load_config(cli.config.as_deref())?.load_env();

    match cli.command {
        Commands::Minesweeper { board } => {
            let raw = read_input(board.as_deref())?;
            // Unparseable input falls through to the challenge function's
            // malformed-shape contract and prints an empty grid.
            let board = serde_json::from_str(&raw).unwrap_or(serde_json::Value::Null);
            let annotated = minesweeper::count_neighbouring_mines(&board);
            println!("{}", serde_json::to_string(&annotated)?);
        }
        Commands::BestInGenre { genre } => {
            let source = config.series_source();
            debug!("looking up best series in genre: {}", genre);
            let name = tvseries::best_in_genre(&source, &genre).await;
            println!("{}", name);
        }
        Commands::Summarize { input, file, style } => {
            let path = input
                .or(file)
                .context("missing input file (use --input or a positional path)")?;
            let backend = config.summarizer();
            let summary = summarize::summarize_file(&backend, &path, style).await?;
            println!("{}", "Summary:".blue().bold());
            println!("{}", summary);
        }
    }
    Ok(())
}
