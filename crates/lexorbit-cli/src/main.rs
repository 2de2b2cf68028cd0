//! Lexorbit CLI - Command-line interface for graphlet pattern mining.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lexorbit")]
#[command(author, version, about = "Lexorbit - graphlet pattern mining over word graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Lexorbit project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Mine graphlet patterns from a corpus of text files
    Mine {
        /// Directory of .txt documents
        input: String,

        /// Output file for the pattern table
        #[arg(short, long, default_value = "patterns.tsv")]
        output: String,

        /// Output format
        #[arg(short, long, default_value = "tsv")]
        format: String,

        /// Override the configured number of search iterations
        #[arg(short, long)]
        iterations: Option<usize>,

        /// Fix the random seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Treat documents as lines of word_TAG tokens
        #[arg(long)]
        tagged: bool,

        /// Mine with an empty stopword list
        #[arg(long)]
        keep_stopwords: bool,
    },

    /// Show the highest-support patterns from a mined table
    Show {
        /// Pattern table file (.tsv or .json)
        input: String,

        /// Number of patterns to display
        #[arg(short, long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Mine {
            input,
            output,
            format,
            iterations,
            seed,
            tagged,
            keep_stopwords,
        } => {
            let opts = commands::mine::MineOptions {
                iterations,
                seed,
                tagged,
                keep_stopwords,
                verbose: cli.verbose,
            };
            commands::mine::run(&input, &output, &format, opts)
        }
        Commands::Show { input, top } => commands::show::run(&input, top),
    }
}
