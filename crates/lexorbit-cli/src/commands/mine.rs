//! Mine graphlet patterns from a corpus.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lexorbit::prelude::*;
use std::path::Path;

use crate::config::Config;

/// Flags forwarded from the `mine` subcommand.
pub struct MineOptions {
    pub iterations: Option<usize>,
    pub seed: Option<u64>,
    pub tagged: bool,
    pub keep_stopwords: bool,
    pub verbose: bool,
}

pub fn run(input: &str, output: &str, format: &str, opts: MineOptions) -> Result<()> {
    let input_path = Path::new(input);
    if !input_path.exists() {
        bail!("Input path does not exist: {}", input_path.display());
    }

    // Load config and apply CLI overrides
    let config = Config::load()?;
    let mut search_config = config.to_search_config()?;
    if let Some(n) = opts.iterations {
        search_config.max_iterations = n;
    }
    if let Some(s) = opts.seed {
        search_config.rng_seed = Some(s);
    }
    if opts.keep_stopwords {
        search_config.stopwords.clear();
    }

    let corpus = Corpus::from_directory(input_path)
        .with_context(|| format!("Failed to load corpus from {}", input_path.display()))?;
    if corpus.is_empty() {
        bail!("No .txt documents found in {}", input_path.display());
    }

    println!(
        "{} Loaded {} documents from {}",
        "→".blue(),
        corpus.len().to_string().cyan(),
        input_path.display()
    );

    let mut miner = GraphletMiner::new(search_config)?;
    if opts.tagged {
        drive(&mut miner, &corpus, &TaggedLineTokenizer, opts.verbose);
    } else {
        drive(&mut miner, &corpus, &PlainTokenizer, opts.verbose);
    }

    // Write the table
    let output_path = Path::new(output);
    match format {
        "tsv" => write_tsv(miner.table(), output_path)?,
        "json" => write_json(miner.table(), output_path)?,
        other => bail!("Unknown format: {} (expected tsv or json)", other),
    }

    // Print stats
    let stats = miner.stats();
    println!();
    println!("{} Mining complete!", "✓".green().bold());
    println!(
        "  Documents:         {}",
        stats.documents_indexed.to_string().cyan()
    );
    if stats.documents_skipped > 0 {
        println!(
            "  Skipped (empty):   {}",
            stats.documents_skipped.to_string().yellow()
        );
    }
    println!("  Seeds:             {}", stats.seeds.to_string().cyan());
    println!(
        "  Hypotheses:        {}",
        stats.hypotheses_explored.to_string().cyan()
    );
    println!(
        "  Distinct patterns: {}",
        stats.distinct_patterns.to_string().cyan()
    );
    println!("  Written to:        {}", output_path.display().to_string().cyan());

    Ok(())
}

fn drive<T: Tokenize>(miner: &mut GraphletMiner, corpus: &Corpus, tokenizer: &T, verbose: bool) {
    if miner.config().graphlet_kind == GraphletKind::Max {
        println!("{} Extracting maximal graphlets...", "→".blue());
        miner.run(corpus, tokenizer);
        return;
    }

    miner.seed(corpus, tokenizer);
    println!(
        "{} Seeded {} hypotheses",
        "→".blue(),
        miner.stats().seeds.to_string().cyan()
    );

    let pb = ProgressBar::new(miner.config().max_iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    while miner.step() {
        if verbose {
            pb.set_message(format!("{} hypotheses live", miner.frontier().len()));
        }
        pb.inc(1);
    }
    pb.finish_with_message("done");
}
