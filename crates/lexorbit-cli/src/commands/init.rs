//! Initialize a new Lexorbit project.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;

use crate::config::Config;

pub fn run(path: Option<String>) -> Result<()> {
    let base_path = path
        .map(|p| Path::new(&p).to_path_buf())
        .unwrap_or_else(|| std::env::current_dir().unwrap());

    println!("{} Initializing Lexorbit project...", "→".blue());

    std::fs::create_dir_all(&base_path)
        .with_context(|| format!("Failed to create {}", base_path.display()))?;

    // Create corpus directory for input documents
    let corpus_dir = base_path.join("corpus");
    std::fs::create_dir_all(&corpus_dir)
        .with_context(|| format!("Failed to create {}", corpus_dir.display()))?;
    println!("  {} Created {}", "✓".green(), corpus_dir.display());

    // Create default config
    let config_path = base_path.join("lexorbit.toml");
    if !config_path.exists() {
        let config = Config::default();
        config.save(&config_path)?;
        println!("  {} Created {}", "✓".green(), config_path.display());
    } else {
        println!("  {} {} already exists", "•".yellow(), config_path.display());
    }

    println!();
    println!("{} Lexorbit project initialized!", "✓".green().bold());
    println!();
    println!("Next steps:");
    println!("  {} drop .txt documents into corpus/", "1.".blue());
    println!("  {} lexorbit mine corpus/", "2.".blue());
    println!("  {} lexorbit show patterns.tsv", "3.".blue());

    Ok(())
}
