//! Show the highest-support patterns from a mined table.

use anyhow::{bail, Result};
use colored::Colorize;
use lexorbit::prelude::*;
use std::collections::HashSet;
use std::path::Path;

pub fn run(input: &str, top: usize) -> Result<()> {
    let path = Path::new(input);
    if !path.exists() {
        bail!("File does not exist: {}", path.display());
    }

    let table = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        read_json(path)?
    } else {
        read_tsv(path)?
    };

    if table.is_empty() {
        println!("{} No patterns in {}", "•".yellow(), path.display());
        return Ok(());
    }

    println!();
    println!("{}", "Top patterns by support".white().bold());
    println!("{}", "═".repeat(60).dimmed());

    for (rank, (key, support)) in table.top_by_support(top).into_iter().enumerate() {
        println!(
            "{} {} {}",
            format!("{:>3}.", rank + 1).blue(),
            format!("{:>5}", support).cyan(),
            to_render_pattern(key)
        );
        if let Some(occurrences) = table.get(key) {
            let mut seen = HashSet::new();
            let centers: Vec<&str> = occurrences
                .iter()
                .map(|o| o.center.as_str())
                .filter(|c| seen.insert(*c))
                .collect();
            let shown = centers
                .iter()
                .take(3)
                .copied()
                .collect::<Vec<_>>()
                .join(", ");
            let suffix = if centers.len() > 3 {
                format!(" (+{} more)", centers.len() - 3)
            } else {
                String::new()
            };
            println!("{}", format!("           centers: {}{}", shown, suffix).dimmed());
        }
    }

    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {} distinct patterns in table",
        "→".blue(),
        table.len().to_string().cyan()
    );

    Ok(())
}
