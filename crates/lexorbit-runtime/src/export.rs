//! Pattern table export — delimited rows and JSON snapshots.
//!
//! A table serializes either as tab-delimited rows (one pattern key per
//! line, occurrences as a JSON list) or as one pretty-printed JSON
//! document. Keys never contain tabs or newlines since labels come from
//! whitespace-split tokens. The module also parses canonical keys back
//! into (orbit, labels) pairs and converts between the `|`-delimited
//! canonical form and the `/`-delimited render form.

use std::collections::BTreeSet;
use std::path::Path;

use lexorbit_core::error::{MineError, Result};
use lexorbit_core::types::{Occurrence, PatternTable};

const TSV_HEADER: &str = "pattern\toccurrences";

/// Format every table entry as a `key \t json` row, in key order.
pub fn to_rows(table: &PatternTable) -> Result<Vec<String>> {
    let mut rows = Vec::with_capacity(table.len());
    for (key, occurrences) in table.iter() {
        let json = serde_json::to_string(occurrences)?;
        rows.push(format!("{}\t{}", key, json));
    }
    Ok(rows)
}

/// Parse one `key \t json` row back into a table entry.
pub fn parse_row(line: &str) -> Result<(String, Vec<Occurrence>)> {
    let Some((key, json)) = line.split_once('\t') else {
        return Err(MineError::Format(format!(
            "pattern row has no tab delimiter: {}",
            line
        )));
    };
    let occurrences: Vec<Occurrence> = serde_json::from_str(json)?;
    Ok((key.to_string(), occurrences))
}

/// Write the table as delimited rows under a header line.
pub fn write_tsv(table: &PatternTable, path: &Path) -> Result<()> {
    let mut lines = vec![TSV_HEADER.to_string()];
    lines.extend(to_rows(table)?);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, lines.join("\n") + "\n")?;
    Ok(())
}

/// Read a table previously written by [`write_tsv`].
pub fn read_tsv(path: &Path) -> Result<PatternTable> {
    let content = std::fs::read_to_string(path)?;
    let mut lines = content.lines();

    match lines.next() {
        Some(TSV_HEADER) => {}
        other => {
            return Err(MineError::Format(format!(
                "expected header '{}', found {:?}",
                TSV_HEADER, other
            )));
        }
    }

    let mut table = PatternTable::new();
    for line in lines.filter(|l| !l.trim().is_empty()) {
        let (key, occurrences) = parse_row(line)?;
        for occurrence in occurrences {
            table.record(&key, occurrence);
        }
    }
    Ok(table)
}

/// Write the table as one pretty-printed JSON document.
pub fn write_json(table: &PatternTable, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(table)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)?;
    Ok(())
}

/// Read a table previously written by [`write_json`].
pub fn read_json(path: &Path) -> Result<PatternTable> {
    let json = std::fs::read_to_string(path)?;
    let table = serde_json::from_str(&json)?;
    Ok(table)
}

/// Parse a canonical key into (orbit index, labels) pairs.
///
/// The empty key, carried by seed hypotheses, parses to no pairs.
/// Mask and empty-orbit tokens pass through as ordinary labels.
pub fn parse_pattern_key(key: &str) -> Result<Vec<(usize, BTreeSet<String>)>> {
    if key.is_empty() {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    for segment in key.split('|') {
        let Some((index, labels)) = segment.split_once(':') else {
            return Err(MineError::Format(format!(
                "pattern segment has no orbit index: {}",
                segment
            )));
        };
        let orbit: usize = index.parse().map_err(|_| {
            MineError::Format(format!("bad orbit index in pattern segment: {}", segment))
        })?;
        let labels: BTreeSet<String> = if labels.is_empty() {
            BTreeSet::new()
        } else {
            labels.split(';').map(str::to_string).collect()
        };
        segments.push((orbit, labels));
    }
    Ok(segments)
}

/// Convert a canonical key to the `/`-delimited render form.
pub fn to_render_pattern(key: &str) -> String {
    key.replace('|', "/")
}

/// Convert a `/`-delimited render form back to a canonical key.
pub fn parse_render_pattern(rendered: &str) -> String {
    rendered.replace('/', "|")
}
