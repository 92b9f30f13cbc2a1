// src/report/output.rs
// =============================================================================
// Printing extracted links to the terminal and saving them to a text file.
//
// File format: UTF-8 text, one URL per line, sorted unless asked otherwise.
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::crawl::LinkSet;

// Links in display order
pub fn sorted_links(links: &LinkSet) -> Vec<&str> {
    let mut sorted: Vec<&str> = links.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

// Formats the link listing, showing at most `limit` links. A limit of 0
// shows every link.
//
// Example (limit = 2 of 3):
//   === Extracted links (total 3) ===
//     1. https://example.com/a
//     2. https://example.com/b
//   ... 1 more links
pub fn format_links(links: &LinkSet, limit: Option<usize>) -> String {
    if links.is_empty() {
        return "No links found\n".to_string();
    }

    let sorted = sorted_links(links);
    let shown = limit
        .filter(|&n| n > 0)
        .unwrap_or(sorted.len())
        .min(sorted.len());

    let mut out = format!("\n=== Extracted links (total {}) ===\n", links.len());
    for (i, link) in sorted.iter().take(shown).enumerate() {
        out.push_str(&format!("{:3}. {}\n", i + 1, link));
    }
    if shown < sorted.len() {
        out.push_str(&format!("... {} more links\n", sorted.len() - shown));
    }
    out
}

pub fn print_links(links: &LinkSet, limit: Option<usize>) {
    print!("{}", format_links(links, limit));
}

// Default output name, e.g. extracted_links_20240131_142501.txt
pub fn default_filename() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("extracted_links_{}.txt", timestamp))
}

// Writes the links to `path` (or a timestamped file in the current
// directory) and returns the path written. Returns Ok(None) without touching
// the disk when there is nothing to save.
pub fn save_links(links: &LinkSet, path: Option<&Path>, sort: bool) -> Result<Option<PathBuf>> {
    if links.is_empty() {
        warn!("No links to save");
        return Ok(None);
    }

    let path = path.map(Path::to_path_buf).unwrap_or_else(default_filename);

    let ordered: Vec<&str> = if sort {
        sorted_links(links)
    } else {
        links.iter().map(String::as_str).collect()
    };

    let file = File::create(&path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for link in &ordered {
        writeln!(writer, "{}", link)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    info!("Saved {} links to {}", ordered.len(), path.display());
    Ok(Some(path))
}
