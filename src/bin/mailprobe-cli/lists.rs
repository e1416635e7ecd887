use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Reads a domain list: one entry per line, blanks and `#` comments skipped.
pub fn read_domain_list(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read domain list {}", path.display()))?;
    Ok(parse_domain_list(&text))
}

pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
