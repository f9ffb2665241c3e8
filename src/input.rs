use crate::Result;
use anyhow::{Context, bail};
use std::fs;
use std::path::Path;

/// One non-blank line of the event log, trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based.
    pub number: usize,
    pub text: String,
}

/// Read the event log. A missing file is fatal before any parsing starts.
pub fn read_lines(path: &Path) -> Result<Vec<SourceLine>> {
    if !path.exists() {
        bail!("event log {} does not exist", path.display());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("read event log {}", path.display()))?;
    Ok(split_lines(&text))
}

pub fn split_lines(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            Some(SourceLine {
                number: i + 1,
                text: line.to_string(),
            })
        })
        .collect()
}
