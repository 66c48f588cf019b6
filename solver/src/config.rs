use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use boggler::{Location, SearchConfig};
use serde::Deserialize;

/// Settings read from a TOML file, each of which a command-line flag may override.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub words: Option<PathBuf>,
    pub grid: Option<Vec<Vec<String>>>,
    pub log_level: Option<String>,
    pub budget_ms: Option<u64>,
    pub max_path_len: Option<usize>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Fields set in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            words: overrides.words.or(self.words),
            grid: overrides.grid.or(self.grid),
            log_level: overrides.log_level.or(self.log_level),
            budget_ms: overrides.budget_ms.or(self.budget_ms),
            max_path_len: overrides.max_path_len.or(self.max_path_len),
        }
    }

    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            max_path_len: self.max_path_len,
            budget: self.budget_ms.map(Duration::from_millis),
        }
    }
}

/// Parse `"AB/CD"` or `"QU,A/B,C"`: rows split on `/`, tiles on `,` when present and per char otherwise.
pub fn parse_grid(text: &str) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    for row in text.split('/') {
        let row = row.trim();
        if row.is_empty() {
            bail!("grid {:?} has an empty row", text);
        }

        let tiles = if row.contains(',') {
            row.split(',').map(|tile| tile.trim().to_owned()).collect::<Vec<_>>()
        } else {
            row.chars().map(String::from).collect()
        };
        if tiles.iter().any(String::is_empty) {
            bail!("grid {:?} has an empty tile", text);
        }
        rows.push(tiles);
    }

    Ok(rows)
}

/// Parse a `row,col` pair.
pub fn parse_location(text: &str) -> Result<Location> {
    let Some((row, col)) = text.split_once(',') else {
        bail!("expected row,col but got {:?}", text);
    };
    let row = row.trim().parse().with_context(|| format!("bad row in {:?}", text))?;
    let col = col.trim().parse().with_context(|| format!("bad column in {:?}", text))?;

    Ok(Location(row, col))
}
