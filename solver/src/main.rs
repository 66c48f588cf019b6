use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use boggler::{Dictionary, Found, Grid, Location, Searcher};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use tracing::info;

use crate::config::{parse_grid, parse_location, Config};

mod config;
mod logging;

#[derive(Parser)]
#[command(name = "solver")]
#[command(about = "Find words on a Boggle grid", long_about = None)]
struct Cli {
    /// TOML file with defaults for the options below
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Word list, one word per line
    #[arg(short, long)]
    words: Option<PathBuf>,
    /// Rows separated by '/', tiles by ',' or one letter each, e.g. "QU,A/B,C"
    #[arg(short, long)]
    grid: Option<String>,
    /// Stop searching after this many milliseconds
    #[arg(long)]
    budget_ms: Option<u64>,
    /// Longest path tried by `max`
    #[arg(long)]
    max_path_len: Option<usize>,
    /// Log filter used when RUST_LOG is unset, e.g. "debug" or "boggler=trace"
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paths of exactly N cells
    Paths { n: usize },
    /// Words of exactly N letters
    Words { n: usize },
    /// One path per reachable word, preferring the longest
    Max,
    /// Print the word spelled by a path of row,col steps if it is valid
    Check { steps: Vec<String> },
}

impl Cli {
    fn overrides(&self) -> Result<Config> {
        Ok(Config {
            words: self.words.clone(),
            grid: self.grid.as_deref().map(parse_grid).transpose()?,
            log_level: self.log_level.clone(),
            budget_ms: self.budget_ms,
            max_path_len: self.max_path_len,
        })
    }
}

/// One output line: the word, then its path as space-separated `row,col` steps.
fn format_found(Found { path, word }: &Found) -> String {
    format!("{} {}", word, path.iter().map(|Location(row, col)| format!("{},{}", row, col)).join(" "))
}

/// The `check` outcome: the line to print, or [`None`] for an invalid path.
fn check(searcher: &Searcher, steps: &[String]) -> Result<Option<String>> {
    let path = steps.iter().map(|step| parse_location(step)).collect::<Result<Vec<_>>>()?;
    Ok(searcher.check(&path))
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let file = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let config = file.merge(cli.overrides()?);
    logging::init(config.log_level.as_deref().unwrap_or("info"));

    let rows = config.grid.clone().context("no grid given; pass --grid or set `grid` in the config")?;
    let grid = Grid::from_rows(rows);
    let words = config.words.clone().context("no word list given; pass --words or set `words` in the config")?;
    let dictionary = Dictionary::from_path(&words)
        .with_context(|| format!("failed to load {}", words.display()))?;
    info!(words = dictionary.len(), rows = grid.rows(), cols = grid.cols(), "loaded");

    let searcher = Searcher::new(&grid, &dictionary).with_config(config.search_config());
    let search = match cli.command {
        Command::Paths { n } => searcher.length_n_paths(n),
        Command::Words { n } => searcher.length_n_words(n),
        Command::Max => searcher.max_score(),
        Command::Check { steps } => {
            return Ok(match check(&searcher, &steps)? {
                Some(word) => {
                    println!("{}", word);
                    ExitCode::SUCCESS
                }
                None => ExitCode::FAILURE,
            });
        }
    };

    for found in &search.found {
        println!("{}", format_found(found));
    }
    info!(found = search.found.len(), complete = search.complete, "done");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use boggler::{Dictionary, Found, Grid, Location, Searcher};

    use super::{check, format_found};

    fn steps(steps: &[&str]) -> Vec<String> {
        steps.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn found_lines_list_word_then_steps() {
        let found = Found { path: vec![Location(0, 0), Location(0, 1), Location(1, 1)], word: "ABD".into() };
        assert_eq!(format_found(&found), "ABD 0,0 0,1 1,1");
    }

    #[test]
    fn search_results_format_one_line_each() {
        let grid = Grid::from_rows([["A", "B"], ["C", "D"]]);
        let dictionary = Dictionary::new(["ab", "ca"]);
        let lines = Searcher::new(&grid, &dictionary).length_n_paths(2).found.iter()
            .map(format_found)
            .collect::<Vec<_>>();
        assert_eq!(lines, ["AB 0,0 0,1", "CA 1,0 0,0"]);
    }

    #[test]
    fn check_prints_the_word_of_a_valid_path() {
        let grid = Grid::from_rows([["C", "A"], ["X", "T"]]);
        let dictionary = Dictionary::new(["cat"]);
        let searcher = Searcher::new(&grid, &dictionary);
        assert_eq!(check(&searcher, &steps(&["0,0", "0,1", "1,1"])).unwrap(), Some("CAT".into()));
    }

    #[test]
    fn check_rejects_invalid_paths() {
        let grid = Grid::from_rows([["C", "A"], ["X", "T"]]);
        let dictionary = Dictionary::new(["cat"]);
        let searcher = Searcher::new(&grid, &dictionary);
        // not a word
        assert_eq!(check(&searcher, &steps(&["1,0", "0,1"])).unwrap(), None);
        // revisits a cell
        assert_eq!(check(&searcher, &steps(&["0,0", "0,1", "0,0"])).unwrap(), None);
        // off the grid
        assert_eq!(check(&searcher, &steps(&["0,0", "0,1", "2,2"])).unwrap(), None);
        // unparseable steps are an error, not an invalid path
        assert!(check(&searcher, &steps(&["0;0"])).is_err());
    }
}
