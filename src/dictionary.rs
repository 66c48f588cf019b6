use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

/// The set of accepted words, uppercase-normalized.
pub type WordSet = HashSet<String>;

/// Every non-empty prefix of every word in a [`WordSet`], the full words included.
///
/// Only ever used to abandon hopeless branches; acceptance always consults the [`WordSet`].
pub type PrefixSet = HashSet<String>;

/// Reasons a word list could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    /// The underlying reader failed.
    #[error("failed to read word list")]
    Io(#[from] std::io::Error),
}

/// Dedupe `words` into a [`WordSet`], uppercasing each one and dropping empty strings.
pub fn normalize<I, S>(words: I) -> WordSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    words.into_iter()
        .map(|word| word.as_ref().to_uppercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Collect every prefix of length `1..=len` of each word.
///
/// Prefixes are cut on `char` boundaries, so non-ASCII words are safe.
pub fn prefixes<'a>(words: impl IntoIterator<Item = &'a String>) -> PrefixSet {
    let mut res = PrefixSet::new();

    for word in words {
        for (end, c) in word.char_indices() {
            res.insert(word[..end + c.len_utf8()].to_owned());
        }
    }

    res
}

/// A [`WordSet`] together with its [`PrefixSet`]. Immutable once built.
#[derive(Clone, Debug, Default)]
pub struct Dictionary {
    words: WordSet,
    prefixes: PrefixSet,
}

impl Dictionary {
    /// Normalize `words` and index their prefixes.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = normalize(words);
        let prefixes = prefixes(&words);
        debug!(words = words.len(), prefixes = prefixes.len(), "built dictionary");

        Self { words, prefixes }
    }

    /// Read a word list with one word per line. Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.push(word.to_owned());
            }
        }

        Ok(Self::new(words))
    }

    /// Open `path` and read it as with [`Self::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Whether `word` is an accepted word. `word` must already be uppercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Whether some accepted word starts with `prefix`. The empty string is never a prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// Number of accepted words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word is accepted.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
