//! Word list used both to pick targets and to validate guesses.
//!
//! Entries are kept as loaded (trimmed, blank lines dropped) and never validated for length
//! or character set; entries that don't fit a round simply never match a guess. Membership
//! is answered from a lowercase-normalized set.

use crate::error::GameError;
use crate::{debug_log, info_log};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/dictionary5.txt");

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();
        let index = words.iter().map(|word| word.to_lowercase()).collect();
        Self { words, index }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(data: &str) -> Self {
        Self::from_lines(data.lines())
    }

    /// The built-in five-letter word list.
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_str(EMBEDDED_DICTIONARY)
    }

    /// Read a newline-delimited word list.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Load` if the file is missing or cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let path = path.as_ref();
        let load_err = |source| GameError::Load {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(load_err)?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line.map_err(load_err)?);
        }

        let dictionary = Self::from_lines(lines);
        info_log!(
            "Loaded {} words from '{}'",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Case-insensitive exact match.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.to_lowercase())
    }

    /// Uniformly pick any entry.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` when there are no entries.
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, GameError> {
        self.words
            .choose(rng)
            .map(String::as_str)
            .ok_or(GameError::EmptyDictionary)
    }

    /// Uniformly pick an entry that is exactly `length` characters long.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyDictionary` when no entry has that length.
    pub fn pick_random_of_length<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<&str, GameError> {
        let pool: Vec<&str> = self
            .words
            .iter()
            .map(String::as_str)
            .filter(|word| word.chars().count() == length)
            .collect();
        debug_log!("{} candidate targets of length {}", pool.len(), length);
        pool.choose(rng).copied().ok_or(GameError::EmptyDictionary)
    }

    #[must_use]
    pub fn count_of_length(&self, length: usize) -> usize {
        self.words
            .iter()
            .filter(|word| word.chars().count() == length)
            .count()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
