use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use rustc_hash::FxHashSet;

use crate::utils::lines::for_each_lossy_line;

// Lowercased, trimmed words excluded from counting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopWordSet {
    stop_word_set: FxHashSet<String>,
}

pub fn normalize_stop_word(line: &str) -> String {
    line.trim().to_lowercase()
}

impl StopWordSet {
    pub fn new() -> StopWordSet {
        StopWordSet {
            stop_word_set: FxHashSet::default(),
        }
    }

    /// Builds a fresh set from one candidate word per line. Blank lines are skipped.
    pub fn load<R: BufRead>(reader: R) -> Result<StopWordSet, io::Error> {
        let mut stop_word_set = FxHashSet::default();
        for_each_lossy_line(reader, |line| {
            let word = normalize_stop_word(line);
            if !word.is_empty() {
                stop_word_set.insert(word);
            }
        })?;
        Ok(StopWordSet { stop_word_set })
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<StopWordSet, io::Error> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }

    /// Exact match. The probe must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.stop_word_set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.stop_word_set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_word_set.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let stop_word_set = iter
            .into_iter()
            .map(|word| normalize_stop_word(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        StopWordSet { stop_word_set }
    }
}
