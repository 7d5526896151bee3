use std::{
    collections::{BTreeMap, btree_map},
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{stop_words::stop_word_set::StopWordSet, utils::lines::for_each_lossy_line};

static NON_LETTER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z]").expect("non-letter pattern is valid"));

/// Word to occurrence count, iterated in ascending word order.
///
/// Keys are non-empty and consist of lowercase ASCII letters only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMapping {
    word_frequencies: BTreeMap<String, u32>,
}

impl FrequencyMapping {
    pub fn new() -> FrequencyMapping {
        FrequencyMapping {
            word_frequencies: BTreeMap::new(),
        }
    }

    pub fn increment(&mut self, word: &str) {
        let count = self.word_frequencies.entry(word.to_string()).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub fn insert(&mut self, word: String, count: u32) {
        self.word_frequencies.insert(word, count);
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.word_frequencies.get(word).copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, u32> {
        self.word_frequencies.iter()
    }

    pub fn len(&self) -> usize {
        self.word_frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_frequencies.is_empty()
    }

    pub fn total_count(&self) -> u64 {
        self.word_frequencies.values().map(|&count| count as u64).sum()
    }
}

impl<'a> IntoIterator for &'a FrequencyMapping {
    type Item = (&'a String, &'a u32);
    type IntoIter = btree_map::Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.word_frequencies.iter()
    }
}

/// Replaces every non ASCII letter with a space, lowercases, and splits on whitespace.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let normalized = NON_LETTER_REGEX.replace_all(line, " ").to_ascii_lowercase();
    normalized.split_whitespace().map(str::to_string).collect()
}

pub struct FrequencyCounter<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> FrequencyCounter<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> FrequencyCounter<'a> {
        FrequencyCounter { stop_words }
    }

    pub fn count_line(&self, line: &str, word_frequencies: &mut FrequencyMapping) {
        for word in tokenize_line(line) {
            if !word.is_empty() && !self.stop_words.contains(&word) {
                word_frequencies.increment(&word);
            }
        }
    }

    /// Counts every retained word of `reader`. A read error drops the partial mapping.
    /// Malformed UTF-8 acts as a delimiter like any other non-letter.
    pub fn process<R: BufRead>(&self, reader: R) -> Result<FrequencyMapping, io::Error> {
        let mut word_frequencies = FrequencyMapping::new();
        for_each_lossy_line(reader, |line| self.count_line(line, &mut word_frequencies))?;
        Ok(word_frequencies)
    }

    pub fn process_path<P: AsRef<Path>>(&self, path: P) -> Result<FrequencyMapping, io::Error> {
        let file = File::open(path)?;
        self.process(BufReader::new(file))
    }
}
