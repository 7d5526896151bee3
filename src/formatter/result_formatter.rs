use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::frequency::frequency_counter::FrequencyMapping;

pub struct ResultFormatter;

impl ResultFormatter {
    pub fn format_entry(word: &str, count: u32) -> String {
        format!("{}: {}", word, count)
    }

    /// One `"<word>: <count>"` line per entry, ascending by word.
    pub fn render(mapping: &FrequencyMapping) -> Vec<String> {
        mapping
            .iter()
            .map(|(word, count)| Self::format_entry(word, *count))
            .collect()
    }

    pub fn write_to<W: Write>(mapping: &FrequencyMapping, writer: &mut W) -> Result<(), io::Error> {
        for line in Self::render(mapping) {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    }

    /// Does not reject an empty mapping; callers decide whether that is allowed.
    pub fn save<P: AsRef<Path>>(mapping: &FrequencyMapping, path: P) -> Result<(), io::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(mapping, &mut writer)
    }

    pub fn parse_line(line: &str) -> Option<(String, u32)> {
        let (word, count) = line.split_once(": ")?;
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_lowercase()) {
            return None;
        }
        if count.is_empty() || !count.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let count = count.parse::<u32>().ok()?;
        Some((word.to_string(), count))
    }

    /// Inverse of `render`. Blank lines are skipped; the first malformed line is reported
    /// as `InvalidData` with its 1-based line number.
    pub fn parse_lines<R: BufRead>(reader: R) -> Result<FrequencyMapping, io::Error> {
        let mut mapping = FrequencyMapping::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match Self::parse_line(&line) {
                Some((word, count)) => mapping.insert(word, count),
                None => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("line {}: {:?}", i + 1, line),
                    ));
                }
            }
        }
        Ok(mapping)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<FrequencyMapping, io::Error> {
        let file = File::open(path)?;
        Self::parse_lines(BufReader::new(file))
    }
}
