use std::path::Path;

use tracing::{debug, info};

use crate::{
    formatter::result_formatter::ResultFormatter,
    frequency::frequency_counter::{FrequencyCounter, FrequencyMapping},
    stop_words::stop_word_set::StopWordSet,
    utils::error::TagError,
};

/// State of one extraction session: the loaded stop words and the latest results.
///
/// Both are replaced wholesale. A failed stop word load keeps the previous set;
/// a failed process discards the previous results.
#[derive(Debug, Default)]
pub struct TagSession {
    stop_words: Option<StopWordSet>,
    results: Option<FrequencyMapping>,
}

impl TagSession {
    pub fn new() -> TagSession {
        TagSession {
            stop_words: None,
            results: None,
        }
    }

    pub fn stop_words(&self) -> Option<&StopWordSet> {
        self.stop_words.as_ref()
    }

    pub fn results(&self) -> Option<&FrequencyMapping> {
        self.results.as_ref()
    }

    pub fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<&StopWordSet, TagError> {
        let path = path.as_ref();
        let stop_words = StopWordSet::from_path(path).map_err(|source| TagError::ReadStopWords {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), count = stop_words.len(), "loaded stop words");
        let stop_words: &StopWordSet = self.stop_words.insert(stop_words);
        Ok(stop_words)
    }

    pub fn process_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&FrequencyMapping, TagError> {
        let path = path.as_ref();
        let stop_words = self.stop_words.as_ref().ok_or(TagError::StopWordsNotLoaded)?;

        self.results = None;
        let mapping = FrequencyCounter::new(stop_words)
            .process_path(path)
            .map_err(|source| TagError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        info!(
            path = %path.display(),
            distinct = mapping.len(),
            total = mapping.total_count(),
            "processed text file"
        );
        let mapping: &FrequencyMapping = self.results.insert(mapping);
        Ok(mapping)
    }

    /// Replaces the results with a previously saved tag file.
    pub fn load_results<P: AsRef<Path>>(&mut self, path: P) -> Result<&FrequencyMapping, TagError> {
        let path = path.as_ref();
        self.results = None;
        let mapping = ResultFormatter::load(path).map_err(|source| TagError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), distinct = mapping.len(), "loaded saved tags");
        let mapping: &FrequencyMapping = self.results.insert(mapping);
        Ok(mapping)
    }

    pub fn display_lines(&self) -> Vec<String> {
        match &self.results {
            Some(mapping) => ResultFormatter::render(mapping),
            None => Vec::new(),
        }
    }

    pub fn save_results<P: AsRef<Path>>(&self, path: P) -> Result<(), TagError> {
        let path = path.as_ref();
        let mapping = match &self.results {
            Some(mapping) if !mapping.is_empty() => mapping,
            _ => return Err(TagError::NoResults),
        };
        ResultFormatter::save(mapping, path).map_err(|source| TagError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), lines = mapping.len(), "saved tags");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_full_session() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "the\n ON \n");
        let text_path = write_file(&dir, "text.txt", "The Cat sat on the MAT.\n");
        let out_path = dir.path().join("tags.txt");

        let mut session = TagSession::new();
        assert_eq!(session.load_stop_words(&stop_path).unwrap().len(), 2);
        assert_eq!(session.process_file(&text_path).unwrap().len(), 3);
        assert_eq!(session.display_lines(), vec!["cat: 1", "mat: 1", "sat: 1"]);

        session.save_results(&out_path).unwrap();
        assert_eq!(fs::read_to_string(&out_path).unwrap(), "cat: 1\nmat: 1\nsat: 1\n");
    }

    #[test]
    fn test_process_without_stop_words_is_usage_error() {
        let dir = tempdir().unwrap();
        let text_path = write_file(&dir, "text.txt", "a a a b b c");

        let mut session = TagSession::new();
        let err = session.process_file(&text_path).unwrap_err();
        assert!(matches!(err, TagError::StopWordsNotLoaded));
        assert!(err.is_usage());
        assert!(session.results().is_none());
        assert!(session.display_lines().is_empty());
    }

    #[test]
    fn test_empty_stop_word_file_counts_everything() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "");
        let text_path = write_file(&dir, "text.txt", "a a a b b c");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        let mapping = session.process_file(&text_path).unwrap();
        assert_eq!(mapping.get("a"), Some(3));
        assert_eq!(mapping.get("b"), Some(2));
        assert_eq!(mapping.get("c"), Some(1));
    }

    #[test]
    fn test_save_without_results_is_usage_error() {
        let dir = tempdir().unwrap();
        let out_path = dir.path().join("tags.txt");

        let session = TagSession::new();
        let err = session.save_results(&out_path).unwrap_err();
        assert!(matches!(err, TagError::NoResults));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_save_empty_results_is_usage_error() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "only\n");
        let text_path = write_file(&dir, "text.txt", "Only, ONLY... only!\n");
        let out_path = dir.path().join("tags.txt");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        assert!(session.process_file(&text_path).unwrap().is_empty());

        let err = session.save_results(&out_path).unwrap_err();
        assert!(matches!(err, TagError::NoResults));
        assert!(!out_path.exists());
    }

    #[test]
    fn test_reload_replaces_stop_words() {
        let dir = tempdir().unwrap();
        let first = write_file(&dir, "first.txt", "cat\n");
        let second = write_file(&dir, "second.txt", "dog\n");
        let text_path = write_file(&dir, "text.txt", "cat dog");

        let mut session = TagSession::new();
        session.load_stop_words(&first).unwrap();
        session.load_stop_words(&second).unwrap();

        let mapping = session.process_file(&text_path).unwrap();
        assert_eq!(mapping.get("cat"), Some(1));
        assert_eq!(mapping.get("dog"), None);
    }

    #[test]
    fn test_failed_stop_word_load_keeps_previous_set() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "cat\n");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        let err = session
            .load_stop_words(dir.path().join("missing.txt"))
            .unwrap_err();

        assert!(matches!(err, TagError::ReadStopWords { .. }));
        assert!(!err.is_usage());
        assert!(session.stop_words().unwrap().contains("cat"));
    }

    #[test]
    fn test_failed_process_discards_previous_results() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "");
        let text_path = write_file(&dir, "text.txt", "cat");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        session.process_file(&text_path).unwrap();

        let err = session
            .process_file(dir.path().join("missing.txt"))
            .unwrap_err();
        assert!(matches!(err, TagError::Read { .. }));
        assert!(session.results().is_none());
        assert!(matches!(
            session.save_results(dir.path().join("out.txt")),
            Err(TagError::NoResults)
        ));
    }

    #[test]
    fn test_process_replaces_results() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "");
        let first = write_file(&dir, "first.txt", "cat cat");
        let second = write_file(&dir, "second.txt", "dog");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        session.process_file(&first).unwrap();
        session.process_file(&second).unwrap();

        assert_eq!(session.display_lines(), vec!["dog: 1"]);
    }

    #[test]
    fn test_save_to_unwritable_path_is_write_error() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "");
        let text_path = write_file(&dir, "text.txt", "cat");

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        session.process_file(&text_path).unwrap();

        let err = session
            .save_results(dir.path().join("missing_dir").join("out.txt"))
            .unwrap_err();
        assert!(matches!(err, TagError::Write { .. }));
    }

    #[test]
    fn test_non_utf8_text_file_is_processed() {
        let dir = tempdir().unwrap();
        let stop_path = write_file(&dir, "stop.txt", "the\n");
        let text_path = dir.path().join("latin1.txt");
        fs::write(&text_path, b"The caf\xe9 is open\nopen door\n").unwrap();

        let mut session = TagSession::new();
        session.load_stop_words(&stop_path).unwrap();
        session.process_file(&text_path).unwrap();
        assert_eq!(
            session.display_lines(),
            vec!["caf: 1", "door: 1", "is: 1", "open: 2"]
        );
    }

    #[test]
    fn test_load_saved_results() {
        let dir = tempdir().unwrap();
        let saved = write_file(&dir, "tags.txt", "cat: 2\ndog: 5\n");
        let broken = write_file(&dir, "broken.txt", "cat: 2\nnot a tag line\n");

        let mut session = TagSession::new();
        session.load_results(&saved).unwrap();
        assert_eq!(session.display_lines(), vec!["cat: 2", "dog: 5"]);

        let err = session.load_results(&broken).unwrap_err();
        assert!(matches!(err, TagError::Read { .. }));
        assert!(session.results().is_none());
    }
}
