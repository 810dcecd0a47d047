//! Word list loading utilities
//!
//! Provides [`WordList`], built from the embedded constants or from a file,
//! and the [`WordValidator`] seam used to accept or reject guesses.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::Path;

/// Membership check applied to every submitted guess
pub trait WordValidator {
    /// Whether `text` is an acceptable guess
    fn is_valid_word(&self, text: &str) -> bool;
}

impl<F> WordValidator for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, text: &str) -> bool {
        self(text)
    }
}

/// Ordered list of words with constant-time membership
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from already validated words, dropping duplicates
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashSet::default();
        let words = words
            .into_iter()
            .filter(|w| index.insert(w.text().to_string()))
            .collect();
        Self { words, index }
    }

    /// Convert embedded string slice to a word list
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::wordlists::{ANSWERS, WordList};
    ///
    /// let list = WordList::from_slice(ANSWERS);
    /// assert_eq!(list.len(), ANSWERS.len());
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(words_from_slice(slice))
    }

    /// Load a word list from a file, one word per line
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read or opened.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    /// Words in their original order
    #[must_use]
    pub fn words(&self) -> &[Word] {
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

    /// Whether the list contains `text` (case-insensitive)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(&text.trim().to_lowercase())
    }
}

impl WordValidator for WordList {
    fn is_valid_word(&self, text: &str) -> bool {
        self.contains(text)
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines and any
/// invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert embedded string slice to Word vector
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn word_list_membership_is_case_insensitive() {
        let list = WordList::from_slice(&["apple", "table"]);
        assert!(list.contains("apple"));
        assert!(list.contains("TABLE"));
        assert!(!list.contains("zebra"));
        assert!(list.is_valid_word("Apple"));
    }

    #[test]
    fn word_list_drops_duplicates_keeping_order() {
        let list = WordList::from_slice(&["table", "apple", "table"]);
        assert_eq!(list.len(), 2);
        assert_eq!(list.words()[0].text(), "table");
        assert_eq!(list.words()[1].text(), "apple");
    }

    #[test]
    fn closures_are_validators() {
        let only_apple = |text: &str| text == "apple";
        assert!(only_apple.is_valid_word("apple"));
        assert!(!only_apple.is_valid_word("table"));
    }

    #[test]
    fn load_from_file_skips_blank_and_invalid_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\n\n  Table \nbananas\nhello").unwrap();

        let list = WordList::load(file.path()).unwrap();
        let texts: Vec<_> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["apple", "table", "hello"]);
    }

    #[test]
    fn load_missing_file_is_error() {
        assert!(WordList::load("/definitely/not/here.txt").is_err());
    }
}
