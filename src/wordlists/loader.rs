//! Word list loading utilities
//!
//! Provides functions to load word lists from files, readers or the embedded constants.

use crate::core::Word;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Where a word list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListSource {
    /// A list compiled into the binary
    Embedded(&'static [&'static str]),
    /// A newline-delimited file, read each time the list is loaded
    File(PathBuf),
    /// An in-memory list, mainly for tests and demos
    Inline(Vec<String>),
}

impl WordListSource {
    /// Load the source into words, skipping entries that are not valid words
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Unreadable` if a file cannot be opened or read,
    /// and `WordListError::Empty` if no valid word remains.
    pub fn load(&self) -> Result<Vec<Word>, WordListError> {
        let words = match self {
            Self::Embedded(slice) => words_from_slice(slice),
            Self::Inline(list) => list
                .iter()
                .filter_map(|s| Word::new(s.trim()).ok())
                .collect(),
            Self::File(path) => load_from_file(path)?,
        };

        if words.is_empty() {
            return Err(WordListError::Empty(self.describe()));
        }
        Ok(words)
    }

    /// Short human-readable name for logs and error messages
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Embedded(_) => "embedded list".to_string(),
            Self::File(path) => path.display().to_string(),
            Self::Inline(_) => "inline list".to_string(),
        }
    }
}

impl From<PathBuf> for WordListSource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<Vec<String>> for WordListSource {
    fn from(list: Vec<String>) -> Self {
        Self::Inline(list)
    }
}

impl From<&[&str]> for WordListSource {
    fn from(list: &[&str]) -> Self {
        Self::Inline(list.iter().map(|&s| s.to_string()).collect())
    }
}

/// Error type for word lists that cannot back a game
#[derive(Debug)]
pub enum WordListError {
    /// The file could not be opened or read
    Unreadable { path: PathBuf, source: io::Error },
    /// The source held no valid 5-letter words
    Empty(String),
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::Empty(name) => write!(f, "Word list {name} contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            Self::Empty(_) => None,
        }
    }
}

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns `WordListError::Unreadable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let unreadable = |source: io::Error| WordListError::Unreadable {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(unreadable)?;
    load_from_reader(BufReader::new(file)).map_err(unreadable)
}

/// Load words from any buffered reader, one word per line
///
/// # Errors
///
/// Returns the underlying I/O error if a line cannot be read.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Vec<Word>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty()
            && let Ok(word) = Word::new(trimmed)
        {
            words.push(word);
        }
    }
    Ok(words)
}

/// Convert a slice of strings to a Word vector, skipping invalid entries
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::new(s.trim()).ok())
        .collect()
}
