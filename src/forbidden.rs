use crate::{Error, Result, Set};

/// Ordered set of forbidden words, as managed by moderators.
///
/// Validation takes a snapshot via [`Self::as_slice`], so the store can be edited between
/// validations without affecting one in progress.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct ForbiddenWords {
    words: Vec<String>,
    index: Set<String>,
}

impl ForbiddenWords {
    /// Longest accepted word, in characters.
    pub const MAX_LEN: usize = 50;

    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects words, failing on the first invalid one.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ret = Self::new();
        for word in words {
            ret.insert(word.as_ref())?;
        }
        Ok(ret)
    }

    /// One word per line. Blank lines and lines starting with `#` are skipped.
    pub fn from_lines(lines: &str) -> Result<Self> {
        Self::from_words(
            lines
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#')),
        )
    }

    /// Adds a word (trimmed of surrounding whitespace). Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        let word = word.trim();
        if word.is_empty() {
            return Err(Error::invalid_config("forbidden word is empty"));
        }
        let len = word.chars().count();
        if len > Self::MAX_LEN {
            return Err(Error::invalid_config(format!(
                "forbidden word has {len} characters, more than {}",
                Self::MAX_LEN
            )));
        }
        if !self.index.insert(word.to_owned()) {
            return Ok(false);
        }
        self.words.push(word.to_owned());
        Ok(true)
    }

    /// Removes a word. Returns `false` if it wasn't present.
    pub fn remove(&mut self, word: &str) -> bool {
        let word = word.trim();
        if self.index.remove(word) {
            self.words.retain(|w| w != word);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word.trim())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// In insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.words
    }
}

impl TryFrom<Vec<String>> for ForbiddenWords {
    type Error = Error;

    fn try_from(words: Vec<String>) -> Result<Self> {
        Self::from_words(words)
    }
}

impl From<ForbiddenWords> for Vec<String> {
    fn from(words: ForbiddenWords) -> Self {
        words.words
    }
}
