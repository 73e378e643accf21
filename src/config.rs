use crate::similarity::Similarity;
use crate::{Error, Result, Set};
use lazy_static::lazy_static;
use std::fmt::{self, Display, Formatter};

lazy_static! {
    static ref PUNCTUATION: Punctuation = Punctuation(".,;?!".chars().collect());
}

/// Minimum similarity a fuzzy match must strictly exceed, in `(0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "f64", into = "f64")
)]
pub struct Threshold(f64);

impl Threshold {
    /// The threshold used when none is configured.
    pub const DEFAULT: Self = Self(0.8);

    /// Fails with [`Error::InvalidConfig`] unless `0 < value <= 1`. NaN is rejected.
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value <= 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::invalid_config(format!(
                "similarity threshold must be in (0, 1], got {value}"
            )))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Exclusive on the high side: a ratio equal to the threshold does not pass.
    pub fn is_exceeded_by(self, ratio: f64) -> bool {
        ratio > self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for Threshold {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Threshold> for f64 {
    fn from(threshold: Threshold) -> Self {
        threshold.0
    }
}

impl Display for Threshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of characters that attach to the preceding token instead of standing apart.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Punctuation(Set<char>);

impl Default for Punctuation {
    /// `. , ; ? !`
    fn default() -> Self {
        PUNCTUATION.clone()
    }
}

impl Punctuation {
    /// Empty.
    pub fn new() -> Self {
        Self(Default::default())
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Adds a punctuation character.
    pub fn insert(&mut self, c: char) {
        self.0.insert(c);
    }

    /// Removes a punctuation character.
    pub fn remove(&mut self, c: char) {
        self.0.remove(&c);
    }

    /// True if `token` is non-empty and made only of punctuation characters.
    pub fn is_punctuation(&self, token: &str) -> bool {
        !token.is_empty() && token.chars().all(|c| self.contains(c))
    }
}

impl FromIterator<char> for Punctuation {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Tunable behavior of a [`Validator`](crate::Validator).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub threshold: Threshold,
    pub similarity: Similarity,
    pub punctuation: Punctuation,
    /// Character repeated over each redacted token.
    pub replacement: char,
    /// Remove diacritics before normalization, so "ё" compares equal to "е".
    pub strip_accents: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            similarity: Similarity::default(),
            punctuation: Punctuation::default(),
            replacement: '*',
            strip_accents: false,
        }
    }
}
