//! badlang is a forbidden-word filter for user submitted text.
//!
//! Moderators maintain a list of forbidden words. Every submission is tokenized, each word is
//! case folded, lemmatized and stemmed, and compared against the equally normalized forbidden
//! words, both exactly and by similarity ratio, so that inflected forms ("спамом") and minor
//! misspellings ("спамм") are caught too. Violating words are masked with `*`, one per character.
//!
//! ```
//! let (redacted, violation) = badlang::validate("это спам.", &["спам"], 0.8).unwrap();
//! assert_eq!(redacted, "это ****.");
//! assert!(violation);
//! ```
//!
//! Lemmatization and stemming are language specific, and are plugged in via the [`Lemmatize`]
//! and [`Stem`] traits. The defaults are no lemmatization and [`SuffixStemmer`], which strips
//! common Russian inflectional endings.

mod config;
mod error;
mod forbidden;
mod mtch;
mod normalize;
mod redact;
mod similarity;
mod submission;
mod token;
mod validator;

pub use config::{Config, Punctuation, Threshold};
pub use error::{Error, Result};
pub use forbidden::ForbiddenWords;
pub use mtch::{Detection, MatchKind, Matcher};
pub use normalize::{
    fold, DictionaryLemmatizer, IdentityLemmatizer, IdentityStemmer, Lemmatize, Normalizer, Stem,
    SuffixStemmer,
};
pub use redact::Redactor;
pub use similarity::{quick_ratio, Similarity};
pub use submission::Rejection;
pub use token::{is_delimiter, is_whitespace, Token, Tokenize, WordTokenizer};
pub use validator::{validate, Validation, Validator};

pub(crate) type Map<K, V> = rustc_hash::FxHashMap<K, V>;
pub(crate) type Set<T> = rustc_hash::FxHashSet<T>;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
