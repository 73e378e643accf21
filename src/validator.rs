use crate::mtch::{Detection, Matcher};
use crate::normalize::{Lemmatize, Normalizer, Stem};
use crate::submission::Rejection;
use crate::token::{Tokenize, WordTokenizer};
use crate::{Config, Map, Punctuation, Redactor, Result, Set, Similarity, Threshold};
use lazy_static::lazy_static;
use tracing::{debug, trace, warn};

lazy_static! {
    static ref DEFAULT: Validator = Validator::new();
}

/// Outcome of validating one text.
#[derive(Clone, Debug, PartialEq)]
pub struct Validation {
    /// The text with violating words masked, and punctuation spacing normalized.
    pub redacted: String,
    /// One entry per masked word, in order of position.
    pub detections: Vec<Detection>,
}

impl Validation {
    /// `true` if at least one word was masked.
    pub fn has_violation(&self) -> bool {
        !self.detections.is_empty()
    }

    /// `(redacted, has_violation)`
    pub fn into_parts(self) -> (String, bool) {
        let violation = self.has_violation();
        (self.redacted, violation)
    }
}

/// Validator finds forbidden words, including inflected and slightly misspelled ones, and masks
/// them.
///
/// Text flows through a tokenizer, a normalizer (case folding, lemmatization, stemming), a
/// matcher, and a redactor. Forbidden words pass through the very same normalizer, so a word is
/// always an exact match for itself.
///
/// A `Validator` is immutable while validating and may be shared between threads.
pub struct Validator {
    config: Config,
    tokenizer: Box<dyn Tokenize>,
    /// Whether `tokenizer` was supplied by the user (and must survive punctuation changes).
    custom_tokenizer: bool,
    normalizer: Normalizer,
    redactor: Redactor,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Default options, see [`Config::default`] and [`Normalizer::default`].
    pub fn new() -> Self {
        Self::from_config(Config::default())
    }

    pub fn from_config(config: Config) -> Self {
        let mut normalizer = Normalizer::default();
        normalizer.set_strip_accents(config.strip_accents);
        Self {
            tokenizer: Box::new(WordTokenizer::new(config.punctuation.clone())),
            custom_tokenizer: false,
            normalizer,
            redactor: Redactor::new(config.punctuation.clone(), config.replacement),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Minimum similarity ratio, exclusive, for a word to be considered a misspelling of a
    /// forbidden word.
    ///
    /// Fails, leaving the previous threshold in place, unless `0 < threshold <= 1`.
    ///
    /// The default is `0.8`.
    pub fn with_threshold(&mut self, threshold: f64) -> Result<&mut Self> {
        self.config.threshold = Threshold::new(threshold)?;
        Ok(self)
    }

    /// The default is [`Similarity::QuickRatio`].
    pub fn with_similarity(&mut self, similarity: Similarity) -> &mut Self {
        self.config.similarity = similarity;
        self
    }

    /// Characters that are split off of words and re-attached to the previous word on output.
    ///
    /// The default is `. , ; ? !`.
    pub fn with_punctuation(&mut self, punctuation: Punctuation) -> &mut Self {
        if !self.custom_tokenizer {
            self.tokenizer = Box::new(WordTokenizer::new(punctuation.clone()));
        }
        self.redactor = Redactor::new(punctuation.clone(), self.config.replacement);
        self.config.punctuation = punctuation;
        self
    }

    /// Sets the character used to mask detected words.
    ///
    /// The default is `'*'`.
    pub fn with_censor_replacement(&mut self, replacement: char) -> &mut Self {
        self.redactor = Redactor::new(self.config.punctuation.clone(), replacement);
        self.config.replacement = replacement;
        self
    }

    /// Ignore diacritics when comparing words.
    ///
    /// The default is `false`.
    pub fn with_strip_accents(&mut self, strip_accents: bool) -> &mut Self {
        self.normalizer.set_strip_accents(strip_accents);
        self.config.strip_accents = strip_accents;
        self
    }

    pub fn with_tokenizer<T: Tokenize + 'static>(&mut self, tokenizer: T) -> &mut Self {
        self.tokenizer = Box::new(tokenizer);
        self.custom_tokenizer = true;
        self
    }

    /// The default returns words unchanged.
    pub fn with_lemmatizer<L: Lemmatize + 'static>(&mut self, lemmatizer: L) -> &mut Self {
        self.normalizer.set_lemmatizer(Box::new(lemmatizer));
        self
    }

    /// The default is [`SuffixStemmer::default`](crate::SuffixStemmer::default).
    pub fn with_stemmer<S: Stem + 'static>(&mut self, stemmer: S) -> &mut Self {
        self.normalizer.set_stemmer(Box::new(stemmer));
        self
    }

    /// Checks `text` against a snapshot of forbidden words.
    ///
    /// Fails only if the tokenizer or normalizer fails, in which case nothing is validated.
    pub fn validate<S: AsRef<str>>(&self, text: &str, forbidden: &[S]) -> Result<Validation> {
        self.run(
            text,
            forbidden,
            Matcher::new(self.config.threshold, self.config.similarity),
        )
    }

    fn run<S: AsRef<str>>(
        &self,
        text: &str,
        forbidden: &[S],
        matcher: Matcher,
    ) -> Result<Validation> {
        let tokens = self.tokenizer.tokenize(text)?;

        // The same word tends to recur within a text.
        let mut cache: Map<&str, String> = Map::default();
        let mut words = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let normalized = match cache.get(token.text.as_str()) {
                Some(normalized) => normalized.clone(),
                None => {
                    let normalized = self.normalizer.normalize(&token.text)?;
                    cache.insert(&token.text, normalized.clone());
                    normalized
                }
            };
            words.push(normalized);
        }

        let forbidden = forbidden
            .iter()
            .map(|word| self.normalizer.normalize(word.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let detections = matcher.detect(&words, &forbidden);
        for detection in &detections {
            trace!(%detection, "forbidden word");
        }

        let positions: Set<usize> = detections.iter().map(|d| d.position).collect();
        let redacted = self.redactor.redact(&tokens, &positions);

        debug!(
            tokens = tokens.len(),
            forbidden = forbidden.len(),
            violations = detections.len(),
            threshold = %matcher.threshold(),
            "validated text"
        );

        Ok(Validation {
            redacted,
            detections,
        })
    }

    /// Accepts or rejects a user submission.
    ///
    /// Clean text is accepted in its re-joined form (punctuation spacing normalized). Text with
    /// violations is rejected with the masked version, so the user can see which words to fix;
    /// it is never accepted in masked form.
    pub fn clean<S: AsRef<str>>(
        &self,
        text: &str,
        forbidden: &[S],
    ) -> std::result::Result<String, Rejection> {
        match self.validate(text, forbidden) {
            Ok(validation) if validation.has_violation() => Err(Rejection::BadLanguage {
                redacted: validation.redacted,
            }),
            Ok(validation) => Ok(validation.redacted),
            Err(error) => {
                warn!(%error, "could not validate submission");
                Err(Rejection::Unavailable)
            }
        }
    }
}

/// Validates with default options and a custom threshold, returning
/// `(redacted, has_violation)`.
///
/// Fails with [`Error::InvalidConfig`](crate::Error::InvalidConfig) unless
/// `0 < threshold <= 1`.
pub fn validate<S: AsRef<str>>(
    text: &str,
    forbidden: &[S],
    threshold: f64,
) -> Result<(String, bool)> {
    let matcher = Matcher::new(Threshold::new(threshold)?, Similarity::default());
    DEFAULT
        .run(text, forbidden, matcher)
        .map(Validation::into_parts)
}
