use crate::{Error, Map, Result};
use finl_unicode::categories::{CharacterCategories, MinorCategory};
use lazy_static::lazy_static;
use std::fmt::{self, Debug, Formatter};
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Russian inflectional endings, longest first.
    static ref RUSSIAN_SUFFIXES: Vec<String> = {
        let mut suffixes: Vec<String> = [
            "ость", "ости", "ами", "ями", "ого", "его", "ому", "ему", "ыми", "ими", "ешь", "ишь",
            "ете", "ите", "ать", "ять", "еть", "ить", "ла", "ло", "ли", "ая", "яя", "ое", "ее",
            "ые", "ие", "ый", "ий", "ой", "ом", "ем", "ам", "ям", "ах", "ях", "ов", "ев", "ей",
            "ью", "ия", "ии", "ет", "ит", "ут", "ют", "ат", "ят", "ть", "а", "я", "о", "е", "ы",
            "и", "у", "ю", "ь", "й",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        sort_longest_first(&mut suffixes);
        suffixes
    };
}

fn sort_longest_first(suffixes: &mut [String]) {
    suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
}

/// Maps a word to its dictionary base form (lemma).
///
/// Receives words that were already case folded.
pub trait Lemmatize: Send + Sync {
    fn lemmatize(&self, word: &str) -> Result<String>;
}

/// Maps a lemma to its morphological root.
pub trait Stem: Send + Sync {
    fn stem(&self, word: &str) -> Result<String>;
}

/// Returns words unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentityLemmatizer;

impl Lemmatize for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String> {
        Ok(word.to_owned())
    }
}

/// Returns words unchanged.
#[derive(Copy, Clone, Debug, Default)]
pub struct IdentityStemmer;

impl Stem for IdentityStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        Ok(word.to_owned())
    }
}

/// Looks up inflected forms in a table. Unknown words are their own lemma.
///
/// Forms are matched with and without their accents, so the table works whether or not the
/// [`Normalizer`] strips accents.
#[derive(Clone, Debug, Default)]
pub struct DictionaryLemmatizer {
    lemmas: Map<String, String>,
    /// Same entries, keyed by the accent stripped form.
    stripped: Map<String, String>,
}

impl DictionaryLemmatizer {
    /// Empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses one `form,lemma` pair per line. Blank lines and lines starting with `#` are
    /// skipped.
    pub fn from_lines(lines: &str) -> Result<Self> {
        let mut ret = Self::new();
        for (number, line) in lines.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.split_once(',') {
                Some((form, lemma)) if !form.trim().is_empty() && !lemma.trim().is_empty() => {
                    ret.insert(form.trim(), lemma.trim());
                }
                _ => {
                    return Err(Error::invalid_config(format!(
                        "line {}: expected `form,lemma`, got {:?}",
                        number + 1,
                        line
                    )))
                }
            }
        }
        Ok(ret)
    }

    /// Adds (or overwrites) the lemma of an inflected form. Both are case folded.
    pub fn insert(&mut self, form: &str, lemma: &str) {
        let lemma = fold(lemma, false);
        self.stripped.insert(fold(form, true), lemma.clone());
        self.lemmas.insert(fold(form, false), lemma);
    }

    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatize for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> Result<String> {
        Ok(self
            .lemmas
            .get(word)
            .or_else(|| self.stripped.get(word))
            .cloned()
            .unwrap_or_else(|| word.to_owned()))
    }
}

/// Strips the longest matching suffix, as long as at least `min_stem` characters remain.
#[derive(Clone, Debug)]
pub struct SuffixStemmer {
    /// Sorted longest first.
    suffixes: Vec<String>,
    min_stem: usize,
}

impl Default for SuffixStemmer {
    /// Russian inflectional endings, keeping at least 3 characters.
    fn default() -> Self {
        Self {
            suffixes: RUSSIAN_SUFFIXES.clone(),
            min_stem: 3,
        }
    }
}

impl SuffixStemmer {
    pub fn with_suffixes<I, S>(suffixes: I, min_stem: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        sort_longest_first(&mut suffixes);
        Self { suffixes, min_stem }
    }
}

impl Stem for SuffixStemmer {
    fn stem(&self, word: &str) -> Result<String> {
        let len = word.chars().count();
        for suffix in &self.suffixes {
            if word.ends_with(suffix.as_str()) && len >= suffix.chars().count() + self.min_stem {
                return Ok(word[..word.len() - suffix.len()].to_owned());
            }
        }
        Ok(word.to_owned())
    }
}

/// Lowercases, drops invisible format and unassigned characters, and recomposes (NFC).
///
/// With `strip_accents`, also removes diacritical marks, so `"Ёлка"` folds to `"елка"`.
pub fn fold(word: &str, strip_accents: bool) -> String {
    fn keep(c: char, strip_accents: bool) -> bool {
        match c.get_minor_category() {
            MinorCategory::Cf | MinorCategory::Cn | MinorCategory::Co => false,
            MinorCategory::Mn => !strip_accents,
            _ => true,
        }
    }

    word.to_lowercase()
        .nfd()
        .filter(|&c| keep(c, strip_accents))
        .nfc()
        .collect()
}

/// Two-stage normalization (lemmatize, then stem) preceded by case folding.
///
/// The same instance normalizes input words and forbidden words, so identical strings always
/// produce identical forms.
pub struct Normalizer {
    lemmatizer: Box<dyn Lemmatize>,
    stemmer: Box<dyn Stem>,
    strip_accents: bool,
}

impl Debug for Normalizer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("lemmatizer", &"<lemmatizer>")
            .field("stemmer", &"<stemmer>")
            .field("strip_accents", &self.strip_accents)
            .finish()
    }
}

impl Default for Normalizer {
    /// No lemmatization, Russian suffix stemming.
    fn default() -> Self {
        Self::new(IdentityLemmatizer, SuffixStemmer::default())
    }
}

impl Normalizer {
    pub fn new<L, S>(lemmatizer: L, stemmer: S) -> Self
    where
        L: Lemmatize + 'static,
        S: Stem + 'static,
    {
        Self {
            lemmatizer: Box::new(lemmatizer),
            stemmer: Box::new(stemmer),
            strip_accents: false,
        }
    }

    pub fn set_lemmatizer(&mut self, lemmatizer: Box<dyn Lemmatize>) {
        self.lemmatizer = lemmatizer;
    }

    pub fn set_stemmer(&mut self, stemmer: Box<dyn Stem>) {
        self.stemmer = stemmer;
    }

    pub fn set_strip_accents(&mut self, strip_accents: bool) {
        self.strip_accents = strip_accents;
    }

    /// Folds case, lemmatizes, then stems. Capability errors are returned unchanged.
    ///
    /// The lemma is folded again, since a lemmatizer may return accents the input had stripped.
    pub fn normalize(&self, word: &str) -> Result<String> {
        let folded = fold(word, self.strip_accents);
        let lemma = self.lemmatizer.lemmatize(&folded)?;
        self.stemmer.stem(&fold(&lemma, self.strip_accents))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_case_and_marks() {
        assert_eq!(fold("СПАМ", false), "спам");
        assert_eq!(fold("Ёлка", false), "ёлка");
        assert_eq!(fold("Ёлка", true), "елка");
        assert_eq!(fold("Café", true), "cafe");
        // Soft hyphen and zero width joiner are invisible.
        assert_eq!(fold("сп\u{00AD}а\u{200D}м", false), "спам");
        // Decomposed input recomposes.
        assert_eq!(fold("e\u{0301}", false), "\u{00E9}");
    }

    #[test]
    fn dictionary_lemmatizer() {
        let lemmatizer = DictionaryLemmatizer::from_lines(
            "# form,lemma\n\nспама, спам\nСПАМОМ,спам\n",
        )
        .unwrap();
        assert_eq!(lemmatizer.len(), 2);
        assert_eq!(lemmatizer.lemmatize("спама").unwrap(), "спам");
        assert_eq!(lemmatizer.lemmatize("спамом").unwrap(), "спам");
        assert_eq!(lemmatizer.lemmatize("мир").unwrap(), "мир");
    }

    #[test]
    fn dictionary_lemmatizer_ignores_accents() {
        let lemmatizer = DictionaryLemmatizer::from_lines("пошёл,идти\nелки,Ёлка").unwrap();
        assert_eq!(lemmatizer.lemmatize("пошёл").unwrap(), "идти");
        assert_eq!(lemmatizer.lemmatize("пошел").unwrap(), "идти");

        let mut normalizer = Normalizer::new(lemmatizer, IdentityStemmer);
        normalizer.set_strip_accents(true);
        assert_eq!(normalizer.normalize("Пошёл").unwrap(), "идти");
        assert_eq!(
            normalizer.normalize("ёлки").unwrap(),
            normalizer.normalize("Ёлка").unwrap()
        );
    }

    #[test]
    fn dictionary_lemmatizer_rejects_malformed() {
        for bad in ["спама", "спама,", ",спам"] {
            assert!(
                matches!(
                    DictionaryLemmatizer::from_lines(bad),
                    Err(Error::InvalidConfig(_))
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn suffix_stemmer() {
        let stemmer = SuffixStemmer::default();
        assert_eq!(stemmer.stem("спам").unwrap(), "спам");
        assert_eq!(stemmer.stem("спама").unwrap(), "спам");
        assert_eq!(stemmer.stem("спамом").unwrap(), "спам");
        assert_eq!(stemmer.stem("дураками").unwrap(), "дурак");
        assert_eq!(stemmer.stem("дурак").unwrap(), "дурак");
        // Too short to strip.
        assert_eq!(stemmer.stem("мир").unwrap(), "мир");
        assert_eq!(stemmer.stem("").unwrap(), "");
    }

    #[test]
    fn custom_suffixes() {
        let stemmer = SuffixStemmer::with_suffixes(["s", "ing"], 2);
        assert_eq!(stemmer.stem("spamming").unwrap(), "spamm");
        assert_eq!(stemmer.stem("spams").unwrap(), "spam");
        assert_eq!(stemmer.stem("is").unwrap(), "is");
    }

    #[test]
    fn normalize_is_reflexive() {
        let normalizer = Normalizer::default();
        for word in ["спам", "Спамом", "ДУРАК", "hello", "!", ""] {
            assert_eq!(
                normalizer.normalize(word).unwrap(),
                normalizer.normalize(&word.to_string()).unwrap()
            );
        }
        assert_eq!(
            normalizer.normalize("Спамом").unwrap(),
            normalizer.normalize("спама").unwrap()
        );
    }

    #[test]
    fn normalize_propagates_errors() {
        struct Broken;

        impl Stem for Broken {
            fn stem(&self, _: &str) -> Result<String> {
                Err(Error::unavailable("model not loaded"))
            }
        }

        let normalizer = Normalizer::new(IdentityLemmatizer, Broken);
        assert_eq!(
            normalizer.normalize("спам"),
            Err(Error::Unavailable(String::from("model not loaded")))
        );
    }
}
