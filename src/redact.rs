use crate::{Punctuation, Set, Token};

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Masks violating tokens and reassembles a token sequence into text.
#[derive(Clone, Debug)]
pub struct Redactor {
    punctuation: Punctuation,
    replacement: char,
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(Punctuation::default(), '*')
    }
}

impl Redactor {
    pub fn new(punctuation: Punctuation, replacement: char) -> Self {
        Self {
            punctuation,
            replacement,
        }
    }

    /// Replaces every token at one of `positions` with the replacement character, repeated once
    /// per character of the token, then joins the sequence like [`Self::join`].
    ///
    /// Spacing is decided by the original tokens, so a masked punctuation mark is still attached
    /// and a masked word is still spaced, whatever the replacement character.
    ///
    /// The mask intentionally reveals the length of the word it hides.
    pub fn redact<T: AsRef<str>>(&self, tokens: &[T], positions: &Set<usize>) -> String {
        let mut ret = String::new();
        for (i, token) in tokens.iter().map(AsRef::as_ref).enumerate() {
            if i > 0 && !self.punctuation.is_punctuation(token) {
                ret.push(' ');
            }
            if positions.contains(&i) {
                ret.push_str(&self.mask(token));
            } else {
                ret.push_str(token);
            }
        }
        ret
    }

    /// A run of the replacement character as long (in characters) as `word`.
    pub fn mask(&self, word: &str) -> String {
        std::iter::repeat(self.replacement)
            .take(word.chars().count())
            .collect()
    }

    /// Joins with single spaces, except that tokens made only of punctuation are appended
    /// directly onto the previous token. A leading punctuation token stands alone.
    pub fn join<T: AsRef<str>>(&self, tokens: &[T]) -> String {
        self.redact(tokens, &Set::default())
    }
}
