use crate::{Punctuation, Result};
use finl_unicode::categories::{CharacterCategories, MinorCategory};

/// A word or punctuation mark, as it appeared in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// Original surface form, casing included.
    pub text: String,
    /// Index of this token in the sequence it was produced in.
    pub position: usize,
}

impl Token {
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }

    /// Length in characters, which is what redaction preserves.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Splits raw text into an ordered sequence of tokens.
///
/// Implementations must be safe to share between threads, and must number tokens `0..n` in
/// order.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>>;
}

/// Splits on whitespace, then splits every punctuation mark, bracket and quote off into a
/// standalone, single character token.
///
/// A punctuation mark between two digits (`"3.14"`, `"1,5"`) and an apostrophe between two
/// letters (`"don't"`) stay part of the word.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer {
    punctuation: Punctuation,
}

impl WordTokenizer {
    pub fn new(punctuation: Punctuation) -> Self {
        Self { punctuation }
    }

    fn push(tokens: &mut Vec<Token>, text: &str) {
        let position = tokens.len();
        tokens.push(Token::new(text, position));
    }

    fn is_separate(&self, c: char) -> bool {
        self.punctuation.contains(c) || is_delimiter(c)
    }

    fn is_inner(&self, prev: Option<char>, c: char, next: Option<char>) -> bool {
        match (prev, next) {
            (Some(prev), Some(next)) if self.punctuation.contains(c) => {
                prev.is_numeric() && next.is_numeric()
            }
            (Some(prev), Some(next)) if matches!(c, '\'' | '\u{2019}') => {
                prev.is_alphabetic() && next.is_alphabetic()
            }
            _ => false,
        }
    }
}

impl Tokenize for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        for chunk in text.split(is_whitespace).filter(|c| !c.is_empty()) {
            let chars: Vec<(usize, char)> = chunk.char_indices().collect();
            let mut start = 0;

            for (i, &(offset, c)) in chars.iter().enumerate() {
                if !self.is_separate(c) {
                    continue;
                }
                let prev = i.checked_sub(1).map(|j| chars[j].1);
                let next = chars.get(i + 1).map(|&(_, c)| c);
                if self.is_inner(prev, c, next) {
                    continue;
                }

                if start < offset {
                    Self::push(&mut tokens, &chunk[start..offset]);
                }
                let end = offset + c.len_utf8();
                Self::push(&mut tokens, &chunk[offset..end]);
                start = end;
            }

            if start < chunk.len() {
                Self::push(&mut tokens, &chunk[start..]);
            }
        }

        Ok(tokens)
    }
}

/// Brackets, quotes and the colon. They always form their own token but, unlike punctuation, are
/// not attached to the previous word on output.
pub fn is_delimiter(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '['
            | ']'
            | '{'
            | '}'
            | '«'
            | '»'
            | '"'
            | '“'
            | '”'
            | '„'
            | '‘'
            | '’'
            | '\''
            | ':'
    )
}

/// Returns true iff the character is effectively whitespace. The definition of whitespace is broader
/// than that of Unicode, because it includes control characters and a few additional blank characters.
pub fn is_whitespace(c: char) -> bool {
    // NOTE: The following characters are not detected by standard means but show up as blank.
    // https://www.compart.com/en/unicode/U+2800
    // https://www.compart.com/en/unicode/U+3164
    c.is_whitespace()
        || matches!(c.get_minor_category(), MinorCategory::Cc)
        || c == '\u{2800}'
        || c == '\u{3164}'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(text: &str) -> Vec<String> {
        WordTokenizer::default()
            .tokenize(text)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn separates_punctuation() {
        assert_eq!(texts("это спам."), ["это", "спам", "."]);
        assert_eq!(texts("привет, мир!"), ["привет", ",", "мир", "!"]);
        assert_eq!(texts("что?!"), ["что", "?", "!"]);
        assert_eq!(texts("...ну"), [".", ".", ".", "ну"]);
        assert_eq!(texts(" , "), [","]);
    }

    #[test]
    fn separates_adjacent_punctuation() {
        assert_eq!(texts("спам;спам"), ["спам", ";", "спам"]);
        assert_eq!(texts("т.е."), ["т", ".", "е", "."]);
        assert_eq!(texts("да,нет?"), ["да", ",", "нет", "?"]);
    }

    #[test]
    fn separates_brackets_and_quotes() {
        assert_eq!(texts("(скобки): да"), ["(", "скобки", ")", ":", "да"]);
        assert_eq!(texts("«спам»"), ["«", "спам", "»"]);
        assert_eq!(texts("\"спам\","), ["\"", "спам", "\"", ","]);
        assert_eq!(texts("„да“"), ["„", "да", "“"]);
        assert_eq!(texts("'цитата'"), ["'", "цитата", "'"]);
        assert!(is_delimiter('['));
        assert!(!is_delimiter('.'));
    }

    #[test]
    fn keeps_numbers_and_contractions() {
        assert_eq!(texts("pi is 3.14, ok"), ["pi", "is", "3.14", ",", "ok"]);
        assert_eq!(texts("1,5 кг."), ["1,5", "кг", "."]);
        assert_eq!(texts("don't"), ["don't"]);
        assert_eq!(texts("3."), ["3", "."]);
    }

    #[test]
    fn whitespace() {
        assert!(texts("").is_empty());
        assert!(texts(" \t\n\u{2800}").is_empty());
        assert_eq!(texts("a\u{3164}b\u{0007}c"), ["a", "b", "c"]);
    }

    #[test]
    fn positions_are_sequential() {
        let tokens = WordTokenizer::default().tokenize("Раз, два, три!").unwrap();
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.position, i);
        }
        assert_eq!(tokens[0], Token::new("Раз", 0));
        assert_eq!(tokens[0].char_len(), 3);
    }

    #[test]
    fn custom_punctuation() {
        let tokenizer = WordTokenizer::new(":".chars().collect());
        let tokens: Vec<_> = tokenizer
            .tokenize("итог: ок.")
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(tokens, ["итог", ":", "ок."]);
    }
}
