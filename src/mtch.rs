use crate::{Set, Similarity, Threshold};
use itertools::Itertools;
use std::fmt::{self, Display, Formatter};

/// How a word was found to violate the policy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MatchKind {
    /// The normalized word equals a normalized forbidden word.
    Exact,
    /// The best similarity ratio against any forbidden word, which exceeded the threshold.
    Fuzzy { ratio: f64 },
}

/// One violating word.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Position of the word in the token sequence.
    pub position: usize,
    /// Normalized form of the word.
    pub normalized: String,
    /// Normalized form of the forbidden word it matched (the closest one, if fuzzy).
    pub forbidden: String,
    pub kind: MatchKind,
}

impl Display for Detection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind {
            MatchKind::Exact => write!(
                f,
                "#{} {:?} is {:?}",
                self.position, self.normalized, self.forbidden
            ),
            MatchKind::Fuzzy { ratio } => write!(
                f,
                "#{} {:?} resembles {:?} ({:.3})",
                self.position, self.normalized, self.forbidden, ratio
            ),
        }
    }
}

/// Decides which normalized words violate the policy.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Matcher {
    threshold: Threshold,
    similarity: Similarity,
}

impl Matcher {
    pub fn new(threshold: Threshold, similarity: Similarity) -> Self {
        Self {
            threshold,
            similarity,
        }
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn similarity(&self) -> Similarity {
        self.similarity
    }

    /// Returns one detection per violating position, in ascending order of position.
    ///
    /// An exact match short-circuits the fuzzy comparison for that position. Otherwise every
    /// forbidden word is compared, and the closest one above the threshold is reported.
    pub fn detect<W, F>(&self, words: &[W], forbidden: &[F]) -> Vec<Detection>
    where
        W: AsRef<str>,
        F: AsRef<str>,
    {
        let exact: Set<&str> = forbidden.iter().map(AsRef::as_ref).collect();
        // Duplicates would only repeat comparisons.
        let unique: Vec<&str> = forbidden.iter().map(AsRef::as_ref).unique().collect();

        let mut detections = Vec::new();

        for (position, word) in words.iter().map(AsRef::as_ref).enumerate() {
            if exact.contains(word) {
                detections.push(Detection {
                    position,
                    normalized: word.to_owned(),
                    forbidden: word.to_owned(),
                    kind: MatchKind::Exact,
                });
                continue;
            }

            let mut best: Option<(&str, f64)> = None;
            for &candidate in &unique {
                let ratio = self.similarity.ratio(candidate, word);
                if self.threshold.is_exceeded_by(ratio)
                    && best.map_or(true, |(_, best_ratio)| ratio > best_ratio)
                {
                    best = Some((candidate, ratio));
                }
            }

            if let Some((candidate, ratio)) = best {
                detections.push(Detection {
                    position,
                    normalized: word.to_owned(),
                    forbidden: candidate.to_owned(),
                    kind: MatchKind::Fuzzy { ratio },
                });
            }
        }

        detections
    }

    /// The set of violating positions.
    pub fn positions<W, F>(&self, words: &[W], forbidden: &[F]) -> Set<usize>
    where
        W: AsRef<str>,
        F: AsRef<str>,
    {
        self.detect(words, forbidden)
            .into_iter()
            .map(|d| d.position)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};

    fn matcher(threshold: f64) -> Matcher {
        Matcher::new(Threshold::new(threshold).unwrap(), Similarity::QuickRatio)
    }

    fn sorted(set: Set<usize>) -> Vec<usize> {
        let mut ret: Vec<_> = set.into_iter().collect();
        ret.sort_unstable();
        ret
    }

    #[test]
    fn empty_inputs() {
        let none: [&str; 0] = [];
        assert!(Matcher::default().positions(&["спам"], &none).is_empty());
        assert!(Matcher::default().positions(&none, &["спам"]).is_empty());
    }

    #[test]
    fn exact() {
        let detections = Matcher::default().detect(&["это", "спам", "."], &["спам"]);
        assert_eq!(
            detections,
            vec![Detection {
                position: 1,
                normalized: String::from("спам"),
                forbidden: String::from("спам"),
                kind: MatchKind::Exact,
            }]
        );
    }

    #[test]
    fn fuzzy() {
        // 2 * 4 / 9 > 0.8
        let detections = Matcher::default().detect(&["спамм"], &["спам"]);
        assert_eq!(detections.len(), 1);
        assert!(matches!(detections[0].kind, MatchKind::Fuzzy { ratio } if ratio > 0.88));

        // 2 * 3 / 7 > 0.8
        assert_eq!(sorted(matcher(0.8).positions(&["abcd"], &["abc"])), [0]);
        // 2 * 2 / 5 = 0.8, and the threshold is exclusive.
        assert!(matcher(0.8).positions(&["abc"], &["ab"]).is_empty());
        assert_eq!(sorted(matcher(0.79).positions(&["abc"], &["ab"])), [0]);
    }

    #[test]
    fn fuzzy_reports_closest() {
        let detections = matcher(0.5).detect(&["abcd"], &["ab", "abc", "abcde"]);
        assert_eq!(detections.len(), 1);
        // "abc" scores 6/7, "abcde" scores 8/9.
        assert_eq!(detections[0].forbidden, "abcde");
    }

    #[test]
    fn threshold_one_requires_exact() {
        // Anagrams have quick ratio 1.0, which does not exceed 1.0.
        assert!(matcher(1.0).positions(&["мапс"], &["спам"]).is_empty());
        assert_eq!(sorted(matcher(1.0).positions(&["спам"], &["спам"])), [0]);
    }

    #[test]
    fn duplicates_are_harmless() {
        let positions = Matcher::default().positions(&["спам", "спамм", "мир"], &["спам", "спам"]);
        assert_eq!(sorted(positions), [0, 1]);
    }

    #[test]
    fn threshold_monotonicity() {
        let mut rng = thread_rng();
        let alphabet: Vec<char> = "абвгдспм".chars().collect();
        let random_word = |rng: &mut rand::rngs::ThreadRng| -> String {
            let len = rng.gen_range(1..7);
            (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect()
        };

        for _ in 0..50 {
            let words: Vec<String> = (0..10).map(|_| random_word(&mut rng)).collect();
            let forbidden: Vec<String> = (0..3).map(|_| random_word(&mut rng)).collect();

            let mut previous: Option<Set<usize>> = None;
            for step in 1..=10 {
                let positions = matcher(step as f64 / 10.0).positions(&words, &forbidden);
                if let Some(previous) = &previous {
                    assert!(positions.is_subset(previous), "{words:?} {forbidden:?}");
                }
                previous = Some(positions);
            }
        }
    }
}
