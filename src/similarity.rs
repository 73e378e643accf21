use crate::Map;

/// How closely two normalized words must agree to count as a fuzzy match.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Similarity {
    /// Shared characters regardless of order. See [`quick_ratio`].
    #[default]
    QuickRatio,
    /// One minus the Levenshtein distance over the longer length.
    NormalizedLevenshtein,
    JaroWinkler,
    /// Overlap of character bigrams.
    SorensenDice,
}

impl Similarity {
    /// Returns a ratio in `[0, 1]`, where `1` means the words are indistinguishable.
    pub fn ratio(self, a: &str, b: &str) -> f64 {
        match self {
            Self::QuickRatio => quick_ratio(a, b),
            Self::NormalizedLevenshtein => strsim::normalized_levenshtein(a, b),
            Self::JaroWinkler => strsim::jaro_winkler(a, b),
            Self::SorensenDice => strsim::sorensen_dice(a, b),
        }
    }
}

/// Twice the size of the multiset intersection of the characters of `a` and `b`, divided by
/// their combined length (in characters). Two empty strings are identical (`1.0`).
///
/// This is an upper bound on the longest-matching-blocks ratio, and is symmetric.
pub fn quick_ratio(a: &str, b: &str) -> f64 {
    let mut available: Map<char, usize> = Map::default();
    let mut len_b = 0usize;
    for c in b.chars() {
        *available.entry(c).or_default() += 1;
        len_b += 1;
    }

    let mut len_a = 0usize;
    let mut matches = 0usize;
    for c in a.chars() {
        len_a += 1;
        if let Some(count) = available.get_mut(&c) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }

    let total = len_a + len_b;
    if total == 0 {
        1.0
    } else {
        2.0 * matches as f64 / total as f64
    }
}
