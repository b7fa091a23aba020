//! Dictionary-backed spelling correction for sig text.
//!
//! Matches unknown words against a tiered vocabulary by Damerau-Levenshtein
//! distance. Transpositions count as one edit, which covers the most common
//! sig typos ("tiems", "talbet", "dya").

use std::collections::HashMap;

use super::vocabulary::{CORRECTION_EXCLUSIONS, DRUG_TERMS, GENERAL_TERMS, SIG_TERMS};
use super::SpellCorrector;
use crate::labeler::vocabulary::FORM_TERMS;

/// Tier for common English words.
pub const TIER_GENERAL: u8 = 1;
/// Tier for drug and medical term names.
pub const TIER_DRUG: u8 = 2;
/// Tier for sig-domain words and dose forms.
pub const TIER_SIG: u8 = 3;

/// In-memory spelling dictionary with tiered entries.
///
/// Unknown words are matched against every entry within edit distance 1
/// (words shorter than five characters) or 2 (longer words). Among the
/// closest candidates the highest tier wins; a tie on both distance and
/// tier is ambiguous and yields no correction. Words shorter than three
/// characters are never corrected.
pub struct DictionaryCorrector {
    words: HashMap<String, u8>,
}

impl DictionaryCorrector {
    /// Builds the corrector from the bundled seed lists.
    pub fn new() -> Self {
        let seed = GENERAL_TERMS
            .iter()
            .map(|word| (*word, TIER_GENERAL))
            .chain(DRUG_TERMS.iter().map(|word| (*word, TIER_DRUG)))
            .chain(SIG_TERMS.iter().map(|word| (*word, TIER_SIG)))
            .chain(FORM_TERMS.iter().map(|word| (*word, TIER_SIG)));
        Self::with_vocabulary(seed, CORRECTION_EXCLUSIONS)
    }

    /// Builds the corrector from caller-supplied `(word, tier)` entries.
    ///
    /// Duplicate words keep their highest tier. Every word listed in
    /// `exclusions` is removed afterwards, so a merged-in dictionary cannot
    /// reintroduce a word that shadows the sig vocabulary.
    pub fn with_vocabulary<I, S>(entries: I, exclusions: &[&str]) -> Self
    where
        I: IntoIterator<Item = (S, u8)>,
        S: Into<String>,
    {
        let mut words: HashMap<String, u8> = HashMap::new();
        for (word, tier) in entries {
            let word = word.into().to_lowercase();
            let slot = words.entry(word).or_insert(tier);
            if tier > *slot {
                *slot = tier;
            }
        }
        for word in exclusions {
            words.remove(&word.to_lowercase());
        }
        Self { words }
    }
}

impl Default for DictionaryCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl SpellCorrector for DictionaryCorrector {
    fn is_known(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    fn correct(&self, word: &str) -> Option<String> {
        let word = word.to_lowercase();
        if self.words.contains_key(&word) {
            return None;
        }
        let char_count = word.chars().count();
        if char_count < 3 {
            return None;
        }
        let max_distance = if char_count < 5 { 1 } else { 2 };

        let mut best: Option<&str> = None;
        let mut best_distance = max_distance + 1;
        let mut best_tier = 0u8;
        let mut ambiguous = false;
        for (candidate, tier) in &self.words {
            // Candidates further than max_distance in length cannot match.
            if candidate.chars().count().abs_diff(char_count) > max_distance {
                continue;
            }
            let distance = strsim::damerau_levenshtein(&word, candidate);
            if distance == 0 || distance > max_distance {
                continue;
            }
            if distance < best_distance || (distance == best_distance && *tier > best_tier) {
                best = Some(candidate.as_str());
                best_distance = distance;
                best_tier = *tier;
                ambiguous = false;
            } else if distance == best_distance && *tier == best_tier {
                ambiguous = true;
            }
        }

        if ambiguous {
            return None;
        }
        best.map(str::to_string)
    }
}

/// Treats every word as known, disabling autocorrect entirely.
pub struct NoOpSpellCorrector;

impl SpellCorrector for NoOpSpellCorrector {
    fn is_known(&self, _word: &str) -> bool {
        true
    }

    fn correct(&self, _word: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── default vocabulary ──

    #[test]
    fn corrects_common_sig_typos() {
        let corrector = DictionaryCorrector::new();
        let cases = [
            ("tkae", "take"),
            ("atke", "take"),
            ("takr", "take"),
            ("tiems", "times"),
            ("tmies", "times"),
            ("tabet", "tablet"),
            ("talbet", "tablet"),
            ("wekes", "weeks"),
            ("dya", "day"),
            ("needde", "needed"),
        ];
        for (typo, expected) in cases {
            assert_eq!(
                corrector.correct(typo).as_deref(),
                Some(expected),
                "correcting {typo:?}"
            );
        }
    }

    #[test]
    fn known_words_are_not_corrected() {
        let corrector = DictionaryCorrector::new();
        assert!(corrector.is_known("take"));
        assert!(corrector.is_known("amoxicillin"));
        assert!(corrector.is_known("Take"));
        assert_eq!(corrector.correct("take"), None);
        assert_eq!(corrector.correct("times"), None);
    }

    #[test]
    fn short_tokens_are_left_alone() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(corrector.correct("qx"), None);
        assert_eq!(corrector.correct("z"), None);
    }

    #[test]
    fn distant_words_yield_no_candidate() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(corrector.correct("lisinoprilamide"), None);
        assert_eq!(corrector.correct("xqzvw"), None);
    }

    #[test]
    fn never_suggests_excluded_word() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(corrector.correct("talbet").as_deref(), Some("tablet"));
    }

    // ── custom vocabulary ──

    #[test]
    fn tie_on_distance_prefers_higher_tier() {
        let corrector = DictionaryCorrector::with_vocabulary(
            [("bit", TIER_GENERAL), ("bid", TIER_SIG)],
            &[],
        );
        assert_eq!(corrector.correct("bif").as_deref(), Some("bid"));
    }

    #[test]
    fn tie_on_distance_and_tier_is_ambiguous() {
        let corrector = DictionaryCorrector::with_vocabulary(
            [("bat", TIER_GENERAL), ("bit", TIER_GENERAL)],
            &[],
        );
        assert_eq!(corrector.correct("bot"), None);
    }

    #[test]
    fn exclusions_remove_merged_entries() {
        let corrector = DictionaryCorrector::with_vocabulary(
            [("talbot", TIER_SIG), ("tablet", TIER_SIG)],
            &["talbot"],
        );
        assert!(!corrector.is_known("talbot"));
        assert_eq!(corrector.correct("talbet").as_deref(), Some("tablet"));
    }

    #[test]
    fn duplicate_entries_keep_highest_tier() {
        let corrector = DictionaryCorrector::with_vocabulary(
            [("bid", TIER_GENERAL), ("bid", TIER_SIG), ("bit", TIER_GENERAL)],
            &[],
        );
        assert_eq!(corrector.correct("bif").as_deref(), Some("bid"));
    }

    // ── no-op corrector ──

    #[test]
    fn noop_corrector_knows_everything() {
        let corrector = NoOpSpellCorrector;
        assert!(corrector.is_known("tkae"));
        assert_eq!(corrector.correct("tkae"), None);
    }
}
