//! Lexical normalization of raw sig text.
//!
//! Rewrites run in a fixed order: case folding, token autocorrect, phrase
//! expansion ("twice" to "2 times", "prn" to "as needed"), parenthesis
//! spacing, whitespace collapse, "tab" shorthand, number words, fractions.
//! The output is stable: normalizing twice gives the same string.

use crate::speller::SpellCorrector;

const NUMBER_WORDS: &[(&str, &str)] = &[
    ("one", "1"),
    ("two", "2"),
    ("three", "3"),
    ("four", "4"),
    ("five", "5"),
    ("six", "6"),
    ("seven", "7"),
    ("eight", "8"),
    ("nine", "9"),
    ("ten", "10"),
];

/// Normalizes `text` for labeling.
pub fn normalize(text: &str, corrector: &dyn SpellCorrector) -> String {
    let text = text.trim().to_lowercase();
    let text = autocorrect_tokens(&text, corrector);
    let text = expand_frequency_words(&text);
    let text = space_parentheses(&text);
    let text = collapse_whitespace(&text);
    let text = expand_dose_shorthand(&text);
    let text = digits_from_number_words(&text);
    decimals_from_fractions(&text)
}

/// Rewrites unknown all-letter tokens to their dictionary correction.
/// Tokens with digits or punctuation ("q.4.d", "500mg") are never touched.
fn autocorrect_tokens(text: &str, corrector: &dyn SpellCorrector) -> String {
    text.split_whitespace()
        .map(|token| {
            if token.chars().all(|c| c.is_ascii_alphabetic()) && !corrector.is_known(token) {
                corrector
                    .correct(token)
                    .unwrap_or_else(|| token.to_string())
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn expand_frequency_words(text: &str) -> String {
    let text = replace_word(text, "twice", "2 times");
    let text = replace_word(&text, "once", "1 time");
    let text = replace_word(&text, "nightly", "every night");
    replace_word(&text, "prn", "as needed")
}

/// Whole-word replacement: a match counts only when not flanked by
/// alphanumeric characters.
fn replace_word(text: &str, from: &str, to: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    while let Some(offset) = text[cursor..].find(from) {
        let start = cursor + offset;
        let end = start + from.len();
        let left_bounded = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let right_bounded = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if left_bounded && right_bounded {
            result.push_str(&text[cursor..start]);
            result.push_str(to);
        } else {
            result.push_str(&text[cursor..end]);
        }
        cursor = end;
    }
    result.push_str(&text[cursor..]);
    result
}

/// Separates parenthesized groups from surrounding words. The group itself
/// stays glued to its first and last inner token, so "daily(every 12 hours)"
/// becomes "daily (every 12 hours)".
fn space_parentheses(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c == '(' && i > 0 && !chars[i - 1].is_whitespace() {
            result.push(' ');
        }
        result.push(c);
        if c == ')' && chars.get(i + 1).map_or(false, |next| !next.is_whitespace()) {
            result.push(' ');
        }
    }
    result
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// "tab" and "tabs" both become singular "tablet"; the sig builder
/// singularizes real plurals later, so nothing downstream cares about the
/// lost "s".
fn expand_dose_shorthand(text: &str) -> String {
    text.split_whitespace()
        .map(|token| match token {
            "tab" | "tabs" => "tablet",
            other => other,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn digits_from_number_words(text: &str) -> String {
    text.split_whitespace()
        .map(|token| {
            NUMBER_WORDS
                .iter()
                .find(|(word, _)| *word == token)
                .map_or(token, |(_, digit)| *digit)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decimals_from_fractions(text: &str) -> String {
    text.split_whitespace()
        .map(|token| decimal_from_fraction(token).unwrap_or_else(|| token.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// "1/2" to "0.5", "4/2" to "2". Division by zero leaves the token alone.
fn decimal_from_fraction(token: &str) -> Option<String> {
    let (numerator, denominator) = token.split_once('/')?;
    if numerator.is_empty()
        || denominator.is_empty()
        || !numerator.chars().all(|c| c.is_ascii_digit())
        || !denominator.chars().all(|c| c.is_ascii_digit())
    {
        return None;
    }
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some((numerator / denominator).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speller::{DictionaryCorrector, NoOpSpellCorrector};

    fn plain(text: &str) -> String {
        normalize(text, &NoOpSpellCorrector)
    }

    // ── case and whitespace ──

    #[test]
    fn folds_case_and_trims() {
        assert_eq!(plain("  Take 1 Tablet  "), "take 1 tablet");
        assert_eq!(plain("TAKE 1 TABLET BY MOUTH"), "take 1 tablet by mouth");
    }

    #[test]
    fn collapses_inner_whitespace() {
        assert_eq!(plain("take \t 1   tablet"), "take 1 tablet");
    }

    // ── autocorrect ──

    #[test]
    fn corrects_misspelled_tokens() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(
            normalize("Tkae 1 tabet 3 tiems a dya", &corrector),
            "take 1 tablet 3 times a day"
        );
        assert_eq!(
            normalize("Atke 2 talbet every 4 wekes", &corrector),
            "take 2 tablet every 4 weeks"
        );
    }

    #[test]
    fn leaves_unknown_words_without_candidates() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(
            normalize("take 1 tablet of xyzzyq", &corrector),
            "take 1 tablet of xyzzyq"
        );
    }

    #[test]
    fn never_touches_tokens_with_digits_or_punctuation() {
        let corrector = DictionaryCorrector::new();
        assert_eq!(
            normalize("take 1 tablet of amoxicillin 500mg q.4.d", &corrector),
            "take 1 tablet of amoxicillin 500mg q.4.d"
        );
    }

    // ── phrase expansion ──

    #[test]
    fn expands_frequency_words() {
        assert_eq!(plain("take 1 tablet twice daily"), "take 1 tablet 2 times daily");
        assert_eq!(plain("once daily"), "1 time daily");
        assert_eq!(plain("take 1 tablet nightly"), "take 1 tablet every night");
        assert_eq!(plain("take 1 tablet prn"), "take 1 tablet as needed");
    }

    #[test]
    fn phrase_expansion_respects_word_boundaries() {
        assert_eq!(plain("dilute the concentrate"), "dilute the concentrate");
        assert_eq!(plain("(twice)"), "(2 times)");
    }

    // ── parentheses ──

    #[test]
    fn separates_parenthesized_groups() {
        assert_eq!(
            plain("2 times daily(every 12 hours)"),
            "2 times daily (every 12 hours)"
        );
        assert_eq!(
            plain("2 times daily (every 12 hours)"),
            "2 times daily (every 12 hours)"
        );
    }

    // ── token rewrites ──

    #[test]
    fn tab_shorthand_becomes_tablet() {
        assert_eq!(
            plain("take 2 tabs of amoxicillin"),
            "take 2 tablet of amoxicillin"
        );
        assert_eq!(plain("1 tab of benadryl"), "1 tablet of benadryl");
        assert_eq!(plain("tabulated"), "tabulated");
    }

    #[test]
    fn number_words_become_digits() {
        let expected = [
            ("one", "1"),
            ("two", "2"),
            ("three", "3"),
            ("four", "4"),
            ("five", "5"),
            ("six", "6"),
            ("seven", "7"),
            ("eight", "8"),
            ("nine", "9"),
            ("ten", "10"),
        ];
        for (word, digit) in expected {
            assert_eq!(
                plain(&format!("take {word} tablets")),
                format!("take {digit} tablets"),
                "rewriting {word:?}"
            );
        }
    }

    #[test]
    fn fractions_become_decimals() {
        assert_eq!(plain("take 1/2 tablet"), "take 0.5 tablet");
        assert_eq!(plain("take 3/4 tablet"), "take 0.75 tablet");
        assert_eq!(plain("take 4/2 tablets"), "take 2 tablets");
        assert_eq!(plain("take 1/0 tablet"), "take 1/0 tablet");
        assert_eq!(plain("mix 1/2mg now"), "mix 1/2mg now");
    }

    // ── stability ──

    #[test]
    fn normalization_is_idempotent() {
        let corrector = DictionaryCorrector::new();
        let sigs = [
            "Take 2 tabs of Amoxicillin 500mg q12h for 10 days",
            "Tkae 1 tabet twice daily(every 12 hours)",
            "take 1/2 tablet once daily prn",
            "take seven tablets nightly",
        ];
        for sig in sigs {
            let first = normalize(sig, &corrector);
            assert_eq!(normalize(&first, &corrector), first, "renormalizing {sig:?}");
        }
    }
}
