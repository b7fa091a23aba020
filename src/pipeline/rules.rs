//! Small text rules shared by the labeler and the sig builder.

use crate::models::UnitOfTime;
use crate::pipeline::latin::LatinFrequencyTable;

/// Verbs that open a dosing instruction. Sorted for binary search.
pub const DOSE_VERBS: &[&str] = &[
    "apply", "chew", "dissolve", "inhale", "inject", "insert", "instill",
    "place", "rinse", "spray", "swallow", "swish", "take", "use",
];

/// Plurals the suffix rules below would mangle.
const SINGULAR_OVERRIDES: &[(&str, &str)] = &[("boluses", "bolus")];

/// Whether `token` is a plain quantity like "2" or "0.5".
///
/// Stricter than `f64` parsing: exponent forms and words like "inf" are
/// not quantities in sig text.
pub fn is_numeric_token(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_digit() || c == '.')
        && token.chars().any(|c| c.is_ascii_digit())
        && token.parse::<f64>().is_ok()
}

pub fn parse_quantity(token: &str) -> Option<f64> {
    if is_numeric_token(token) {
        token.parse().ok()
    } else {
        None
    }
}

/// First whole-number word in `text`, with "other" counting as 2
/// ("every other day" = every 2 days).
pub fn amount_from_text(text: &str) -> Option<u32> {
    for token in text.split_whitespace() {
        if token.chars().all(|c| c.is_ascii_digit()) {
            if let Ok(amount) = token.parse::<u32>() {
                return Some(amount);
            }
        }
    }
    if text.contains("other") {
        return Some(2);
    }
    None
}

/// Unit of time named by a frequency or duration phrase.
///
/// Clock and calendar words win over Latin codes; "night", "morning",
/// "noon" and friends all mean a daily schedule.
pub fn frequency_type_from_text(
    text: &str,
    latin: &LatinFrequencyTable,
) -> Option<UnitOfTime> {
    if text.contains("hour") {
        return Some(UnitOfTime::Hour);
    }
    if text.contains("week") {
        return Some(UnitOfTime::Week);
    }
    if text.contains("month") {
        return Some(UnitOfTime::Month);
    }
    if text.contains("year") {
        return Some(UnitOfTime::Year);
    }
    const DAY_WORDS: &[&str] = &[
        "day", "daily", "night", "morning", "evening", "noon", "bedtime",
    ];
    if DAY_WORDS.iter().any(|word| text.contains(word)) {
        return Some(UnitOfTime::Day);
    }
    let first = text.split_whitespace().next()?;
    latin.lookup(first).map(|hit| hit.frequency_type)
}

/// Reduces a dose form to its singular ("tablets" to "tablet").
pub fn singularize(word: &str) -> String {
    if let Some((_, singular)) = SINGULAR_OVERRIDES
        .iter()
        .find(|(plural, _)| *plural == word)
    {
        return (*singular).to_string();
    }
    if !word.ends_with('s')
        || word.ends_with("ss")
        || word.ends_with("us")
        || word.ends_with("is")
    {
        return word.to_string();
    }
    if word.len() > 4 && word.ends_with("ies") {
        return format!("{}y", &word[..word.len() - 3]);
    }
    for suffix in ["ches", "shes", "sses", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.len() >= 4 {
        return word[..word.len() - 1].to_string();
    }
    word.to_string()
}

/// Dose read off the opening of a normalized sig: a dose verb followed by a
/// quantity, e.g. "take 2 ...". Fallback for sigs where the quantity was
/// not labeled as its own entity.
pub fn single_dose_from_text(text: &str) -> Option<f64> {
    let mut words = text.split_whitespace();
    let verb = words.next()?;
    if DOSE_VERBS.binary_search(&verb).is_err() {
        return None;
    }
    parse_quantity(words.next()?)
}
