//! Token vocabularies backing the rule labeler.

use crate::speller::vocabulary::DRUG_TERMS;

/// Dose form names, singular and plural. Sorted for binary search; lowercase.
pub const FORM_TERMS: &[&str] = &[
    "ampoule", "ampoules", "application", "applications", "bolus",
    "boluses", "caplet", "caplets", "capsule", "capsules", "drop",
    "drops", "inhalation", "inhalations", "injection", "injections",
    "lozenge", "lozenges", "patch", "patches", "pill", "pills", "puff",
    "puffs", "sachet", "sachets", "scoop", "scoops", "spray", "sprays",
    "suppositories", "suppository", "tablespoon", "tablespoons",
    "tablet", "tablets", "teaspoon", "teaspoons", "unit", "units",
    "vial", "vials",
];

/// Calendar and clock words that close a frequency or duration phrase.
/// Sorted for binary search; lowercase.
pub const TIME_UNIT_TERMS: &[&str] = &[
    "bedtime", "daily", "day", "days", "evening", "evenings", "hour",
    "hourly", "hours", "month", "monthly", "months", "morning",
    "mornings", "night", "nightly", "nights", "noon", "week", "weekly",
    "weeks", "year", "yearly", "years",
];

/// Bare dose strength units, for spaced spellings like "500 mg".
/// Sorted for binary search; lowercase.
pub const STRENGTH_UNIT_TERMS: &[&str] = &["g", "iu", "l", "mcg", "meq", "mg", "ml"];

/// Standalone frequency adverbs that form a phrase on their own.
pub const FREQUENCY_ADVERBS: &[&str] = &["daily", "hourly", "monthly", "weekly", "yearly"];

pub fn is_drug_token(token: &str) -> bool {
    DRUG_TERMS.binary_search(&token).is_ok()
}

pub fn is_form_token(token: &str) -> bool {
    FORM_TERMS.binary_search(&token).is_ok()
}

pub fn is_time_unit_token(token: &str) -> bool {
    TIME_UNIT_TERMS.binary_search(&token).is_ok()
}

pub fn is_strength_unit_token(token: &str) -> bool {
    STRENGTH_UNIT_TERMS.binary_search(&token).is_ok()
}

pub fn is_frequency_adverb(token: &str) -> bool {
    FREQUENCY_ADVERBS.binary_search(&token).is_ok()
}
