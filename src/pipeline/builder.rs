//! Assembly of a structured record from one group of labeled entities.

use tracing::warn;

use crate::labeler::vocabulary::is_form_token;
use crate::labeler::Entity;
use crate::models::{EntityLabel, StructuredSig};
use crate::pipeline::latin::LatinFrequencyTable;
use crate::pipeline::rules::{
    amount_from_text, frequency_type_from_text, parse_quantity, singularize,
};

/// Folds one entity group into a record.
///
/// Entities are applied in reading order and each label updates its own
/// fields, so a later entity of the same label wins. Malformed entities are
/// skipped with a warning rather than failing the parse.
pub fn build_sig(entities: Vec<Entity>, latin: &LatinFrequencyTable) -> StructuredSig {
    let mut sig = StructuredSig::default();
    for entity in entities {
        if entity.text.is_empty() {
            warn!(label = entity.label.as_str(), "skipping entity with empty text");
            continue;
        }
        match entity.label {
            EntityLabel::Dosage => apply_dosage(&mut sig, &entity.text, latin),
            EntityLabel::Drug => apply_drug(&mut sig, entity.text),
            EntityLabel::Form => apply_form(&mut sig, &entity.text),
            EntityLabel::Strength => apply_strength(&mut sig, entity.text),
            EntityLabel::Frequency => apply_frequency(&mut sig, &entity.text, latin),
            EntityLabel::Duration => apply_duration(&mut sig, &entity.text, latin),
        }
    }
    sig
}

/// Numeric head sets the dose. A two-token span like "2 tablets" also
/// carries a form hint, and any schedule word in the span ("2 tablets
/// daily") carries a frequency-type hint.
fn apply_dosage(sig: &mut StructuredSig, text: &str, latin: &LatinFrequencyTable) {
    let mut tokens = text.split_whitespace();
    let amount = tokens.next().and_then(parse_quantity);
    let Some(amount) = amount else {
        warn!(text, "dosage span does not start with a quantity, skipping");
        return;
    };
    sig.single_dosage_amount = Some(amount);
    if let Some(frequency_type) = frequency_type_from_text(text, latin) {
        sig.frequency_type = Some(frequency_type);
    }
    let rest: Vec<&str> = tokens.collect();
    if let [hint] = rest.as_slice() {
        let form = singularize(hint);
        if is_form_token(&form) {
            sig.form = Some(form);
        }
    }
}

fn apply_drug(sig: &mut StructuredSig, text: String) {
    sig.drug = Some(text);
}

fn apply_form(sig: &mut StructuredSig, text: &str) {
    sig.form = Some(singularize(text));
}

fn apply_strength(sig: &mut StructuredSig, text: String) {
    sig.strength = Some(text);
}

/// The frequency span drives type, interval and times:
/// - a schedule word anywhere in the span sets the type;
/// - a number after "every" sets the interval ("other" counts as 2);
/// - a leading Latin code overrides type, interval and times wholesale;
/// - otherwise a number before "times" sets the times count;
/// - "as needed" anywhere marks the record as needed.
fn apply_frequency(sig: &mut StructuredSig, text: &str, latin: &LatinFrequencyTable) {
    if let Some(frequency_type) = frequency_type_from_text(text, latin) {
        sig.frequency_type = Some(frequency_type);
    }
    if let Some((_, tail)) = text.split_once("every") {
        if let Some(amount) = amount_from_text(tail) {
            sig.interval = amount;
        }
    }
    let first = text.split_whitespace().next().unwrap_or_default();
    if let Some(hit) = latin.lookup(first) {
        sig.frequency_type = Some(hit.frequency_type);
        sig.interval = hit.interval;
        sig.times = Some(hit.times);
    } else if let Some((head, _)) = text.split_once("times") {
        if let Some(amount) = amount_from_text(head) {
            sig.times = Some(amount);
        }
    }
    if text.contains("as needed") {
        sig.take_as_needed = true;
    }
}

fn apply_duration(sig: &mut StructuredSig, text: &str, latin: &LatinFrequencyTable) {
    let period_type = frequency_type_from_text(text, latin);
    let period_amount = amount_from_text(text);
    if period_type.is_none() && period_amount.is_none() {
        warn!(text, "duration span names no period, skipping");
        return;
    }
    if period_type.is_some() {
        sig.period_type = period_type;
    }
    if period_amount.is_some() {
        sig.period_amount = period_amount;
    }
}
