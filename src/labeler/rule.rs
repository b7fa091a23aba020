//! Vocabulary and pattern driven entity labeler.

use std::sync::LazyLock;

use regex::Regex;

use super::vocabulary::{
    is_drug_token, is_form_token, is_frequency_adverb, is_strength_unit_token,
    is_time_unit_token,
};
use super::{Entity, EntityLabeler};
use crate::models::EntityLabel;
use crate::pipeline::latin::LatinFrequencyTable;
use crate::pipeline::rules::is_numeric_token;

/// Glued strength spellings like "500mg" or "0.5ml".
static STRENGTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+(?:\.\d+)?(?:mcg|mg|ml|meq|g|l|iu|%)$").expect("valid regex")
});

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    end: usize,
    label: EntityLabel,
}

/// Labels sig text from the bundled vocabularies alone.
///
/// Works on whitespace tokens of already normalized text. Frequency phrases
/// are matched greedily ("3 times every week" is one span) and adjacent
/// frequency spans are merged, so a schedule plus "as needed" stays a single
/// entity. Parenthetical groups restate the schedule they follow and are
/// skipped outright.
pub struct RuleLabeler {
    latin: LatinFrequencyTable,
}

impl RuleLabeler {
    pub fn new() -> Self {
        Self {
            latin: LatinFrequencyTable::new(),
        }
    }

    /// End of the frequency phrase starting at `i`, if any.
    fn frequency_end(&self, tokens: &[&str], i: usize) -> Option<usize> {
        let token = tokens[i];
        if self.latin.lookup(token).is_some() {
            return Some(i + 1);
        }
        if token == "as" && tokens.get(i + 1) == Some(&"needed") {
            return Some(i + 2);
        }
        if token == "every" {
            return every_phrase_end(tokens, i);
        }
        if is_frequency_adverb(token) {
            return Some(i + 1);
        }
        if is_numeric_token(token) {
            if let Some(&next) = tokens.get(i + 1) {
                if next == "time" || next == "times" {
                    return Some(times_phrase_end(tokens, i + 2));
                }
            }
        }
        None
    }
}

impl Default for RuleLabeler {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityLabeler for RuleLabeler {
    fn label(&self, text: &str) -> Vec<Entity> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut spans: Vec<Span> = Vec::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = tokens[i];
            if token.starts_with('(') {
                i = end_of_parenthetical(&tokens, i);
                continue;
            }
            if let Some(end) = self.frequency_end(&tokens, i) {
                spans.push(Span {
                    start: i,
                    end,
                    label: EntityLabel::Frequency,
                });
                i = end;
                continue;
            }
            if token == "for" {
                if let Some(end) = duration_end(&tokens, i) {
                    spans.push(Span {
                        start: i,
                        end,
                        label: EntityLabel::Duration,
                    });
                    i = end;
                    continue;
                }
            }
            if is_drug_token(token) {
                spans.push(Span {
                    start: i,
                    end: i + 1,
                    label: EntityLabel::Drug,
                });
            } else if is_form_token(token) {
                spans.push(Span {
                    start: i,
                    end: i + 1,
                    label: EntityLabel::Form,
                });
            } else if STRENGTH_TOKEN.is_match(token) {
                spans.push(Span {
                    start: i,
                    end: i + 1,
                    label: EntityLabel::Strength,
                });
            } else if is_numeric_token(token) {
                if let Some(&next) = tokens.get(i + 1) {
                    if is_strength_unit_token(next) {
                        spans.push(Span {
                            start: i,
                            end: i + 2,
                            label: EntityLabel::Strength,
                        });
                        i += 2;
                        continue;
                    }
                    if is_form_token(next) || next == "of" {
                        spans.push(Span {
                            start: i,
                            end: i + 1,
                            label: EntityLabel::Dosage,
                        });
                    }
                }
            }
            i += 1;
        }
        merge_adjacent_frequencies(&mut spans);
        spans
            .into_iter()
            .map(|span| Entity::new(tokens[span.start..span.end].join(" "), span.label))
            .collect()
    }
}

/// End of "every [N | other] <unit>", e.g. "every 12 hours".
fn every_phrase_end(tokens: &[&str], i: usize) -> Option<usize> {
    let mut j = i + 1;
    if let Some(&next) = tokens.get(j) {
        if next == "other" || is_numeric_token(next) {
            j += 1;
        }
    }
    match tokens.get(j) {
        Some(&unit) if is_time_unit_token(unit) => Some(j + 1),
        _ => None,
    }
}

/// Extends "N times" over the schedule that follows it: "a day",
/// "every 12 hours", "daily". `i` points just past "times".
fn times_phrase_end(tokens: &[&str], i: usize) -> usize {
    match tokens.get(i) {
        Some(&"every") => every_phrase_end(tokens, i).unwrap_or(i),
        Some(&follow) if is_frequency_adverb(follow) => i + 1,
        Some(&follow) if matches!(follow, "a" | "an" | "per" | "each") => {
            match tokens.get(i + 1) {
                Some(&unit) if is_time_unit_token(unit) => i + 2,
                _ => i,
            }
        }
        _ => i,
    }
}

/// End of "for <N> <unit>", e.g. "for 10 days". "for pain" is not a
/// duration.
fn duration_end(tokens: &[&str], i: usize) -> Option<usize> {
    match (tokens.get(i + 1), tokens.get(i + 2)) {
        (Some(&amount), Some(&unit))
            if is_numeric_token(amount) && is_time_unit_token(unit) =>
        {
            Some(i + 3)
        }
        _ => None,
    }
}

fn end_of_parenthetical(tokens: &[&str], i: usize) -> usize {
    for (j, token) in tokens.iter().enumerate().skip(i) {
        if token.ends_with(')') {
            return j + 1;
        }
    }
    // Unbalanced "(" is noise; drop the one token.
    i + 1
}

fn merge_adjacent_frequencies(spans: &mut Vec<Span>) {
    let mut i = 0;
    while i + 1 < spans.len() {
        let merge = spans[i].label == EntityLabel::Frequency
            && spans[i + 1].label == EntityLabel::Frequency
            && spans[i].end == spans[i + 1].start;
        if merge {
            spans[i].end = spans[i + 1].end;
            spans.remove(i + 1);
        } else {
            i += 1;
        }
    }
}
