//! Parser façade tying the pipeline stages together.

use tracing::debug;

use crate::labeler::{EntityLabeler, RuleLabeler};
use crate::models::StructuredSig;
use crate::pipeline::builder::build_sig;
use crate::pipeline::latin::LatinFrequencyTable;
use crate::pipeline::normalize::normalize;
use crate::pipeline::rules::single_dose_from_text;
use crate::pipeline::segment::segment_entities;
use crate::speller::{DictionaryCorrector, SpellCorrector};

/// Parses free-text sigs into structured dosage records.
///
/// Parsing itself never fails: unrecognized text simply leaves fields
/// absent. Capabilities that load external resources must fail in their
/// own constructors, before they are handed to [`SigParser::with_capabilities`].
pub struct SigParser {
    labeler: Box<dyn EntityLabeler>,
    corrector: Box<dyn SpellCorrector>,
    latin: LatinFrequencyTable,
}

impl SigParser {
    /// Parser with the bundled rule labeler and dictionary corrector.
    pub fn new() -> Self {
        Self::with_capabilities(
            Box::new(RuleLabeler::new()),
            Box::new(DictionaryCorrector::new()),
        )
    }

    pub fn with_capabilities(
        labeler: Box<dyn EntityLabeler>,
        corrector: Box<dyn SpellCorrector>,
    ) -> Self {
        Self {
            labeler,
            corrector,
            latin: LatinFrequencyTable::new(),
        }
    }

    /// Parses one sig. A sig chaining several instructions yields one
    /// record per instruction, in reading order.
    pub fn parse(&self, sig: &str) -> Vec<StructuredSig> {
        let normalized = normalize(sig, self.corrector.as_ref());
        debug!(raw = sig, normalized = normalized.as_str(), "normalized sig");
        let entities = self.labeler.label(&normalized);
        debug!(entities = entities.len(), "labeled sig");
        let groups = segment_entities(entities);
        let mut sigs: Vec<StructuredSig> = groups
            .into_iter()
            .map(|group| build_sig(group, &self.latin))
            .collect();
        seed_first_dose(&mut sigs, &normalized);
        propagate_shared_fields(&mut sigs);
        sigs
    }

    /// Parses each sig in turn, concatenating the records in input order.
    pub fn parse_many<'a, I>(&self, sigs: I) -> Vec<StructuredSig>
    where
        I: IntoIterator<Item = &'a str>,
    {
        sigs.into_iter().flat_map(|sig| self.parse(sig)).collect()
    }
}

impl Default for SigParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the dose off the instruction opening ("take 2 ...") when no
/// Dosage span was labeled. Applies to the first record only.
fn seed_first_dose(sigs: &mut [StructuredSig], normalized: &str) {
    if let Some(first) = sigs.first_mut() {
        if first.single_dosage_amount.is_none() {
            if let Some(amount) = single_dose_from_text(normalized) {
                first.single_dosage_amount = Some(amount);
            }
        }
    }
}

/// Later instructions usually elide the drug and form ("... and then
/// 2 tablets every week"); both carry over from the first record.
fn propagate_shared_fields(sigs: &mut [StructuredSig]) {
    let (drug, form) = match sigs.first() {
        Some(first) => (first.drug.clone(), first.form.clone()),
        None => return,
    };
    for sig in sigs.iter_mut().skip(1) {
        if sig.drug.is_none() {
            sig.drug = drug.clone();
        }
        if sig.form.is_none() {
            sig.form = form.clone();
        }
    }
}
