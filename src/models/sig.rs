use serde::{Deserialize, Serialize};

use super::enums::UnitOfTime;

/// One structured dosage instruction resolved from a free-text sig.
///
/// Serialized field names are camelCase to match the record contract
/// consumed by downstream clinical systems. A compound sig ("take 1 tablet
/// every day and then 2 tablets every week") yields one record per
/// instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredSig {
    pub drug: Option<String>,
    /// Dosage form, singularized ("tablets" becomes "tablet").
    pub form: Option<String>,
    /// Raw strength text ("500mg"), never unit-normalized.
    pub strength: Option<String>,
    pub single_dosage_amount: Option<f64>,
    pub frequency_type: Option<UnitOfTime>,
    /// Units of `frequency_type` between administrations. 1 unless a numeral,
    /// a Latin code, or "every other" supplies a different value.
    pub interval: u32,
    /// Administrations per `frequency_type` unit ("3 times a day" is 3).
    pub times: Option<u32>,
    pub period_type: Option<UnitOfTime>,
    pub period_amount: Option<u32>,
    pub take_as_needed: bool,
}

impl Default for StructuredSig {
    fn default() -> Self {
        Self {
            drug: None,
            form: None,
            strength: None,
            single_dosage_amount: None,
            frequency_type: None,
            interval: 1,
            times: None,
            period_type: None,
            period_amount: None,
            take_as_needed: false,
        }
    }
}
