//! Parses free-text medication dosage instructions ("sigs") into structured
//! dosage records.
//!
//! A sig such as `"Take 2 tabs of amoxicillin 500mg q12h for 10 days"` is
//! normalized, labeled, segmented into instructions and folded into one
//! [`StructuredSig`] per instruction. Labeling and spelling correction are
//! capabilities behind the [`EntityLabeler`] and [`SpellCorrector`] traits;
//! bundled rule-based implementations cover common prescription wording.
//!
//! ```
//! use rxsig::SigParser;
//!
//! let parser = SigParser::new();
//! let records = parser.parse("Take 1 tablet of ibuprofen 3 times a day");
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].drug.as_deref(), Some("ibuprofen"));
//! assert_eq!(records[0].times, Some(3));
//! ```

pub mod labeler;
pub mod models;
pub mod pipeline;
pub mod speller;

pub use labeler::{Entity, EntityLabeler, RuleLabeler};
pub use models::{EntityLabel, ModelError, StructuredSig, UnitOfTime};
pub use pipeline::{LatinFrequency, LatinFrequencyTable, SigParser};
pub use speller::{DictionaryCorrector, NoOpSpellCorrector, SpellCorrector};
