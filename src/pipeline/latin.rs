//! Latin frequency abbreviations (qd, bid, q12h, ...).

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::UnitOfTime;

/// Interval shorthand, e.g. "q12h" = every 12 hours.
static INTERVAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^q(\d{1,3})([hdwm])$").expect("valid regex"));

/// Resolved meaning of a Latin frequency code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatinFrequency {
    pub frequency_type: UnitOfTime,
    pub interval: u32,
    pub times: u32,
}

impl LatinFrequency {
    const fn new(frequency_type: UnitOfTime, interval: u32, times: u32) -> Self {
        Self {
            frequency_type,
            interval,
            times,
        }
    }
}

/// Lookup table for Latin dosing codes.
///
/// Codes are matched case-insensitively and with periods stripped, so
/// "Q.O.D" and "qod" resolve the same way. Unrecognized fixed codes fall
/// through to the `q<N><unit>` interval pattern.
pub struct LatinFrequencyTable {
    codes: HashMap<&'static str, LatinFrequency>,
}

impl LatinFrequencyTable {
    pub fn new() -> Self {
        use crate::models::UnitOfTime::{Day, Month, Week};
        let codes = HashMap::from([
            ("qd", LatinFrequency::new(Day, 1, 1)),
            ("qod", LatinFrequency::new(Day, 2, 1)),
            ("qhs", LatinFrequency::new(Day, 1, 1)),
            ("qam", LatinFrequency::new(Day, 1, 1)),
            ("qpm", LatinFrequency::new(Day, 1, 1)),
            ("bid", LatinFrequency::new(Day, 1, 2)),
            ("tid", LatinFrequency::new(Day, 1, 3)),
            ("qid", LatinFrequency::new(Day, 1, 4)),
            ("qw", LatinFrequency::new(Week, 1, 1)),
            ("biw", LatinFrequency::new(Week, 1, 2)),
            ("tiw", LatinFrequency::new(Week, 1, 3)),
            ("qiw", LatinFrequency::new(Week, 1, 4)),
            ("qm", LatinFrequency::new(Month, 1, 1)),
        ]);
        Self { codes }
    }

    /// Resolves `token` as a Latin code, or `None` if it is not one.
    pub fn lookup(&self, token: &str) -> Option<LatinFrequency> {
        let code = token.to_lowercase().replace('.', "");
        if code.is_empty() {
            return None;
        }
        if let Some(hit) = self.codes.get(code.as_str()) {
            return Some(*hit);
        }
        let captures = INTERVAL_CODE.captures(&code)?;
        let interval: u32 = captures[1].parse().ok()?;
        let frequency_type = match &captures[2] {
            "h" => UnitOfTime::Hour,
            "d" => UnitOfTime::Day,
            "w" => UnitOfTime::Week,
            "m" => UnitOfTime::Month,
            _ => return None,
        };
        Some(LatinFrequency {
            frequency_type,
            interval,
            times: 1,
        })
    }
}

impl Default for LatinFrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitOfTime::{Day, Hour, Month, Week};

    #[test]
    fn fixed_codes_resolve() {
        let table = LatinFrequencyTable::new();
        let cases = [
            ("qd", Day, 1, 1),
            ("qod", Day, 2, 1),
            ("qhs", Day, 1, 1),
            ("qam", Day, 1, 1),
            ("qpm", Day, 1, 1),
            ("bid", Day, 1, 2),
            ("tid", Day, 1, 3),
            ("qid", Day, 1, 4),
            ("qw", Week, 1, 1),
            ("biw", Week, 1, 2),
            ("tiw", Week, 1, 3),
            ("qiw", Week, 1, 4),
            ("qm", Month, 1, 1),
        ];
        for (code, frequency_type, interval, times) in cases {
            assert_eq!(
                table.lookup(code),
                Some(LatinFrequency::new(frequency_type, interval, times)),
                "resolving {code:?}"
            );
        }
    }

    #[test]
    fn interval_codes_resolve() {
        let table = LatinFrequencyTable::new();
        let cases = [
            ("q12h", Hour, 12),
            ("q7h", Hour, 7),
            ("q4d", Day, 4),
            ("q6d", Day, 6),
            ("q2w", Week, 2),
            ("q3m", Month, 3),
        ];
        for (code, frequency_type, interval) in cases {
            assert_eq!(
                table.lookup(code),
                Some(LatinFrequency::new(frequency_type, interval, 1)),
                "resolving {code:?}"
            );
        }
    }

    #[test]
    fn periods_and_case_are_ignored() {
        let table = LatinFrequencyTable::new();
        assert_eq!(table.lookup("Q.O.D"), Some(LatinFrequency::new(Day, 2, 1)));
        assert_eq!(table.lookup("T.I.D"), Some(LatinFrequency::new(Day, 1, 3)));
        assert_eq!(table.lookup("q.4.d"), Some(LatinFrequency::new(Day, 4, 1)));
        assert_eq!(table.lookup("Q6D"), Some(LatinFrequency::new(Day, 6, 1)));
        assert_eq!(table.lookup("BID"), Some(LatinFrequency::new(Day, 1, 2)));
    }

    #[test]
    fn non_codes_yield_none() {
        let table = LatinFrequencyTable::new();
        for token in ["take", "every", "q", "qx", "q12x", "q1000h", "2", ".", ""] {
            assert_eq!(table.lookup(token), None, "rejecting {token:?}");
        }
    }
}
