//! Trigger scanning (input pre-classification).
//!
//! Before any layout is attempted, the tokenized input is scanned once for
//! coarse signals: does it contain digits, letters, a leading letter run, one
//! of the identifying abbreviations (`SJC`, `SJ`, `BD`, `SBQ`, the Housing
//! `H`)? Each layout in the catalog declares the gates it needs; layouts
//! whose gates are not all present are skipped without any field matching.
//!
//! The scan is heuristic on purpose. A false positive only means one extra
//! layout gets tried and rejected by the matcher; a gate must therefore never
//! produce a false *negative* for an input its layout could match.

use bitflags::bitflags;

use crate::{SegClass, Tokenized};

bitflags! {
    /// Coarse input signals used to gate layout matching.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LayoutGate: u32 {
        const HAS_DIGITS      = 1 << 0;
        const HAS_LETTERS     = 1 << 1;
        /// First segment is a letter run (Probate & Family shape).
        const LEADING_LETTERS = 1 << 2;
        const LIT_SJC         = 1 << 3;
        const LIT_SJ          = 1 << 4;
        const LIT_BD          = 1 << 5;
        const LIT_SBQ         = 1 << 6;
        /// A lone `H` segment between digit runs (Housing court code).
        const LIT_H           = 1 << 7;
    }
}

/// Signals detected in one tokenized input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerInfo {
    pub gates: LayoutGate,
}

impl TriggerInfo {
    /// Scan tokenized segments for gate signals. Abbreviations only count
    /// when they form a whole segment, so `SJC` never triggers the `SJ` gate.
    pub fn scan(tok: &Tokenized) -> Self {
        let mut gates = LayoutGate::empty();

        for (idx, seg) in tok.segments.iter().enumerate() {
            match seg.class {
                SegClass::Digits => gates |= LayoutGate::HAS_DIGITS,
                SegClass::Letters => {
                    gates |= LayoutGate::HAS_LETTERS;
                    if idx == 0 {
                        gates |= LayoutGate::LEADING_LETTERS;
                    }
                    if seg.text.eq_ignore_ascii_case("SJC") {
                        gates |= LayoutGate::LIT_SJC;
                    } else if seg.text.eq_ignore_ascii_case("SJ") {
                        gates |= LayoutGate::LIT_SJ;
                    } else if seg.text.eq_ignore_ascii_case("BD") {
                        gates |= LayoutGate::LIT_BD;
                    } else if seg.text.eq_ignore_ascii_case("SBQ") {
                        gates |= LayoutGate::LIT_SBQ;
                    } else if seg.text.eq_ignore_ascii_case("H") {
                        gates |= LayoutGate::LIT_H;
                    }
                }
            }
        }

        TriggerInfo { gates }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    #[test]
    fn abbreviations_are_matched_as_whole_segments() {
        let info = TriggerInfo::scan(&tokenize("SJC-13103"));
        assert!(info.gates.contains(LayoutGate::LIT_SJC));
        assert!(!info.gates.contains(LayoutGate::LIT_SJ));

        let info = TriggerInfo::scan(&tokenize("sj-2021-005"));
        assert!(info.gates.contains(LayoutGate::LIT_SJ));
        assert!(!info.gates.contains(LayoutGate::LIT_SJC));
    }

    #[test]
    fn housing_h_and_leading_letters_are_detected() {
        let info = TriggerInfo::scan(&tokenize("15H84CV000436"));
        assert!(info.gates.contains(LayoutGate::LIT_H));
        assert!(!info.gates.contains(LayoutGate::LEADING_LETTERS));

        let info = TriggerInfo::scan(&tokenize("ES15A0064AD"));
        assert!(info.gates.contains(LayoutGate::LEADING_LETTERS));
    }

    #[test]
    fn garbage_still_scans_cleanly() {
        let info = TriggerInfo::scan(&tokenize("complete gibberish"));
        assert!(info.gates.contains(LayoutGate::HAS_LETTERS));
        assert!(!info.gates.contains(LayoutGate::HAS_DIGITS));
    }
}
