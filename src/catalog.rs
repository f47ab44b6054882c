//! Static registry of known docket-number layouts.
//!
//! One [`DocketLayout`] per court-system sub-variant, each carrying the field
//! orderings that real filings have been observed to use (plus a few
//! never-observed orderings that follow the same logic, gated behind
//! [`crate::Options::permissive`]).
//!
//! Catalog order is matching priority. It is a policy choice, not extracted
//! ground truth: layouts identified by a literal abbreviation (`SBQ`, `SJ`,
//! `BD`, `SJC`) come first because their field set is a strict superset of a
//! generic layout that would otherwise under-match, then the remaining
//! layouts from most to least constrained. The trial-court family goes last
//! since its variations are the loosest.
//!
//! Layouts are immutable and shared read-only by every classification run.

use once_cell::sync::Lazy;

use crate::engine::LayoutGate;

/// Which court family a layout belongs to. `Trial` covers Superior, District,
/// and BMC, which share one shape and are split later by court code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Trial,
    Housing,
    Land,
    LandSbq,
    Probate,
    Appeals,
    Sjc,
    SjcSingleJustice,
    SjcBarDocket,
}

/// Structured field a layout can assign input characters to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldId {
    Year2,
    Year4,
    /// Numeric trial-court code, or the two digits after `H` for Housing.
    CourtCode,
    /// Two-letter Probate & Family court code.
    CourtLetters,
    CaseType,
    CaseGroup,
    Sequence,
    PlanNumber,
    FilingMonth,
    /// Appeals Court sitting letter (`P` or `J`).
    SittingLetter,
    /// Fixed literal abbreviation identifying the layout outright.
    Abbrev,
}

/// Declared width of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Width {
    Fixed(usize),
    /// Inclusive min/max. A variable-width field always consumes the rest of
    /// its segment, so the bounds cap how much it may absorb.
    Var(usize, usize),
}

/// Permitted characters for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Charset {
    Digits,
    Letters,
    /// Exact abbreviation token, matched case-insensitively and atomically.
    Literal(&'static str),
    /// One of a small set of single-token alternatives.
    OneOf(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct FieldSpec {
    pub id: FieldId,
    pub width: Width,
    pub charset: Charset,
    /// Optional fields are consumed greedily when the cursor matches their
    /// charset and skipped otherwise.
    pub optional: bool,
}

/// One permitted field order for a layout. The first ordering is the
/// standard (canonical) form; the rest are observed or speculative
/// variations.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Ordering {
    pub fields: &'static [FieldSpec],
    /// Follows the logic of observed variations but has never been seen in a
    /// real filing. Only tried in permissive mode.
    pub speculative: bool,
}

#[derive(Debug)]
pub(crate) struct DocketLayout {
    pub name: &'static str,
    pub family: Family,
    /// Trigger buckets that must all be present for this layout to be tried.
    pub gate: u32,
    pub orderings: &'static [Ordering],
    /// Canonical sequence-number display width; longer sequences still match
    /// but take a scoring penalty. Zero means no padding (SJC panel).
    pub seq_width: usize,
}

const fn field(id: FieldId, width: Width, charset: Charset) -> FieldSpec {
    FieldSpec { id, width, charset, optional: false }
}

const fn opt(id: FieldId, width: Width, charset: Charset) -> FieldSpec {
    FieldSpec { id, width, charset, optional: true }
}

const fn lit(text: &'static str) -> FieldSpec {
    field(FieldId::Abbrev, Width::Fixed(text.len()), Charset::Literal(text))
}

const YEAR2: FieldSpec = field(FieldId::Year2, Width::Fixed(2), Charset::Digits);
const YEAR4: FieldSpec = field(FieldId::Year4, Width::Fixed(4), Charset::Digits);
const COURT2: FieldSpec = field(FieldId::CourtCode, Width::Fixed(2), Charset::Digits);
const COURT_LETTERS: FieldSpec = field(FieldId::CourtLetters, Width::Fixed(2), Charset::Letters);
const TYPE2: FieldSpec = field(FieldId::CaseType, Width::Fixed(2), Charset::Letters);
const LAND_TYPE: FieldSpec = field(FieldId::CaseType, Width::Var(2, 4), Charset::Letters);
const GROUP: FieldSpec = field(FieldId::CaseGroup, Width::Fixed(1), Charset::Letters);
const GROUP_OPT: FieldSpec = opt(FieldId::CaseGroup, Width::Fixed(1), Charset::Letters);
const SEQ: FieldSpec = field(FieldId::Sequence, Width::Var(1, 6), Charset::Digits);
const PLAN: FieldSpec = field(FieldId::PlanNumber, Width::Var(1, 5), Charset::Digits);
const MONTH: FieldSpec = field(FieldId::FilingMonth, Width::Fixed(2), Charset::Digits);
const SITTING: FieldSpec = field(FieldId::SittingLetter, Width::Fixed(1), Charset::OneOf(&["P", "J"]));
/// `SBQ` is both the identifying literal and the case-type code of the
/// subsequent Land Court layout.
const SBQ_TYPE: FieldSpec = field(FieldId::CaseType, Width::Fixed(3), Charset::Literal("SBQ"));

// Field lists with inline `lit(...)` calls must live in const items: only
// there does the borrowed array promote to the `&'static [FieldSpec]` the
// layout table needs.
const SJ_FIELDS: &[FieldSpec] = &[lit("SJ"), YEAR4, SEQ];
const BD_FIELDS: &[FieldSpec] = &[lit("BD"), YEAR4, SEQ];
const SJC_FIELDS: &[FieldSpec] = &[lit("SJC"), SEQ];
const HOUSING_FIELDS: &[FieldSpec] = &[YEAR2, lit("H"), COURT2, TYPE2, SEQ];
const HOUSING_SHORT_FIELDS: &[FieldSpec] = &[YEAR2, lit("H"), COURT2, SEQ];

static CATALOG: Lazy<Vec<DocketLayout>> = Lazy::new(|| {
    vec![
        // 15 SBQ 00025 09-001
        DocketLayout {
            name: "land-court-sbq",
            family: Family::LandSbq,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LIT_SBQ).bits(),
            orderings: &[Ordering { fields: &[YEAR2, SBQ_TYPE, PLAN, MONTH, SEQ], speculative: false }],
            seq_width: 3,
        },
        // SJ-2021-034
        DocketLayout {
            name: "sjc-single-justice",
            family: Family::SjcSingleJustice,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LIT_SJ).bits(),
            orderings: &[Ordering { fields: SJ_FIELDS, speculative: false }],
            seq_width: 3,
        },
        // BD-2021-034
        DocketLayout {
            name: "sjc-bar-docket",
            family: Family::SjcBarDocket,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LIT_BD).bits(),
            orderings: &[Ordering { fields: BD_FIELDS, speculative: false }],
            seq_width: 3,
        },
        // SJC-13103 (no year)
        DocketLayout {
            name: "sjc-panel",
            family: Family::Sjc,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LIT_SJC).bits(),
            orderings: &[Ordering { fields: SJC_FIELDS, speculative: false }],
            seq_width: 0,
        },
        // 2020-P-0874
        DocketLayout {
            name: "appeals-court",
            family: Family::Appeals,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::HAS_LETTERS).bits(),
            orderings: &[Ordering { fields: &[YEAR4, SITTING, SEQ], speculative: false }],
            seq_width: 4,
        },
        // ES15A0064AD
        DocketLayout {
            name: "probate-family",
            family: Family::Probate,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LEADING_LETTERS).bits(),
            orderings: &[
                Ordering { fields: &[COURT_LETTERS, YEAR2, GROUP, SEQ, TYPE2], speculative: false },
                // CCYY-(G)N+ / CCTTYY-(G)N+ follow the trial-court variation
                // logic but have not been seen in real probate filings.
                Ordering { fields: &[COURT_LETTERS, YEAR2, GROUP_OPT, SEQ], speculative: true },
                Ordering { fields: &[COURT_LETTERS, TYPE2, YEAR2, GROUP_OPT, SEQ], speculative: true },
            ],
            seq_width: 4,
        },
        // 15H84CV000436
        DocketLayout {
            name: "housing-court",
            family: Family::Housing,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::LIT_H).bits(),
            orderings: &[
                Ordering { fields: HOUSING_FIELDS, speculative: false },
                // 15H84-000436 (case type dropped)
                Ordering { fields: HOUSING_SHORT_FIELDS, speculative: false },
            ],
            seq_width: 6,
        },
        // 07 TL 001026 (no court code by design)
        DocketLayout {
            name: "land-court",
            family: Family::Land,
            gate: (LayoutGate::HAS_DIGITS | LayoutGate::HAS_LETTERS).bits(),
            orderings: &[Ordering { fields: &[YEAR2, LAND_TYPE, SEQ], speculative: false }],
            seq_width: 6,
        },
        // 1577CV00982 and the SpineFrontier-style variations
        DocketLayout {
            name: "trial-court",
            family: Family::Trial,
            gate: LayoutGate::HAS_DIGITS.bits(),
            orderings: &[
                Ordering { fields: &[YEAR2, COURT2, TYPE2, SEQ], speculative: false },
                // 1577-00982 (case type dropped)
                Ordering { fields: &[YEAR2, COURT2, SEQ], speculative: false },
                // 15-CV-00982 (court code dropped)
                Ordering { fields: &[YEAR2, TYPE2, SEQ], speculative: false },
                // 2015-00982
                Ordering { fields: &[YEAR4, SEQ], speculative: false },
                // 15-0982
                Ordering { fields: &[YEAR2, SEQ], speculative: false },
                // CV15-00982 / CV1577-00982, seen in federal dockets only
                Ordering { fields: &[TYPE2, YEAR2, SEQ], speculative: true },
                Ordering { fields: &[TYPE2, YEAR2, COURT2, SEQ], speculative: true },
            ],
            seq_width: 6,
        },
    ]
});

/// The layouts in matching-priority order.
pub(crate) fn layouts() -> &'static [DocketLayout] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_layouts_precede_their_generic_supersets() {
        let names: Vec<&str> = layouts().iter().map(|l| l.name).collect();
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("land-court-sbq") < pos("land-court"));
        assert!(pos("sjc-single-justice") < pos("sjc-panel"));
        assert!(pos("sjc-bar-docket") < pos("sjc-panel"));
        assert!(pos("land-court") < pos("trial-court"));
    }

    #[test]
    fn identifying_literals_carry_their_own_widths() {
        let mut seen = 0usize;
        for layout in layouts() {
            for ordering in layout.orderings {
                for field in ordering.fields {
                    if let Charset::Literal(text) = field.charset {
                        assert_eq!(field.width, Width::Fixed(text.len()), "in layout {}", layout.name);
                        seen += 1;
                    }
                }
            }
        }
        // SBQ, SJ, BD, SJC, and the two Housing orderings' H.
        assert_eq!(seen, 6);
    }

    #[test]
    fn standard_orderings_are_never_speculative() {
        for layout in layouts() {
            assert!(!layout.orderings[0].speculative, "layout {} has a speculative standard form", layout.name);
        }
    }

    #[test]
    fn every_layout_places_a_sequence_number() {
        for layout in layouts() {
            for ordering in layout.orderings {
                assert!(
                    ordering.fields.iter().any(|f| f.id == FieldId::Sequence),
                    "ordering of {} lacks a sequence field",
                    layout.name
                );
            }
        }
    }
}
