//! Candidate disambiguation and interpretation.
//!
//! Matching produces scored candidates; this module turns them into exactly
//! one typed outcome:
//!
//! ```text
//! candidates ── none ──────────────▶ Unknown
//!       │
//!       ├─ unique top score ───────▶ resolve fields
//!       │
//!       └─ tied top scores ────────▶ structural tie-break
//!                │                    (court-code shape, literal tokens)
//!                └─ still tied ────▶ Ambiguous(all tied interpretations)
//! ```
//!
//! Resolution interprets the raw field slices: 2-digit years are expanded
//! against the context's reference date, the trial-court family is split into
//! Superior/District/BMC by court code, dictionary lookups set the advisory
//! `code_valid` flag. A nonsensical interpretation (year outside 1900-2100,
//! unknown court code, month 13) degrades to `Unknown` rather than guessing.
//!
//! The engine never invents a field to force a single answer. A trial-court
//! candidate with no court code resolves to one interpretation per family
//! unless the caller supplied a court-code hint in [`Context`].

use chrono::Datelike;

use crate::api::{Classification, Context, CourtSystem, DocketNumber, SequenceNumber, Sitting};
use crate::catalog::Family;
use crate::codes::{self, CodeBook};
use crate::{Candidate, FieldValues};

use super::normalize;

/// Interpretations of a single candidate.
enum Resolution {
    One(DocketNumber),
    /// Structurally sound but spread across court systems (court code absent).
    Split(Vec<DocketNumber>),
    /// Fields decoded to something nonsensical; drop the candidate.
    Degraded,
}

/// Reduce scored candidates to the final classification.
pub(crate) fn disambiguate(
    candidates: &[Candidate],
    local_notes: &[String],
    ctx: &Context,
    book: &CodeBook,
) -> Classification {
    let debug = std::env::var_os("MADOCKET_DEBUG").is_some();
    let Some(top_score) = candidates.first().map(|c| c.score) else {
        return Classification::Unknown;
    };

    let tied: Vec<&Candidate> = candidates.iter().take_while(|c| c.score == top_score).collect();
    let survivors = if tied.len() > 1 { structural_break(&tied) } else { tied };
    if debug {
        eprintln!(
            "[disambiguate] top_score={} survivors={:?}",
            top_score,
            survivors.iter().map(|c| c.layout.name).collect::<Vec<_>>()
        );
    }

    let mut interpretations: Vec<DocketNumber> = Vec::new();
    for candidate in survivors {
        match resolve(candidate, local_notes, ctx, book) {
            Resolution::One(d) => interpretations.push(d),
            Resolution::Split(ds) => interpretations.extend(ds),
            Resolution::Degraded => {}
        }
    }

    if interpretations.len() > 1 {
        return Classification::Ambiguous(interpretations);
    }
    let Some(docket) = interpretations.pop() else {
        return Classification::Unknown;
    };
    match normalize::render(&docket) {
        Some(canonical) => Classification::Normalized { docket, canonical },
        // Structurally sound but under-specified (e.g. a trial-court variant
        // resolved by hint without a case type): the caller must supply more
        // context before a canonical form exists.
        None => Classification::Ambiguous(vec![docket]),
    }
}

/// Keep the candidates whose structure best confirms their layout family:
/// identifying literals first, then a court code whose shape matches, then
/// the court-code-less Land Court layout, and last a family that expected a
/// court code it does not have.
fn structural_break<'a>(tied: &[&'a Candidate]) -> Vec<&'a Candidate> {
    let best = tied.iter().map(|c| structural_rank(c)).min().unwrap_or(u8::MAX);
    tied.iter().filter(|c| structural_rank(c) == best).copied().collect()
}

fn structural_rank(candidate: &Candidate) -> u8 {
    match candidate.layout.family {
        Family::Sjc | Family::SjcSingleJustice | Family::SjcBarDocket => 0,
        Family::Appeals => 1,
        Family::Housing => 2,
        Family::Probate | Family::Trial if candidate.fields.court_code.is_some() => 2,
        Family::Land | Family::LandSbq => 3,
        _ => 4,
    }
}

fn resolve(candidate: &Candidate, local_notes: &[String], ctx: &Context, book: &CodeBook) -> Resolution {
    let fields = &candidate.fields;

    let filing_year = match interpret_year(fields, ctx) {
        Ok(year) => year,
        Err(()) => return Resolution::Degraded,
    };

    let filing_month = match &fields.month {
        Some(m) => match m.parse::<u8>() {
            Ok(m @ 1..=12) => Some(m),
            _ => return Resolution::Degraded,
        },
        None => None,
    };

    let Some(sequence) = fields.sequence.as_deref().and_then(parse_sequence) else {
        return Resolution::Degraded;
    };

    let case_type = fields
        .case_type
        .clone()
        .or_else(|| hint_case_type(candidate.layout.family, ctx));

    let base = DocketNumber {
        court_system: CourtSystem::Land, // overwritten below
        court_name: None,
        filing_year,
        court_code: None,
        case_type_code: case_type,
        case_group_code: fields.case_group.clone(),
        sequence,
        plan_number: fields.plan.clone(),
        filing_month,
        sitting: None,
        local_notes: local_notes.to_vec(),
        code_valid: true,
        confidence: candidate.score,
    };

    match candidate.layout.family {
        Family::Trial => resolve_trial(base, fields, ctx, book),
        Family::Housing => {
            let Some(code) = fields.court_code.as_deref() else { return Resolution::Degraded };
            let code = format!("H{code}");
            let Some(name) = book.court_name(&code) else { return Resolution::Degraded };
            Resolution::One(finish(base, CourtSystem::Housing, Some(code), Some(name.to_string()), None, book))
        }
        Family::Probate => {
            let Some(code) = fields.court_code.clone() else { return Resolution::Degraded };
            let Some(name) = book.court_name(&code) else { return Resolution::Degraded };
            Resolution::One(finish(base, CourtSystem::ProbateFamily, Some(code), Some(name.to_string()), None, book))
        }
        Family::Land => {
            Resolution::One(finish(base, CourtSystem::Land, None, Some("Land Court".to_string()), None, book))
        }
        Family::LandSbq => {
            Resolution::One(finish(base, CourtSystem::LandSbq, None, Some("Land Court".to_string()), None, book))
        }
        Family::Appeals => {
            let sitting = match fields.sitting_code.as_deref() {
                Some("P") => Sitting::Panel,
                Some("J") => Sitting::SingleJustice,
                _ => return Resolution::Degraded,
            };
            let name = book.sitting_meaning(fields.sitting_code.as_deref().unwrap_or_default());
            Resolution::One(finish(
                base,
                CourtSystem::Appeals,
                None,
                name.map(str::to_string),
                Some(sitting),
                book,
            ))
        }
        Family::Sjc => {
            let name = book.sitting_meaning("SJC").map(str::to_string);
            Resolution::One(finish(base, CourtSystem::Sjc, None, name, Some(Sitting::Panel), book))
        }
        Family::SjcSingleJustice => {
            let name = book.sitting_meaning("SJ").map(str::to_string);
            Resolution::One(finish(base, CourtSystem::SjcSingleJustice, None, name, Some(Sitting::SingleJustice), book))
        }
        Family::SjcBarDocket => {
            let name = book.sitting_meaning("BD").map(str::to_string);
            Resolution::One(finish(base, CourtSystem::SjcBarDocket, None, name, Some(Sitting::BarDocket), book))
        }
    }
}

/// Split a trial-family candidate into its concrete court system. Without a
/// court code (and without a caller hint) the docket is structurally valid in
/// every trial family, so one interpretation per family is returned.
fn resolve_trial(base: DocketNumber, fields: &FieldValues, ctx: &Context, book: &CodeBook) -> Resolution {
    let code = fields
        .court_code
        .clone()
        .or_else(|| ctx.court_code.as_deref().map(str::to_ascii_uppercase));

    match code {
        Some(code) => match book.trial_family(&code) {
            Some(system) => {
                let name = book.court_name(&code).map(str::to_string);
                Resolution::One(finish(base, system, Some(code), name, None, book))
            }
            // Nonexistent court code: the docket refers to no known court.
            None => Resolution::Degraded,
        },
        None => Resolution::Split(
            [CourtSystem::Superior, CourtSystem::District, CourtSystem::BostonMunicipal]
                .into_iter()
                .map(|system| finish(base.clone(), system, None, None, None, book))
                .collect(),
        ),
    }
}

fn finish(
    mut docket: DocketNumber,
    system: CourtSystem,
    court_code: Option<String>,
    court_name: Option<String>,
    sitting: Option<Sitting>,
    book: &CodeBook,
) -> DocketNumber {
    docket.court_system = system;
    docket.court_code = court_code;
    docket.court_name = court_name;
    docket.sitting = sitting;
    docket.code_valid = code_validity(&docket, book);
    docket
}

/// Advisory dictionary check: the case-type code must be known to the
/// resolved system's dictionary and, for Probate & Family, the case-group
/// letter must be known and consistent with the case type where the expected
/// pairing is recorded. Appellate dockets carry no case-type code and are
/// always valid here.
fn code_validity(docket: &DocketNumber, book: &CodeBook) -> bool {
    let Some(case_type) = docket.case_type_code.as_deref() else { return true };
    if book.case_type_meaning(docket.court_system, case_type).is_none() {
        return false;
    }
    if docket.court_system == CourtSystem::ProbateFamily {
        if let Some(group) = docket.case_group_code.as_deref() {
            if book.case_group_meaning(CourtSystem::ProbateFamily, group).is_none() {
                return false;
            }
            if let Some(expected) = codes::expected_probate_group(case_type) {
                if expected != group {
                    return false;
                }
            }
        }
    }
    true
}

/// Interpret the year digits as written: 4-digit years pass through, 2-digit
/// years are expanded against the reference date (digits at most the current
/// year's get the current century, later digits the previous one). A year
/// outside 1900-2100 is an error; an absent year (SJC panel) is fine.
fn interpret_year(fields: &FieldValues, ctx: &Context) -> Result<Option<u16>, ()> {
    let Some(digits) = fields.year_digits.as_deref() else { return Ok(None) };
    let year: i32 = digits.parse().map_err(|_| ())?;
    let year = if digits.len() == 4 {
        year
    } else {
        let reference = ctx.reference_date.year();
        let century = reference - reference.rem_euclid(100);
        if year <= reference.rem_euclid(100) { century + year } else { century - 100 + year }
    };
    if (1900..=2100).contains(&year) { Ok(Some(year as u16)) } else { Err(()) }
}

fn parse_sequence(digits: &str) -> Option<SequenceNumber> {
    Some(SequenceNumber { value: digits.parse().ok()?, width: digits.len() as u8 })
}

/// Case-type hints only apply to the families that share the trial-court
/// dictionary; they exist so an interview flow that already knows the court
/// can recover abbreviated filings.
fn hint_case_type(family: Family, ctx: &Context) -> Option<String> {
    match family {
        Family::Trial | Family::Housing => ctx.case_type.as_deref().map(str::to_ascii_uppercase),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::matcher::match_candidates;
    use crate::tokenize::tokenize;
    use crate::Options;

    fn classify(input: &str, ctx: &Context) -> Classification {
        let tok = tokenize(input);
        let candidates = match_candidates(&tok, CodeBook::standard(), &Options::default());
        disambiguate(&candidates, &tok.local_notes, ctx, CodeBook::standard())
    }

    #[test]
    fn unique_top_candidate_is_taken() {
        match classify("1577CV00982", &Context::default()) {
            Classification::Normalized { docket, .. } => {
                assert_eq!(docket.court_system, CourtSystem::Superior);
                assert_eq!(docket.court_name.as_deref(), Some("Essex County Superior Court"));
                assert_eq!(docket.filing_year, Some(2015));
                assert_eq!(docket.sequence.value, 982);
                assert!(docket.code_valid);
            }
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn court_code_shape_breaks_the_land_trial_tie() {
        match classify("07 TL 001026", &Context::default()) {
            Classification::Normalized { docket, .. } => {
                assert_eq!(docket.court_system, CourtSystem::Land);
                assert_eq!(docket.court_code, None);
                assert_eq!(docket.filing_year, Some(2007));
            }
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn missing_court_code_spreads_across_trial_families() {
        match classify("15-CV-00982", &Context::default()) {
            Classification::Ambiguous(interpretations) => {
                let systems: Vec<CourtSystem> = interpretations.iter().map(|d| d.court_system).collect();
                assert_eq!(
                    systems,
                    vec![CourtSystem::Superior, CourtSystem::District, CourtSystem::BostonMunicipal]
                );
                for d in &interpretations {
                    assert_eq!(d.filing_year, Some(2015));
                    assert_eq!(d.case_type_code.as_deref(), Some("CV"));
                }
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn court_code_hint_collapses_the_spread() {
        let ctx = Context { court_code: Some("77".to_string()), ..Context::default() };
        match classify("15-CV-00982", &ctx) {
            Classification::Normalized { docket, canonical } => {
                assert_eq!(docket.court_system, CourtSystem::Superior);
                assert_eq!(canonical, "1577CV00982");
            }
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn nonexistent_court_code_degrades_to_unknown() {
        assert!(matches!(classify("9999CV00000", &Context::default()), Classification::Unknown));
    }

    #[test]
    fn out_of_window_years_degrade_to_unknown() {
        // 4-digit years are taken literally and must fall inside 1900-2100.
        assert!(matches!(classify("2222-P-0874", &Context::default()), Classification::Unknown));
    }

    #[test]
    fn two_digit_years_expand_against_the_reference_date() {
        match classify("2077CV00982", &Context::default()) {
            Classification::Normalized { docket, .. } => assert_eq!(docket.filing_year, Some(2020)),
            other => panic!("expected Normalized, got {other:?}"),
        }
        match classify("9977CV00982", &Context::default()) {
            Classification::Normalized { docket, .. } => assert_eq!(docket.filing_year, Some(1999)),
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn probate_group_mismatch_is_advisory_only() {
        match classify("ES00A0000XY", &Context::default()) {
            Classification::Normalized { docket, .. } => {
                assert_eq!(docket.court_system, CourtSystem::ProbateFamily);
                assert!(!docket.code_valid);
            }
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn sbq_month_must_be_a_real_month() {
        assert!(matches!(classify("15 SBQ 00025 13-001", &Context::default()), Classification::Unknown));
    }
}
