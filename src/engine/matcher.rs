//! Field assignment and candidate scoring.
//!
//! This module is the operational core of the engine: for every gated layout
//! ordering it tries to assign the tokenized segments to the ordering's
//! fields, honoring each field's charset and width.
//!
//! The cursor walks segments left to right:
//!
//! ```text
//! segments: [1577][CV][00982]
//!            ^^ Year2 takes two chars, CourtCode the next two (fixed-width
//!               fields may split a segment)
//!                    ^^ CaseType consumes the whole letter segment
//!                        ^^^^^ Sequence (variable) consumes the remainder
//! ```
//!
//! Two rules keep matching linear in layout count times input length, with
//! no backtracking:
//!
//! - fixed-width fields may split a segment but never cross one, and only
//!   contiguous runs may be split (a separated segment is consumed whole);
//! - variable-width fields always consume the rest of their segment, bounded
//!   by the declared min/max.
//!
//! An ordering that cannot place every non-optional field, or that leaves
//! input unconsumed, produces no candidate at all. Candidates are scored,
//! sorted descending, and ties are preserved for the disambiguator.
//!
//! Setting `MADOCKET_DEBUG=1` prints gating and scoring traces.

use crate::catalog::{self, Charset, DocketLayout, FieldId, Ordering, Width};
use crate::codes::CodeBook;
use crate::{Candidate, CourtSystem, FieldValues, Options, Sep, SegClass, Segment, Tokenized};

use super::trigger::{LayoutGate, TriggerInfo};

/// Outcome of one successful field assignment.
struct Assignment {
    fields: FieldValues,
    placed: usize,
    literals: usize,
    omitted: usize,
}

/// Cursor into the segment list: current segment plus a character offset for
/// fixed-width fields that split a segment.
#[derive(Clone, Copy)]
struct Cursor {
    seg: usize,
    off: usize,
}

/// Score raw tokens against every gated catalog layout, returning candidates
/// sorted by descending score. The sort is stable, so equally scored
/// candidates keep catalog priority order.
pub(crate) fn match_candidates(tok: &Tokenized, book: &CodeBook, options: &Options) -> Vec<Candidate> {
    let info = TriggerInfo::scan(tok);
    let debug = std::env::var_os("MADOCKET_DEBUG").is_some();
    if debug {
        eprintln!("[trigger_scan] gates={:?}", info.gates);
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for layout in catalog::layouts() {
        let gate = LayoutGate::from_bits_truncate(layout.gate);
        if !info.gates.contains(gate) {
            continue;
        }
        for (idx, ordering) in layout.orderings.iter().enumerate() {
            if ordering.speculative && !options.permissive {
                continue;
            }
            let Some(assignment) = assign(ordering, &tok.segments) else { continue };
            let score = score(layout, &assignment, book);
            if debug {
                eprintln!(
                    "[match] layout=\"{}\" ordering={} score={} fields={:?}",
                    layout.name, idx, score, assignment.fields
                );
            }
            candidates.push(Candidate { layout, ordering: idx, fields: assignment.fields, score });
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// Names of the layouts whose gates the input satisfies.
pub(crate) fn active_layout_names(tok: &Tokenized) -> Vec<&'static str> {
    let info = TriggerInfo::scan(tok);
    catalog::layouts()
        .iter()
        .filter(|l| info.gates.contains(LayoutGate::from_bits_truncate(l.gate)))
        .map(|l| l.name)
        .collect()
}

fn assign(ordering: &Ordering, segments: &[Segment]) -> Option<Assignment> {
    let mut fields = FieldValues::default();
    let mut cursor = Cursor { seg: 0, off: 0 };
    let mut placed = 0usize;
    let mut literals = 0usize;
    let mut omitted = 0usize;

    for spec in ordering.fields {
        match take(spec.charset, spec.width, segments, cursor) {
            Some((text, next)) => {
                cursor = next;
                record(&mut fields, spec.id, text);
                placed += 1;
                if matches!(spec.charset, Charset::Literal(_)) {
                    literals += 1;
                }
            }
            None if spec.optional => omitted += 1,
            None => return None,
        }
    }

    // Every segment must be fully consumed.
    if cursor.seg < segments.len() {
        return None;
    }

    Some(Assignment { fields, placed, literals, omitted })
}

/// Try to consume one field at `cursor`. Returns the (upper-cased) slice and
/// the advanced cursor, or `None` when the field does not fit.
fn take(charset: Charset, width: Width, segments: &[Segment], cursor: Cursor) -> Option<(String, Cursor)> {
    let seg = segments.get(cursor.seg)?;
    let rest = seg.text.len() - cursor.off;

    match charset {
        // Abbreviations are atomic: they must be a whole segment of their own.
        Charset::Literal(text) => {
            if cursor.off == 0 && seg.text.eq_ignore_ascii_case(text) {
                Some((text.to_string(), Cursor { seg: cursor.seg + 1, off: 0 }))
            } else {
                None
            }
        }
        Charset::OneOf(options) => {
            if cursor.off != 0 {
                return None;
            }
            let hit = options.iter().find(|o| seg.text.eq_ignore_ascii_case(o))?;
            Some((hit.to_string(), Cursor { seg: cursor.seg + 1, off: 0 }))
        }
        Charset::Digits | Charset::Letters => {
            let wanted = match charset {
                Charset::Digits => SegClass::Digits,
                _ => SegClass::Letters,
            };
            if seg.class != wanted {
                return None;
            }
            let len = match width {
                Width::Fixed(n) => {
                    if rest < n {
                        return None;
                    }
                    // A separated segment was written as one unit; a fixed
                    // field may split only a contiguous run. `15-0982` is
                    // year+sequence, never year+court `09`+sequence `82`.
                    if cursor.off == 0 && seg.sep_before != Sep::None && n != rest {
                        return None;
                    }
                    n
                }
                // Variable fields absorb the rest of the segment.
                Width::Var(min, max) => {
                    if rest < min || rest > max {
                        return None;
                    }
                    rest
                }
            };
            let text = seg.text[cursor.off..cursor.off + len].to_ascii_uppercase();
            let next = if cursor.off + len == seg.text.len() {
                Cursor { seg: cursor.seg + 1, off: 0 }
            } else {
                Cursor { seg: cursor.seg, off: cursor.off + len }
            };
            Some((text, next))
        }
    }
}

fn record(fields: &mut FieldValues, id: FieldId, text: String) {
    match id {
        FieldId::Year2 | FieldId::Year4 => fields.year_digits = Some(text),
        FieldId::CourtCode | FieldId::CourtLetters => fields.court_code = Some(text),
        FieldId::CaseType => fields.case_type = Some(text),
        FieldId::CaseGroup => fields.case_group = Some(text),
        FieldId::Sequence => fields.sequence = Some(text),
        FieldId::PlanNumber => fields.plan = Some(text),
        FieldId::FilingMonth => fields.month = Some(text),
        FieldId::SittingLetter => fields.sitting_code = Some(text),
        FieldId::Abbrev => {}
    }
}

/// Score one assignment: a point per placed field, a bonus for identifying
/// literals and for codes found in the relevant dictionaries, penalties for
/// omitted optional fields and for a sequence wider than the layout's
/// canonical width (prefer the narrowest consistent interpretation).
fn score(layout: &DocketLayout, assignment: &Assignment, book: &CodeBook) -> i32 {
    let mut score = assignment.placed as i32;
    score += 3 * assignment.literals as i32;
    score -= assignment.omitted as i32;

    let fields = &assignment.fields;
    // An explicit in-era 4-digit year outweighs reading the same digits as a
    // 2-digit year plus court code: `2015-982` is year 2015, not court `15`.
    if let Some(year) = fields.year_digits.as_deref() {
        if year.len() == 4 && year.parse::<i32>().is_ok_and(|y| (1900..=2100).contains(&y)) {
            score += 3;
        }
    }
    if let (Some(system), Some(code)) = (dictionary_system(layout), fields.case_type.as_deref()) {
        if book.case_type_meaning(system, code).is_some() {
            score += 2;
        }
    }
    if let Some(group) = fields.case_group.as_deref() {
        if book.case_group_meaning(CourtSystem::ProbateFamily, group).is_some() {
            score += 2;
        }
    }
    if let Some(code) = fields.court_code.as_deref() {
        let key = match layout.family {
            catalog::Family::Housing => format!("H{code}"),
            _ => code.to_string(),
        };
        if book.knows_court(&key) {
            score += 1;
        }
    }
    if layout.seq_width > 0 {
        if let Some(seq) = fields.sequence.as_deref() {
            if seq.len() > layout.seq_width {
                score -= 1;
            }
        }
    }
    score
}

/// Court system whose dictionary scopes a layout's case-type codes. The trial
/// family shares one dictionary, so any trial member works as the key.
fn dictionary_system(layout: &DocketLayout) -> Option<CourtSystem> {
    match layout.family {
        catalog::Family::Trial | catalog::Family::Housing => Some(CourtSystem::District),
        catalog::Family::Land | catalog::Family::LandSbq => Some(CourtSystem::Land),
        catalog::Family::Probate => Some(CourtSystem::ProbateFamily),
        catalog::Family::Appeals
        | catalog::Family::Sjc
        | catalog::Family::SjcSingleJustice
        | catalog::Family::SjcBarDocket => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::tokenize;

    fn run(input: &str) -> Vec<Candidate> {
        match_candidates(&tokenize(input), CodeBook::standard(), &Options::default())
    }

    #[test]
    fn contiguous_trial_number_matches_only_the_standard_ordering() {
        let candidates = run("1577CV00982");
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.layout.name, "trial-court");
        assert_eq!(c.fields.year_digits.as_deref(), Some("15"));
        assert_eq!(c.fields.court_code.as_deref(), Some("77"));
        assert_eq!(c.fields.case_type.as_deref(), Some("CV"));
        assert_eq!(c.fields.sequence.as_deref(), Some("00982"));
    }

    #[test]
    fn delimited_variation_splits_the_leading_digit_run() {
        let candidates = run("1577-CV-00982");
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].fields.court_code.as_deref(), Some("77"));
    }

    #[test]
    fn land_and_trial_tie_on_a_court_code_less_tax_lien() {
        let candidates = run("07 TL 001026");
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].score, candidates[1].score);
        // Stable sort keeps catalog priority: Land Court first.
        assert_eq!(candidates[0].layout.name, "land-court");
        assert_eq!(candidates[1].layout.name, "trial-court");
    }

    #[test]
    fn dictionary_bonus_separates_land_from_trial_for_cv() {
        let candidates = run("15-CV-00982");
        assert!(candidates.len() >= 2);
        assert_eq!(candidates[0].layout.name, "trial-court");
        assert!(candidates[0].score > candidates[1].score);
    }

    #[test]
    fn sbq_literal_excludes_the_generic_land_layout() {
        let candidates = run("15 SBQ 00025 09-001");
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.layout.name, "land-court-sbq");
        assert_eq!(c.fields.plan.as_deref(), Some("00025"));
        assert_eq!(c.fields.month.as_deref(), Some("09"));
        assert_eq!(c.fields.sequence.as_deref(), Some("001"));
    }

    #[test]
    fn probate_standard_form_assigns_all_five_fields() {
        let candidates = run("es15A0064ad");
        assert_eq!(candidates.len(), 1);
        let c = &candidates[0];
        assert_eq!(c.layout.name, "probate-family");
        assert_eq!(c.fields.court_code.as_deref(), Some("ES"));
        assert_eq!(c.fields.case_group.as_deref(), Some("A"));
        assert_eq!(c.fields.sequence.as_deref(), Some("0064"));
        assert_eq!(c.fields.case_type.as_deref(), Some("AD"));
    }

    #[test]
    fn appeals_sitting_letter_is_constrained() {
        assert_eq!(run("2020-P-0874").len(), 1);
        assert_eq!(run("2020-J-0874").len(), 1);
        assert!(run("1000-K-1234").is_empty());
    }

    #[test]
    fn overlong_digit_runs_do_not_match() {
        assert!(run("123098120398213098123").is_empty());
        assert!(run("12").is_empty());
        assert!(run("").is_empty());
    }

    #[test]
    fn speculative_orderings_require_permissive_mode() {
        // CV15-00982 (case type first) follows observed logic but has never
        // been seen in a state filing.
        let tok = tokenize("CV15-00982");
        let strict = match_candidates(&tok, CodeBook::standard(), &Options::default());
        assert!(strict.is_empty());

        let permissive =
            match_candidates(&tok, CodeBook::standard(), &Options { permissive: true });
        assert!(!permissive.is_empty());
        assert_eq!(permissive[0].layout.name, "trial-court");
        assert_eq!(permissive[0].fields.case_type.as_deref(), Some("CV"));
        assert_eq!(permissive[0].fields.year_digits.as_deref(), Some("15"));
    }
}
