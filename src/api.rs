use crate::codes::CodeBook;
use crate::engine::{disambiguate, matcher};
use crate::tokenize;
use chrono::{Local, NaiveDate};
use std::time::{Duration, Instant};

/// Classification context.
///
/// This holds the environment needed to interpret a docket deterministically:
/// the reference date anchors 2-digit year expansion, and the optional hints
/// let an interview flow that already knows the court or case type recover
/// abbreviated filings like `15-0982`.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date used to expand 2-digit filing years.
    pub reference_date: NaiveDate,
    /// Court code the caller already knows (e.g. `"77"` for Essex Superior).
    pub court_code: Option<String>,
    /// Case-type code the caller already knows (e.g. `"CV"`).
    pub case_type: Option<String>,
}

impl Default for Context {
    fn default() -> Self {
        let reference_date = if cfg!(test) {
            NaiveDate::from_ymd_opt(2025, 8, 30).unwrap()
        } else {
            Local::now().date_naive()
        };
        Self { reference_date, court_code: None, case_type: None }
    }
}

/// Options that affect matching behavior.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Also try field orderings that are plausible but have never been
    /// observed on a real filing. Off by default.
    pub permissive: bool,
}

/// Massachusetts court systems that issue docket numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourtSystem {
    Superior,
    District,
    BostonMunicipal,
    Housing,
    Land,
    /// Land Court subsequent-to-registration cases (`SBQ` dockets).
    LandSbq,
    ProbateFamily,
    Appeals,
    Sjc,
    SjcSingleJustice,
    SjcBarDocket,
}

/// How an appellate docket was heard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sitting {
    Panel,
    SingleJustice,
    BarDocket,
}

/// A sequence number together with the width it carries in the canonical
/// form, so `00982` and `982` compare equal but render faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceNumber {
    pub value: u32,
    pub width: u8,
}

/// One fully interpreted docket number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocketNumber {
    pub court_system: CourtSystem,
    /// Human-readable court or sitting name, when the code book knows it.
    pub court_name: Option<String>,
    /// Absent only for SJC full-bench dockets, which carry no year.
    pub filing_year: Option<u16>,
    /// Numeric trial-court code, `H`-prefixed housing code, or two-letter
    /// probate county code. Absent where the system has none.
    pub court_code: Option<String>,
    pub case_type_code: Option<String>,
    /// Probate & Family case-group letter.
    pub case_group_code: Option<String>,
    pub sequence: SequenceNumber,
    /// Land Court SBQ plan number.
    pub plan_number: Option<String>,
    /// Land Court SBQ filing month.
    pub filing_month: Option<u8>,
    pub sitting: Option<Sitting>,
    /// Trailing track designations peeled off the input, in original order.
    pub local_notes: Vec<String>,
    /// Whether every code on this docket is known to the dictionaries and
    /// internally consistent. Advisory only; a `false` here never changes
    /// the classification.
    pub code_valid: bool,
    /// Match score of the winning candidate.
    pub confidence: i32,
}

/// Result of classifying one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Exactly one interpretation, with its canonical rendering.
    Normalized { docket: DocketNumber, canonical: String },
    /// Structurally valid but not reducible to one canonical form. Usually
    /// several court systems tie; it can also hold exactly one
    /// interpretation whose canonical layout needs a field the input lacks
    /// (`1577-00982` resolves to Superior but has no case type). Either way
    /// the caller can ask for more context and retry with hints.
    Ambiguous(Vec<DocketNumber>),
    /// Not a recognizable Massachusetts docket number.
    Unknown,
}

/// A compact candidate summary used in verbose output.
#[derive(Debug, Clone)]
pub struct CandidateSummary {
    /// Catalog name of the layout that matched.
    pub layout: String,
    /// Which of the layout's field orderings matched.
    pub ordering: usize,
    pub score: i32,
}

/// Additional details returned by [`classify_verbose_with`].
///
/// Compact by design: enough for the CLI report and for layout debugging
/// without dumping matcher internals.
#[derive(Debug, Clone)]
pub struct ClassifyDetails {
    /// Total elapsed time.
    pub total: Duration,
    /// Local-note codes peeled off the input before matching.
    pub local_notes: Vec<String>,
    /// Names of layouts whose gates passed for this input.
    pub active_layouts: Vec<String>,
    /// Every scored candidate, best first.
    pub candidates: Vec<CandidateSummary>,
}

/// Classifier facade binding a [`CodeBook`] to the matching pipeline.
///
/// The free functions below use the standard book; construct this directly
/// only to classify against a different set of dictionaries.
#[derive(Debug, Clone, Copy)]
pub struct DocketClassifier<'a> {
    book: &'a CodeBook,
}

impl DocketClassifier<'static> {
    /// Classifier over the standard Massachusetts code book.
    pub fn standard() -> Self {
        Self { book: CodeBook::standard() }
    }
}

impl<'a> DocketClassifier<'a> {
    pub fn new(book: &'a CodeBook) -> Self {
        Self { book }
    }

    pub fn classify(&self, input: &str, context: &Context, options: &Options) -> Classification {
        let tok = tokenize::tokenize(input);
        let candidates = matcher::match_candidates(&tok, self.book, options);
        disambiguate::disambiguate(&candidates, &tok.local_notes, context, self.book)
    }

    /// Classify and also return the matcher trace for this input.
    pub fn classify_verbose(
        &self,
        input: &str,
        context: &Context,
        options: &Options,
    ) -> (Classification, ClassifyDetails) {
        let started = Instant::now();
        let tok = tokenize::tokenize(input);
        let active_layouts =
            matcher::active_layout_names(&tok).into_iter().map(str::to_string).collect();
        let candidates = matcher::match_candidates(&tok, self.book, options);
        let summaries = candidates
            .iter()
            .map(|c| CandidateSummary {
                layout: c.layout.name.to_string(),
                ordering: c.ordering,
                score: c.score,
            })
            .collect();
        let classification =
            disambiguate::disambiguate(&candidates, &tok.local_notes, context, self.book);
        let details = ClassifyDetails {
            total: started.elapsed(),
            local_notes: tok.local_notes,
            active_layouts,
            candidates: summaries,
        };
        (classification, details)
    }
}

/// Classify `input` using the standard code book and a default [`Context`].
///
/// # Example
/// ```
/// use madocket::{classify, Classification};
///
/// match classify("1577CV00982") {
///     Classification::Normalized { canonical, .. } => assert_eq!(canonical, "1577CV00982"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn classify(input: &str) -> Classification {
    classify_with(input, &Context::default(), &Options::default())
}

/// Classify `input` using the standard code book and the provided
/// `context`/`options`.
///
/// Use this when you want deterministic year expansion by supplying a
/// reference date, or when the caller already knows the court.
pub fn classify_with(input: &str, context: &Context, options: &Options) -> Classification {
    DocketClassifier::standard().classify(input, context, options)
}

/// Classify `input` and return extra (compact) debug details.
///
/// This is useful for layout debugging. The plain [`classify_with`] path does
/// not allocate these extra traces.
pub fn classify_verbose_with(
    input: &str,
    context: &Context,
    options: &Options,
) -> (Classification, ClassifyDetails) {
    DocketClassifier::standard().classify_verbose(input, context, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canonical(input: &str) -> String {
        match classify(input) {
            Classification::Normalized { canonical, .. } => canonical,
            other => panic!("{input:?} did not normalize: {other:?}"),
        }
    }

    fn normalized(input: &str) -> DocketNumber {
        match classify(input) {
            Classification::Normalized { docket, .. } => docket,
            other => panic!("{input:?} did not normalize: {other:?}"),
        }
    }

    #[test]
    fn canonical_forms_are_fixed_points() {
        for input in [
            "1577CV00982",
            "1670CV000072",
            "1401CV001026",
            "15H84CV000436",
            "07 TL 001026",
            "15 SBQ 00025 09-001",
            "ES15A0064AD",
            "2020-P-0874",
            "SJC-13103",
            "SJ-2023-101",
            "BD-2021-034",
        ] {
            assert_eq!(canonical(input), input, "canonical form must classify to itself");
        }
    }

    #[test]
    fn classification_of_a_canonical_form_is_idempotent() {
        let once = canonical("es15A0064ad");
        assert_eq!(canonical(&once), once);
    }

    #[test]
    fn trial_court_families_split_by_court_code() {
        assert_eq!(normalized("1577CV00982").court_system, CourtSystem::Superior);
        assert_eq!(normalized("1670CV000072").court_system, CourtSystem::District);
        assert_eq!(normalized("1401CV001026").court_system, CourtSystem::BostonMunicipal);
        assert_eq!(normalized("15H84CV000436").court_system, CourtSystem::Housing);
    }

    #[test]
    fn court_names_come_from_the_code_book() {
        assert_eq!(normalized("1577CV00982").court_name.as_deref(), Some("Essex County Superior Court"));
        assert_eq!(normalized("ES15A0064AD").court_name.as_deref(), Some("Essex Probate and Family Court"));
        assert_eq!(normalized("07 TL 001026").court_name.as_deref(), Some("Land Court"));
    }

    #[test]
    fn delimited_variation_converges_without_any_context() {
        assert_eq!(canonical("1577-CV-00982"), "1577CV00982");
    }

    #[test]
    fn variations_converge_once_context_is_supplied() {
        let ctx = Context {
            court_code: Some("77".to_string()),
            case_type: Some("CV".to_string()),
            ..Context::default()
        };
        let opts = Options::default();
        for input in ["15-CV-00982", "2015-982", "2015-00982", "15-0982"] {
            match classify_with(input, &ctx, &opts) {
                Classification::Normalized { canonical, .. } => {
                    assert_eq!(canonical, "1577CV00982", "for input {input:?}");
                }
                other => panic!("{input:?} did not converge: {other:?}"),
            }
        }
    }

    #[test]
    fn resolved_court_without_a_case_type_is_a_single_element_ambiguity() {
        // Court code 77 pins Superior, but the canonical form needs a case
        // type the input never carried.
        match classify("1577-00982") {
            Classification::Ambiguous(interpretations) => {
                assert_eq!(interpretations.len(), 1);
                let d = &interpretations[0];
                assert_eq!(d.court_system, CourtSystem::Superior);
                assert_eq!(d.court_code.as_deref(), Some("77"));
                assert_eq!(d.filing_year, Some(2015));
                assert_eq!(d.case_type_code, None);
            }
            other => panic!("expected Ambiguous, got {other:?}"),
        }

        let ctx = Context { case_type: Some("cv".to_string()), ..Context::default() };
        match classify_with("1577-00982", &ctx, &Options::default()) {
            Classification::Normalized { canonical, .. } => assert_eq!(canonical, "1577CV00982"),
            other => panic!("expected Normalized, got {other:?}"),
        }
    }

    #[test]
    fn variations_without_context_stay_ambiguous() {
        for input in ["15-CV-00982", "15-0982"] {
            match classify(input) {
                Classification::Ambiguous(ds) => {
                    assert!(ds.len() > 1, "for input {input:?}");
                }
                other => panic!("{input:?}: {other:?}"),
            }
        }
    }

    #[test]
    fn local_notes_are_isolated_from_matching() {
        let plain = normalized("1577CV00982");
        let noted = normalized("1577CV00982-BLS");
        assert_eq!(noted.local_notes, vec!["BLS".to_string()]);
        assert_eq!(noted.court_system, plain.court_system);
        assert_eq!(noted.sequence, plain.sequence);
        match classify("1577CV00982-BLS") {
            Classification::Normalized { canonical, .. } => assert_eq!(canonical, "1577CV00982"),
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn unknown_codes_classify_with_the_advisory_flag_cleared() {
        let d = normalized("ES00A0000XY");
        assert_eq!(d.court_system, CourtSystem::ProbateFamily);
        assert!(!d.code_valid);
        assert!(normalized("ES15A0064AD").code_valid);
    }

    #[test]
    fn unclassifiable_inputs_are_unknown_never_errors() {
        for input in ["", "   ", "12", "hello world", "9999CV00000", "1000-K-1234", "123456789012345678901"] {
            assert_eq!(classify(input), Classification::Unknown, "for input {input:?}");
        }
    }

    #[test]
    fn case_is_ignored_on_letters() {
        assert_eq!(canonical("1577cv00982"), "1577CV00982");
        assert_eq!(canonical("es15a0064ad"), "ES15A0064AD");
        assert_eq!(canonical("sjc-13103"), "SJC-13103");
        assert_eq!(canonical("15 sbq 00025 09-001"), "15 SBQ 00025 09-001");
    }

    #[test]
    fn appellate_details_are_typed() {
        let d = normalized("2020-P-0874");
        assert_eq!(d.sitting, Some(Sitting::Panel));
        assert_eq!(d.filing_year, Some(2020));
        let d = normalized("2020-J-0061");
        assert_eq!(d.sitting, Some(Sitting::SingleJustice));
        let d = normalized("SJC-13103");
        assert_eq!(d.filing_year, None);
        assert_eq!(d.sitting, Some(Sitting::Panel));
    }

    #[test]
    fn verbose_classification_reports_the_match_trace() {
        let (classification, details) =
            classify_verbose_with("1577CV00982", &Context::default(), &Options::default());
        assert!(matches!(classification, Classification::Normalized { .. }));
        assert!(!details.active_layouts.is_empty());
        assert_eq!(details.candidates.first().map(|c| c.layout.as_str()), Some("trial-court"));
        assert!(details.total >= Duration::ZERO);
    }
}
