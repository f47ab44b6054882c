#[macro_use]
mod macros;
mod api;
mod catalog;
mod codes;
mod engine;
mod tokenize;

pub use api::{
    CandidateSummary, Classification, ClassifyDetails, Context, CourtSystem, DocketClassifier, DocketNumber, Options,
    SequenceNumber, Sitting, classify, classify_verbose_with, classify_with,
};
pub use codes::CodeBook;

// --- Internal types ---------------------------------------------------------

/// Separator seen immediately before a segment in the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sep {
    /// First segment, or the segment was contiguous with the previous one.
    None,
    Space,
    Hyphen,
}

/// Character class of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegClass {
    Digits,
    Letters,
}

/// A maximal run of same-class characters from the input, with the separator
/// that preceded it. `15H84CV000436` becomes five segments; `07 TL 001026`
/// becomes three.
#[derive(Debug, Clone)]
pub(crate) struct Segment {
    pub text: String,
    pub class: SegClass,
    pub sep_before: Sep,
}

impl Segment {
    pub fn len(&self) -> usize {
        self.text.len()
    }
}

/// Tokenizer output: ordered segments plus any trailing local-note codes that
/// were peeled off the end of the input.
#[derive(Debug, Clone)]
pub(crate) struct Tokenized {
    pub segments: Vec<Segment>,
    pub local_notes: Vec<String>,
}

/// Field slices assigned by the matcher, exactly as written in the input
/// (original widths and 2- vs 4-digit years preserved). Interpretation into a
/// `DocketNumber` happens during disambiguation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct FieldValues {
    pub year_digits: Option<String>,
    pub court_code: Option<String>,
    pub case_type: Option<String>,
    pub case_group: Option<String>,
    pub sequence: Option<String>,
    pub plan: Option<String>,
    pub month: Option<String>,
    /// Raw appellate sitting letter (`P` or `J`) for the Appeals Court layout.
    pub sitting_code: Option<String>,
}

/// One scored interpretation of the input against a single layout ordering.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub layout: &'static catalog::DocketLayout,
    /// Index into `layout.orderings` that produced this candidate.
    pub ordering: usize,
    pub fields: FieldValues,
    pub score: i32,
}
