//! Input normalization.
//!
//! The tokenizer never fails: any string becomes an ordered list of
//! same-class segments plus the local-note codes peeled off the end. An input
//! with no recognizable separators is a single segment (or a few, split at
//! digit/letter boundaries), left for the matcher to slice.
//!
//! Local notes are court-added suffixes like the Superior Court track
//! designations (`-A`, `-F`, `-X`) or session markers (`BLS`). They are not
//! part of the docket identity, so they are stripped here and reported
//! separately.

use crate::{SegClass, Segment, Sep, Tokenized};

/// Track/session codes that may trail a docket number. Matched only against
/// all-uppercase separator-delimited trailing tokens; a lowercase `a` or a
/// digits tail is never a note.
const LOCAL_NOTES: &[&str] = &["A", "F", "X", "BLS"];

fn is_local_note(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|c| c.is_ascii_uppercase())
        && LOCAL_NOTES.contains(&token)
}

/// Split `input` into segments and trailing local notes.
pub(crate) fn tokenize(input: &str) -> Tokenized {
    let mut body = input.trim();
    let mut local_notes: Vec<String> = Vec::new();

    // Peel trailing note tokens right to left, then restore reading order.
    loop {
        let Some(pos) = body.rfind([' ', '\t', '-']) else { break };
        let tail = &body[pos + 1..];
        let head = body[..pos].trim_end_matches([' ', '\t', '-']);
        if head.is_empty() || !is_local_note(tail) {
            break;
        }
        local_notes.push(tail.to_string());
        body = head;
    }
    local_notes.reverse();

    let mut segments: Vec<Segment> = Vec::new();
    let mut last_end = 0usize;
    for m in regex!(r"[0-9]+|[A-Za-z]+").find_iter(body) {
        let gap = &body[last_end..m.start()];
        let sep_before = if segments.is_empty() || gap.is_empty() {
            Sep::None
        } else if gap.contains('-') {
            Sep::Hyphen
        } else {
            Sep::Space
        };
        let class =
            if m.as_str().as_bytes()[0].is_ascii_digit() { SegClass::Digits } else { SegClass::Letters };
        segments.push(Segment { text: m.as_str().to_string(), class, sep_before });
        last_end = m.end();
    }

    Tokenized { segments, local_notes }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tok: &Tokenized) -> Vec<&str> {
        tok.segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn contiguous_input_splits_at_class_boundaries() {
        let tok = tokenize("1577CV00982");
        assert_eq!(texts(&tok), vec!["1577", "CV", "00982"]);
        assert!(tok.local_notes.is_empty());
        assert_eq!(tok.segments[0].sep_before, Sep::None);
        assert_eq!(tok.segments[1].sep_before, Sep::None);
    }

    #[test]
    fn housing_number_keeps_the_h_as_its_own_segment() {
        let tok = tokenize("15H84CV000436");
        assert_eq!(texts(&tok), vec!["15", "H", "84", "CV", "000436"]);
    }

    #[test]
    fn separators_are_recorded_but_collapsed() {
        let tok = tokenize("15 SBQ 00025 09-001");
        assert_eq!(texts(&tok), vec!["15", "SBQ", "00025", "09", "001"]);
        assert_eq!(tok.segments[1].sep_before, Sep::Space);
        assert_eq!(tok.segments[4].sep_before, Sep::Hyphen);

        let tok = tokenize("1577 -- CV  00982");
        assert_eq!(texts(&tok), vec!["1577", "CV", "00982"]);
        assert_eq!(tok.segments[1].sep_before, Sep::Hyphen);
        assert_eq!(tok.segments[2].sep_before, Sep::Space);
    }

    #[test]
    fn trailing_track_designations_become_local_notes() {
        let tok = tokenize("1577CV00982-A");
        assert_eq!(texts(&tok), vec!["1577", "CV", "00982"]);
        assert_eq!(tok.local_notes, vec!["A"]);

        let tok = tokenize("1577CV00982 BLS-F");
        assert_eq!(texts(&tok), vec!["1577", "CV", "00982"]);
        assert_eq!(tok.local_notes, vec!["BLS", "F"]);
    }

    #[test]
    fn lowercase_or_leading_tokens_are_not_notes() {
        // A lowercase trailing token stays in the body.
        let tok = tokenize("1577CV00982-a");
        assert_eq!(texts(&tok), vec!["1577", "CV", "00982", "a"]);
        assert!(tok.local_notes.is_empty());

        // A bare note-looking input is not reduced to nothing.
        let tok = tokenize("BLS");
        assert_eq!(texts(&tok), vec!["BLS"]);
        assert!(tok.local_notes.is_empty());
    }

    #[test]
    fn tokenizing_never_fails() {
        assert!(tokenize("").segments.is_empty());
        assert!(tokenize("  - - ").segments.is_empty());
        let tok = tokenize("not-a-docket");
        assert_eq!(texts(&tok), vec!["not", "a", "docket"]);
    }
}
