//! Canonical rendering.
//!
//! Each court system has exactly one canonical layout; rendering an
//! interpretation twice, or rendering and re-classifying, always lands on the
//! same string. Local notes are never part of the canonical form.
//!
//! Trial-court interpretations can only be rendered once the year, court code
//! and case type are all present; `render` returns `None` otherwise and the
//! caller reports the interpretation as still ambiguous.

use crate::api::{DocketNumber, Sitting};
use crate::api::CourtSystem::*;

/// Render the canonical docket string, or `None` when the interpretation is
/// too incomplete for its system's canonical layout.
pub(crate) fn render(docket: &DocketNumber) -> Option<String> {
    let seq = |width: usize| pad(docket.sequence.value, width);
    match docket.court_system {
        Superior => {
            let (year, code, case_type) = trial_parts(docket)?;
            Some(format!("{:02}{}{}{}", year % 100, code, case_type, seq(5)))
        }
        District | BostonMunicipal => {
            let (year, code, case_type) = trial_parts(docket)?;
            Some(format!("{:02}{}{}{}", year % 100, code, case_type, seq(6)))
        }
        Housing => {
            let (year, code, case_type) = trial_parts(docket)?;
            Some(format!("{:02}{}{}{}", year % 100, code, case_type, seq(6)))
        }
        Land => {
            let year = docket.filing_year?;
            let case_type = docket.case_type_code.as_deref()?;
            Some(format!("{:02} {} {}", year % 100, case_type, seq(6)))
        }
        LandSbq => {
            let year = docket.filing_year?;
            let plan = docket.plan_number.as_deref()?;
            let month = docket.filing_month?;
            Some(format!("{:02} SBQ {:0>5} {:02}-{}", year % 100, plan, month, seq(3)))
        }
        ProbateFamily => {
            let year = docket.filing_year?;
            let code = docket.court_code.as_deref()?;
            let case_type = docket.case_type_code.as_deref()?;
            let group = docket.case_group_code.as_deref().unwrap_or("");
            Some(format!("{}{:02}{}{}{}", code, year % 100, group, seq(4), case_type))
        }
        Appeals => {
            let year = docket.filing_year?;
            let letter = match docket.sitting? {
                Sitting::Panel => "P",
                Sitting::SingleJustice => "J",
                Sitting::BarDocket => return None,
            };
            Some(format!("{year}-{letter}-{}", seq(4)))
        }
        Sjc => Some(format!("SJC-{}", docket.sequence.value)),
        SjcSingleJustice => Some(format!("SJ-{}-{}", docket.filing_year?, seq(3))),
        SjcBarDocket => Some(format!("BD-{}-{}", docket.filing_year?, seq(3))),
    }
}

fn trial_parts(docket: &DocketNumber) -> Option<(u16, &str, &str)> {
    let year = docket.filing_year?;
    let code = docket.court_code.as_deref()?;
    let case_type = docket.case_type_code.as_deref()?;
    Some((year, code, case_type))
}

fn pad(value: u32, width: usize) -> String {
    format!("{value:0width$}")
}
