//! Per-court-system code dictionaries.
//!
//! Docket numbers embed short codes whose meaning depends on which court
//! system issued them: `AD` is an Appeal in BMC and District Court but an
//! Adoption in Probate & Family Court. The dictionaries are therefore keyed by
//! `(CourtSystem, code)` through [`CodeBook`] lookups, never merged into one
//! flat mapping.
//!
//! A `CodeBook` is read-only after construction and safe to share across
//! threads. [`CodeBook::standard`] returns the built-in dictionaries; a
//! jurisdiction-data collaborator can construct its own and hand it to
//! [`crate::DocketClassifier::new`] at startup.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::api::CourtSystem;

/// Case-type codes shared by the trial courts that use numeric court codes
/// (Superior, District, BMC) plus Housing. Land Court codes are listed here
/// too because filings sometimes drop the court code and the overlap is what
/// makes those inputs ambiguous.
static TRIAL_CASE_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AC", "Application for Criminal Complaint"),
        ("AD", "Appeal"),
        ("BP", "Bail Petition"),
        ("CI", "Civil Infraction"),
        ("CR", "Criminal"),
        ("CV", "Civil"),
        ("IC", "Interstate Compact"),
        ("IN", "Inquest"),
        ("MH", "Mental Health"),
        ("MV", "Motor Vehicle"),
        ("PC", "Probable Cause"),
        ("RO", "Abuse Prevention Order"),
        ("SC", "Small Claims"),
        ("SP", "Supplementary Process"),
        ("SU", "Summary Process"),
        ("SW", "Administrative Search Warrant"),
        ("TK", "Ticket Hearings"),
        ("PS", "Permit Session"),
        ("SM", "Service Members"),
        ("TL", "Tax Lien"),
        ("REG", "Registration"),
        ("SBQ", "Subsequent"),
        ("MISC", "Miscellaneous"),
    ])
});

/// Land Court case-type codes, kept separate so a court-code-less input can be
/// recognized as a Land Court filing rather than a trial-court filing that
/// merely dropped its court code.
static LAND_CASE_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("PS", "Permit Session"),
        ("SM", "Service Members"),
        ("TL", "Tax Lien"),
        ("REG", "Registration"),
        ("SBQ", "Subsequent"),
        ("MISC", "Miscellaneous"),
    ])
});

static PROBATE_CASE_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AB", "Protection from Abuse"),
        ("AD", "Adoption"),
        ("CA", "Change of Name"),
        ("CS", "Custody, Support, and Parenting Time"),
        ("CW", "Child Welfare"),
        ("DO", "Domestic Relations, Other"),
        ("DR", "Domestic Relations"),
        ("EA", "Estates and Administration"),
        ("GD", "Guardianship"),
        ("JP", "Joint Petition"),
        ("PE", "Paternity in Equity"),
        ("PM", "Probate Abuse / Conservator"),
        ("PO", "Probate, Other"),
        ("PP", "Equity-Partition"),
        ("QC", "Equity Complaint"),
        ("QP", "Equity Petition"),
        ("SK", "Wills for Safekeeping"),
        ("WD", "Paternity"),
        ("XY", "Proxy Guardianship"),
    ])
});

/// Single-letter Probate & Family case-group codes.
static PROBATE_CASE_GROUPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("A", "Adoption"),
        ("C", "Change of Name"),
        ("D", "Domestic Relations"),
        ("E", "Equity"),
        ("W", "Paternity"),
        ("P", "Probate"),
        ("R", "Protection from Abuse"),
        ("X", "Proxy Guardianship"),
        ("S", "Wills for Safekeeping"),
    ])
});

/// Court codes as they appear inside docket numbers: two digits for BMC,
/// District, and Superior Courts, `H` plus two digits for Housing Courts, two
/// letters for Probate & Family Courts.
static COURT_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("01", "Boston Municipal Court (BMC) Central"),
        ("02", "Boston Municipal Court (BMC) Roxbury"),
        ("03", "Boston Municipal Court (BMC) South Boston"),
        ("04", "Boston Municipal Court (BMC) Charlestown"),
        ("05", "Boston Municipal Court (BMC) East Boston"),
        ("06", "Boston Municipal Court (BMC) West Roxbury"),
        ("07", "Boston Municipal Court (BMC) Dorchester"),
        ("08", "Boston Municipal Court (BMC) Brighton"),
        ("09", "Brookline District Court"),
        ("10", "Somerville District Court"),
        ("11", "Lowell District Court"),
        ("12", "Newton District Court"),
        ("13", "Lynn District Court"),
        ("14", "Chelsea District Court"),
        ("15", "Brockton District Court"),
        ("16", "Fitchburg District Court"),
        ("17", "Holyoke District Court"),
        ("18", "Lawrence District Court"),
        ("20", "Chicopee District Court"),
        ("21", "Marlboro District Court"),
        ("22", "Newburyport District Court"),
        ("23", "Springfield District Court"),
        ("25", "Barnstable District Court"),
        ("26", "Orleans District Court"),
        ("27", "Pittsfield District Court"),
        ("28", "Northern Berkshire District Court"),
        ("29", "Southern Berkshire District Court"),
        ("31", "Taunton District Court"),
        ("32", "Fall River District Court"),
        ("33", "New Bedford District Court"),
        ("34", "Attleboro District Court"),
        ("35", "Edgartown District Court"),
        ("36", "Salem District Court"),
        ("38", "Haverhill District Court"),
        ("39", "Gloucester District Court"),
        ("40", "Ipswich District Court"),
        ("41", "Greenfield District Court"),
        ("42", "Orange District Court"),
        ("43", "Palmer District Court"),
        ("44", "Westfield District Court"),
        ("45", "Northampton District Court"),
        ("47", "Concord District Court"),
        ("48", "Ayer District Court"),
        ("49", "Framingham District Court"),
        ("50", "Malden District Court"),
        ("51", "Waltham District Court"),
        ("52", "Cambridge District Court"),
        ("53", "Woburn District Court"),
        ("54", "Dedham District Court"),
        ("55", "Stoughton District Court"),
        ("56", "Quincy District Court"),
        ("57", "Wrentham District Court"),
        ("58", "Hingham District Court"),
        ("59", "Plymouth District Court"),
        ("60", "Wareham District Court"),
        ("61", "Leominster District Court"),
        ("62", "Worcester District Court"),
        ("63", "Gardner District Court"),
        ("64", "Dudley District Court"),
        ("65", "Uxbridge District Court"),
        ("66", "Milford District Court"),
        ("67", "Westborough District Court"),
        ("68", "Clinton District Court"),
        ("69", "East Brookfield District Court"),
        ("70", "Winchendon District Court"),
        ("72", "Barnstable County Superior Court"),
        ("73", "Bristol County Superior Court"),
        ("74", "Dukes County Superior Court"),
        ("75", "Nantucket County Superior Court"),
        ("76", "Berkshire County Superior Court"),
        ("77", "Essex County Superior Court"),
        ("78", "Franklin County Superior Court"),
        ("79", "Hampden County Superior Court"),
        ("80", "Hampshire County Superior Court"),
        ("81", "Middlesex County Superior Court"),
        ("82", "Norfolk County Superior Court"),
        ("83", "Plymouth County Superior Court"),
        ("84", "Suffolk County Superior Court"),
        ("85", "Worcester County Superior Court"),
        ("86", "Peabody District Court"),
        ("87", "Natick District Court"),
        ("88", "Nantucket District Court"),
        ("89", "Falmouth District Court"),
        ("98", "Eastern Hampshire District Court"),
        ("H77", "Northeast Housing Court"),
        ("H79", "Springfield Housing Court"),
        ("H83", "Southeast Housing Court"),
        ("H84", "Boston Housing Court"),
        ("H85", "Worcester Housing Court"),
        ("ES", "Essex Probate and Family Court"),
        ("BA", "Barnstable Probate and Family Court"),
        ("BE", "Berkshire Probate and Family Court"),
        ("BR", "Bristol Probate and Family Court"),
        ("DU", "Dukes Probate and Family Court"),
        ("FR", "Franklin Probate and Family Court"),
        ("HD", "Hampden Probate and Family Court"),
        ("HS", "Hampshire Probate and Family Court"),
        ("MI", "Middlesex Probate and Family Court"),
        ("NA", "Nantucket Probate and Family Court"),
        ("NO", "Norfolk Probate and Family Court"),
        ("PL", "Plymouth Probate and Family Court"),
        ("SU", "Suffolk Probate and Family Court"),
        ("WO", "Worcester Probate and Family Court"),
    ])
});

static APPELLATE_CODES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("P", "Appeals Court"),
        ("J", "Appeals Court (Single Justice)"),
        ("SJC", "Supreme Judicial Court"),
        ("SJ", "Supreme Judicial Court (Single Justice)"),
        ("BD", "Supreme Judicial Court (Bar Docket)"),
    ])
});

/// The dictionary set for one deployment. Lookups are scoped by court system;
/// nothing here is a global code-to-meaning table.
#[derive(Debug, Clone)]
pub struct CodeBook {
    trial_case_types: HashMap<&'static str, &'static str>,
    land_case_types: HashMap<&'static str, &'static str>,
    probate_case_types: HashMap<&'static str, &'static str>,
    probate_case_groups: HashMap<&'static str, &'static str>,
    court_names: HashMap<&'static str, &'static str>,
    appellate_codes: HashMap<&'static str, &'static str>,
}

static STANDARD: Lazy<CodeBook> = Lazy::new(|| CodeBook {
    trial_case_types: TRIAL_CASE_TYPES.clone(),
    land_case_types: LAND_CASE_TYPES.clone(),
    probate_case_types: PROBATE_CASE_TYPES.clone(),
    probate_case_groups: PROBATE_CASE_GROUPS.clone(),
    court_names: COURT_NAMES.clone(),
    appellate_codes: APPELLATE_CODES.clone(),
});

impl CodeBook {
    /// The built-in statewide dictionaries.
    pub fn standard() -> &'static CodeBook {
        &STANDARD
    }

    /// Meaning of a case-type code within `system`, or `None` if the code is
    /// not in that system's dictionary. Appellate dockets carry no case-type
    /// code; their sitting code is resolved through [`CodeBook::sitting_meaning`].
    pub fn case_type_meaning(&self, system: CourtSystem, code: &str) -> Option<&'static str> {
        match system {
            CourtSystem::ProbateFamily => self.probate_case_types.get(code).copied(),
            CourtSystem::Land | CourtSystem::LandSbq => self.land_case_types.get(code).copied(),
            CourtSystem::Superior | CourtSystem::District | CourtSystem::BostonMunicipal | CourtSystem::Housing => {
                self.trial_case_types.get(code).copied()
            }
            CourtSystem::Appeals
            | CourtSystem::Sjc
            | CourtSystem::SjcSingleJustice
            | CourtSystem::SjcBarDocket => None,
        }
    }

    /// Meaning of a Probate & Family case-group letter. Only Probate & Family
    /// dockets carry a case-group code.
    pub fn case_group_meaning(&self, system: CourtSystem, code: &str) -> Option<&'static str> {
        match system {
            CourtSystem::ProbateFamily => self.probate_case_groups.get(code).copied(),
            _ => None,
        }
    }

    /// Human name for a court code as written in a docket number (`77`,
    /// `H84`, `ES`, ...).
    pub fn court_name(&self, code: &str) -> Option<&'static str> {
        self.court_names.get(code).copied()
    }

    /// Meaning of an appellate sitting/docket code (`P`, `J`, `SJC`, `SJ`, `BD`).
    pub fn sitting_meaning(&self, code: &str) -> Option<&'static str> {
        self.appellate_codes.get(code).copied()
    }

    /// Whether `code` names a known court at all.
    pub fn knows_court(&self, code: &str) -> bool {
        self.court_names.contains_key(code)
    }

    /// Resolve a two-digit trial-court code to its family. BMC divisions are
    /// 01-08, Superior Courts 72-85, every other known numeric code is a
    /// District Court. Unknown codes resolve to `None`.
    pub fn trial_family(&self, code: &str) -> Option<CourtSystem> {
        if !code.bytes().all(|b| b.is_ascii_digit()) || !self.court_names.contains_key(code) {
            return None;
        }
        let name = self.court_names[code];
        if name.contains("Boston Municipal") {
            Some(CourtSystem::BostonMunicipal)
        } else if name.contains("Superior") {
            Some(CourtSystem::Superior)
        } else {
            Some(CourtSystem::District)
        }
    }
}

/// Expected case-group letter for a Probate & Family case-type code, where the
/// pairing is evident from the two dictionaries. The relationship is not
/// confirmed by any authoritative source, so a mismatch is advisory only.
pub(crate) fn expected_probate_group(case_type: &str) -> Option<&'static str> {
    match case_type {
        "AD" => Some("A"),
        "CA" => Some("C"),
        "AB" => Some("R"),
        "XY" => Some("X"),
        "SK" => Some("S"),
        "WD" | "PE" => Some("W"),
        "DR" | "DO" | "CS" | "JP" => Some("D"),
        "EA" | "GD" | "PM" | "PO" => Some("P"),
        "QC" | "QP" | "PP" => Some("E"),
        _ => None,
    }
}
