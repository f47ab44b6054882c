use madocket::{Classification, ClassifyDetails, DocketNumber};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(input: &str, classification: &Classification, details: &ClassifyDetails, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚖  Classifying: \"{}\"", input), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Matching ━━━", ansi::GRAY));
    print_matching(details, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match classification {
        Classification::Normalized { docket, canonical } => {
            println!("  {}", palette.bold(palette.paint(canonical, ansi::GREEN)));
            print_docket(docket, &palette);
        }
        Classification::Ambiguous(interpretations) => {
            println!(
                "  {}",
                palette.paint(format!("Ambiguous across {} interpretations", interpretations.len()), ansi::YELLOW)
            );
            for docket in interpretations {
                print_docket(docket, &palette);
            }
            println!("\n{}", palette.dim("  Tip: pass --court-code / --case-type if the court is known"));
        }
        Classification::Unknown => {
            println!("  {}", palette.dim("Not a recognizable Massachusetts docket number"));
            println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
            println!("  • No layout's gate fired (check identifying literals)");
            println!("  • Field widths did not fit any ordering");
            println!("  • A code resolved to no known court");
            println!("\n{}", palette.dim("  Tip: Set MADOCKET_DEBUG=1 to see gating and scoring details"));
        }
    }

    if !details.local_notes.is_empty() {
        println!(
            "\n  {} {}",
            palette.dim("local notes:"),
            palette.paint(details.local_notes.join(", "), ansi::YELLOW)
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", details.total), ansi::GREEN));
    println!();
}

fn print_matching(details: &ClassifyDetails, palette: &ansi::Palette) {
    if details.active_layouts.is_empty() {
        println!("  {}", palette.dim("No layout gates fired"));
        return;
    }
    println!(
        "  {} {}",
        palette.paint("Active layouts:", ansi::BLUE),
        palette.paint(details.active_layouts.join(", "), ansi::CYAN)
    );
    if details.candidates.is_empty() {
        println!("  {}", palette.dim("✗ no candidates"));
    }
    for (idx, candidate) in details.candidates.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(&candidate.layout, ansi::BLUE),
            palette.dim(format!("ordering {}", candidate.ordering)),
            palette.paint(format!("score {}", candidate.score), ansi::GREEN),
        );
    }
}

fn print_docket(docket: &DocketNumber, palette: &ansi::Palette) {
    let court = docket.court_name.clone().unwrap_or_else(|| format!("{:?}", docket.court_system));
    println!("      {} {}", palette.dim("court:"), palette.paint(court, ansi::BLUE));
    let mut parts: Vec<String> = Vec::new();
    if let Some(year) = docket.filing_year {
        parts.push(format!("year {year}"));
    }
    if let Some(code) = &docket.court_code {
        parts.push(format!("code {code}"));
    }
    if let Some(case_type) = &docket.case_type_code {
        parts.push(format!("type {case_type}"));
    }
    if let Some(group) = &docket.case_group_code {
        parts.push(format!("group {group}"));
    }
    parts.push(format!("seq {}", docket.sequence.value));
    if let Some(plan) = &docket.plan_number {
        parts.push(format!("plan {plan}"));
    }
    if let Some(month) = docket.filing_month {
        parts.push(format!("month {month}"));
    }
    if let Some(sitting) = docket.sitting {
        parts.push(format!("sitting {sitting:?}"));
    }
    println!("      {} {}", palette.dim("fields:"), palette.paint(parts.join("  "), ansi::CYAN));
    if !docket.code_valid {
        println!("      {}", palette.paint("⚠ codes not found in the dictionaries", ansi::YELLOW));
    }
}
