mod debug_report;

use chrono::NaiveDate;
use madocket::{Context, Options, classify_verbose_with};
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context {
        reference_date: config.reference_date,
        court_code: config.court_code,
        case_type: config.case_type,
    };
    let opts = Options { permissive: config.permissive };
    let (classification, details) = classify_verbose_with(&config.input, &ctx, &opts);
    debug_report::print_run(&config.input, &classification, &details, config.color);
}

struct CliConfig {
    input: String,
    reference_date: NaiveDate,
    court_code: Option<String>,
    case_type: Option<String>,
    permissive: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut reference_date: Option<NaiveDate> = None;
    let mut court_code: Option<String> = None;
    let mut case_type: Option<String> = None;
    let mut permissive = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("madocket {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--permissive" => permissive = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference_date = Some(parse_reference(&value)?);
            }
            "--court-code" => {
                let value = args.next().ok_or_else(|| "error: --court-code expects a value".to_string())?;
                court_code = Some(value);
            }
            "--case-type" => {
                let value = args.next().ok_or_else(|| "error: --case-type expects a value".to_string())?;
                case_type = Some(value);
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                let value = arg.trim_start_matches("--reference=");
                reference_date = Some(parse_reference(value)?);
            }
            _ if arg.starts_with("--court-code=") => {
                court_code = Some(arg.trim_start_matches("--court-code=").to_string());
            }
            _ if arg.starts_with("--case-type=") => {
                case_type = Some(arg.trim_start_matches("--case-type=").to_string());
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    let reference_date = match reference_date {
        Some(date) => date,
        None => Context::default().reference_date,
    };

    Ok(CliConfig { input, reference_date, court_code, case_type, permissive, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "madocket {version}

Massachusetts court docket-number classifier CLI.

Usage:
  madocket [OPTIONS] [--] <docket...>
  madocket [OPTIONS] --input <text>

Options:
  -i, --input <text>       Docket number to classify. If omitted, reads remaining
                           args or stdin when no args are provided.
  --reference <date>       Reference date for 2-digit year expansion, YYYY-MM-DD.
                           Default: today.
  --court-code <code>      Court the docket is known to come from (e.g. 77).
  --case-type <code>       Case type the docket is known to carry (e.g. CV).
  --permissive             Also try plausible but never-observed field orderings.
  --color                  Force ANSI color output.
  --no-color               Disable ANSI color output.
  -h, --help               Show this help message.
  -V, --version            Print version information.

Exit codes:
  0  Success.
  1  Internal error.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
