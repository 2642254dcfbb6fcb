mod debug_report;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use remindtime::{Context, OracleResponse, draft_reminder, explain};
use std::io::{self, IsTerminal, Read};

const TZ_ENV: &str = "REMINDTIME_TZ";
const DEFAULT_TZ: &str = "UTC";

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let context = match config.reference {
        Some(local) => match Context::at_local(local, config.tz) {
            Some(ctx) => ctx,
            None => {
                eprintln!("error: --reference is out of range for {}", config.tz);
                std::process::exit(2);
            }
        },
        None => Context::now(config.tz),
    };

    let ok = match &config.mode {
        Mode::Token(token) => run_token(token, &context, &config),
        Mode::Oracle(payload) => run_oracle(payload, &context, &config),
    };

    if !ok {
        std::process::exit(1);
    }
}

fn run_token(token: &str, context: &Context, config: &CliConfig) -> bool {
    let explanation = explain(token, context);
    if config.json {
        let body = match &explanation.result {
            Ok(resolved) => serde_json::json!({
                "token": explanation.trace.normalized,
                "rule": resolved.pattern.name(),
                "due": resolved.iso8601(),
            }),
            Err(err) => serde_json::json!({
                "token": explanation.trace.normalized,
                "error": err.to_string(),
            }),
        };
        println!("{body}");
    } else {
        debug_report::print_explanation(&explanation, config.color);
    }
    explanation.result.is_ok()
}

fn run_oracle(payload: &str, context: &Context, config: &CliConfig) -> bool {
    let response = match OracleResponse::from_json(payload) {
        Ok(response) => response,
        Err(err) => {
            eprintln!("error: invalid oracle payload: {err}");
            std::process::exit(2);
        }
    };

    let draft = draft_reminder(response, context);
    if config.json {
        let body = match &draft {
            Ok(draft) => serde_json::to_value(draft).unwrap_or_default(),
            Err(code) => serde_json::json!({ "error": code, "message": code.to_string() }),
        };
        println!("{body}");
    } else {
        debug_report::print_draft(&draft, &context.reference_time, config.color);
    }
    draft.is_ok()
}

enum Mode {
    Token(String),
    Oracle(String),
}

struct CliConfig {
    mode: Mode,
    reference: Option<NaiveDateTime>,
    tz: Tz,
    color: bool,
    json: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut oracle: Option<String> = None;
    let mut reference: Option<NaiveDateTime> = None;
    let mut tz_name: Option<String> = None;
    let mut color = io::stdout().is_terminal();
    let mut json = false;
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("remindtime {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference = Some(parse_reference(&value)?);
            }
            "--tz" => {
                tz_name = Some(args.next().ok_or_else(|| "error: --tz expects a value".to_string())?);
            }
            "--oracle" => {
                let value = args.next().ok_or_else(|| "error: --oracle expects a value".to_string())?;
                oracle = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    set_once(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with("--reference=") => {
                reference = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ if arg.starts_with("--tz=") => {
                tz_name = Some(arg.trim_start_matches("--tz=").to_string());
            }
            _ if arg.starts_with("--oracle=") => {
                oracle = Some(arg.trim_start_matches("--oracle=").to_string());
            }
            // A leading '-' followed by a digit is a negative offset ("-01:00"), not an option.
            _ if arg.starts_with('-') && !arg[1..].starts_with(|c: char| c.is_ascii_digit()) => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                set_once(&mut input, rest)?;
                break;
            }
        }
    }

    let tz = resolve_timezone(tz_name)?;

    let mode = match (oracle, input) {
        (Some(_), Some(_)) => return Err("error: pass either a token or --oracle, not both".to_string()),
        (Some(payload), None) => Mode::Oracle(payload),
        (None, Some(token)) => Mode::Token(token),
        (None, None) => Mode::Token(read_stdin_input()?),
    };

    if let Mode::Token(token) = &mode {
        if token.trim().is_empty() {
            return Err(format!("error: no input provided\n\n{}", help_text()));
        }
    }

    Ok(CliConfig { mode, reference, tz, color, json })
}

fn set_once(slot: &mut Option<String>, value: String) -> Result<(), String> {
    if slot.is_some() {
        return Err("error: input provided multiple times".to_string());
    }
    *slot = Some(value);
    Ok(())
}

/// `--tz`, then `$REMINDTIME_TZ`, then UTC.
fn resolve_timezone(flag: Option<String>) -> Result<Tz, String> {
    let name = flag.or_else(|| std::env::var(TZ_ENV).ok()).unwrap_or_else(|| DEFAULT_TZ.to_string());
    name.parse::<Tz>()
        .map_err(|_| format!("error: unknown timezone '{name}' (expected an IANA name such as Europe/Berlin)"))
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

fn parse_reference(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| format!("error: invalid --reference '{value}' (expected YYYY-MM-DDTHH:MM:SS)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "remindtime {version}

Resolve reminder time patterns against a reference clock.

Usage:
  remindtime [OPTIONS] [--] <pattern...>
  remindtime [OPTIONS] --oracle <json>

Patterns:
  +HH:MM  -HH:MM  HH:MM  HH
  today|tomorrow|day-after-tomorrow|overmorrow HH[:MM]   day after tomorrow HH[:MM]
  in-N-days HH[:MM]   in-one-week HH[:MM]
  <weekday> HH[:MM]   in-one-week <weekday> HH[:MM]   in-N-weeks <weekday> HH[:MM]

Options:
  --oracle <json>            Draft a reminder from an extractor payload, e.g.
                             '{{\"activity\":\"call mom\",\"timePattern\":\"+02:00\"}}'.
  --reference <timestamp>    Local reference time in YYYY-MM-DDTHH:MM:SS.
                             Default: the current time.
  --tz <zone>                IANA timezone of the reference clock.
                             Default: ${tz_env}, then {default_tz}.
  --json                     Print a single JSON object instead of a report.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  {tz_env}               Default timezone when --tz is absent.
  REMINDTIME_DEBUG_RULES=1   Trace rule matching and resolution to stderr.

Exit codes:
  0  Resolved.
  1  The pattern could not be resolved (unrecognized, invalid, or in the past).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        tz_env = TZ_ENV,
        default_tz = DEFAULT_TZ,
    )
}
