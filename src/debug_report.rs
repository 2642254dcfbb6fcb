use chrono::DateTime;
use chrono_tz::Tz;
use remindtime::{Attempt, ExtractionCode, Explanation, ReminderDraft, ResolveError};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
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

pub fn print_explanation(ex: &Explanation, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⏰ Pattern: \"{}\"", ex.token.trim()), ansi::CYAN)));
    print_reference(&ex.reference_time, &palette);

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    let normalized = format!("\"{}\"", ex.trace.normalized);
    println!("  {} {}", palette.dim("normalized:"), palette.paint(normalized, ansi::YELLOW));
    println!("  {} {:?}", palette.dim("features:"), ex.trace.buckets);
    for attempt in &ex.trace.attempts {
        let mark = match attempt.outcome {
            Attempt::Matched => palette.paint("✓ matched", ansi::GREEN),
            Attempt::Missed => palette.dim("✗ missed"),
            Attempt::Gated => palette.dim("· gated"),
        };
        println!("  {:<11} {}", mark, palette.paint(attempt.rule, ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &ex.result {
        Ok(resolved) => {
            println!(
                "  {} {} {}",
                palette.bold(palette.paint(resolved.iso8601(), ansi::GREEN)),
                palette.dim("│"),
                palette.paint(resolved.pattern.name(), ansi::CYAN)
            );
            println!("  {} {}", palette.dim("utc:"), resolved.utc().to_rfc3339());
        }
        Err(err) => {
            println!("  {}", palette.paint(err.to_string(), ansi::RED));
            if let ResolveError::Unrecognized(_) = err {
                println!("\n{}", palette.paint("Possible reasons:", ansi::YELLOW));
                println!("  • The token is not one of the supported forms (see --help)");
                println!("  • Words are joined with '-' in multi-word forms (in-3-days, in-one-week)");
                println!("\n{}", palette.dim("  Tip: Set REMINDTIME_DEBUG_RULES=1 to see rule matching details"));
            }
        }
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!("  Total: {}", palette.paint(format!("{:?}", ex.elapsed), ansi::GREEN));
    println!();
}

pub fn print_draft(draft: &Result<ReminderDraft, ExtractionCode>, reference: &DateTime<Tz>, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint("⏰ Reminder draft", ansi::CYAN)));
    print_reference(reference, &palette);

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match draft {
        Ok(draft) => {
            println!("  {} {}", palette.dim("activity:"), palette.bold(&draft.activity));
            println!("  {} {}", palette.dim("due:     "), palette.paint(&draft.due, ansi::GREEN));
            println!("  {} {}", palette.dim("rule:    "), palette.paint(draft.rule, ansi::BLUE));
        }
        Err(code) => {
            let label =
                serde_json::to_value(code).ok().and_then(|v| v.as_str().map(str::to_string)).unwrap_or_default();
            println!("  {} {}", palette.paint(label, ansi::RED), palette.dim(code.to_string()));
        }
    }
    println!();
}

fn print_reference(reference: &DateTime<Tz>, palette: &ansi::Palette) {
    println!(
        "  {} {} {}",
        palette.dim("reference:"),
        palette.paint(reference.to_rfc3339(), ansi::YELLOW),
        palette.dim(format!("({})", reference.timezone()))
    );
}
