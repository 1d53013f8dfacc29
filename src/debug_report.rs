use datehint::{Context, DateValue, ParsedDate, SuggestionMode, VerboseSuggestions};

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

pub fn print_run(res: &VerboseSuggestions, context: &Context, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;

    println!("\n{}", palette.bold(palette.paint(format!("⚙  Input: \"{}\"", res.text), ansi::CYAN)));
    println!("  {} {}", palette.dim("reference:"), palette.paint(context.reference_time.to_string(), ansi::YELLOW));

    println!("\n{}", palette.paint("━━━ Parse ━━━", ansi::GRAY));
    if details.parsed.is_empty() {
        println!("{}", palette.dim("  Empty input, nothing parsed"));
    }
    for (idx, parsed) in details.parsed.iter().enumerate() {
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.paint(parsed.kind().as_str(), ansi::BLUE),
            palette.dim("│"),
            palette.paint(format!("confidence {:.2}", parsed.confidence), ansi::YELLOW),
        );
        println!("      {}", palette.dim(describe(parsed)));
    }
    println!(
        "  {} {}",
        palette.dim("active:"),
        palette.paint(if details.active_recognizers.is_empty() { "-".to_string() } else { details.active_recognizers.join(", ") }, ansi::CYAN)
    );
    println!(
        "  {} {}",
        palette.dim("matched:"),
        palette.paint(if details.matched.is_empty() { "-".to_string() } else { details.matched.join(", ") }, ansi::CYAN)
    );

    let mode = match details.mode {
        SuggestionMode::Parsed => "parsed",
        SuggestionMode::Partial => "partial completion",
    };
    println!("\n{} {}", palette.paint("━━━ Suggestions ━━━", ansi::GRAY), palette.dim(format!("({mode})")));
    if res.suggestions.is_empty() {
        println!("{}", palette.dim("  No suggestions"));
    }
    for (idx, suggestion) in res.suggestions.iter().enumerate() {
        println!(
            "  {} {} {} {} {}",
            palette.paint(format!("[{}]", idx), ansi::GRAY),
            palette.bold(palette.paint(&suggestion.text, ansi::GREEN)),
            palette.dim("│"),
            palette.paint(suggestion.date.format("%Y-%m-%d %H:%M").to_string(), ansi::YELLOW),
            palette.dim(format!("p={:.3}", suggestion.probability)),
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Parse: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.parse)),
    );
    println!();
}

fn describe(parsed: &ParsedDate) -> String {
    match &parsed.value {
        DateValue::Partial(text) => format!("\"{text}\""),
        other => format!("{other:?}"),
    }
}
