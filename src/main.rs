mod debug_report;

use clap::Parser;
use datehint::{Context, Options, suggest_verbose_with};
use std::io::{self, IsTerminal, Read};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Natural-language date suggestions for a single input.
#[derive(Debug, Parser)]
#[command(name = "datehint", version, about)]
struct Cli {
    /// Input text. If omitted (and no --input), reads stdin.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,

    /// Input text to parse.
    #[arg(short, long, conflicts_with = "words")]
    input: Option<String>,

    /// Reference time in YYYY-MM-DDTHH:MM:SS. Default: local now.
    #[arg(long)]
    reference: Option<String>,

    /// chrono format string for explicit dates.
    #[arg(long)]
    date_format: Option<String>,

    /// Show at most this many suggestions.
    #[arg(short = 'n', long)]
    limit: Option<usize>,

    /// Force ANSI color output.
    #[arg(long, overrides_with = "no_color")]
    color: bool,

    /// Disable ANSI color output.
    #[arg(long)]
    no_color: bool,

    /// Log parser/engine activity to stderr (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let context = match cli.reference.as_deref() {
        Some(value) => match Context::from_reference_str(value) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        },
        None => Context::default(),
    };

    let input = match resolve_input(&cli) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let mut options = Options::default();
    if let Some(format) = cli.date_format.clone() {
        options.date_format = format;
    }

    let color = if cli.no_color { false } else { cli.color || io::stdout().is_terminal() };

    let mut res = suggest_verbose_with(&input, &context, &options);
    if let Some(limit) = cli.limit {
        res.suggestions.truncate(limit);
    }
    debug_report::print_run(&res, &context, color);
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::OFF,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    if level == LevelFilter::OFF {
        return;
    }
    let filter = EnvFilter::builder().with_default_directive(level.into()).from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).init();
}

fn resolve_input(cli: &Cli) -> Result<String, String> {
    let input = match (&cli.input, cli.words.is_empty()) {
        (Some(value), _) => value.clone(),
        (None, false) => cli.words.join(" "),
        (None, true) => read_stdin_input()?,
    };
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}
