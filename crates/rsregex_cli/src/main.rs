//! rsre: Command-line front end for the rsregex pattern lexer.
//!
//! Usage:
//!   rsre [options] [pattern...]
//!
//! Tokenizes each pattern and prints its token stream, or the syntax error
//! that stopped it.

use clap::Parser as ClapParser;
use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use rayon::prelude::*;
use rsregex_core::RegexFlags;
use rsregex_diagnostics::{DiagnosticCollection, RegexSyntaxError};
use rsregex_lexer::{tokenize, Token};
use rsregex_options::{parse_config_file, RegexConfig, RegexOptions, RegexSource};
use std::path::Path;
use std::process;
use std::sync::Once;

const CONFIG_FILE_NAME: &str = "rsregex.json";

#[derive(ClapParser, Debug)]
#[command(name = "rsre", about = "rsre - An ECMAScript regular expression lexer", version)]
struct Cli {
    /// Patterns to tokenize, without surrounding slashes.
    #[arg(value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Flag letters, e.g. `iu`. Overrides the config file.
    #[arg(short = 'f', long)]
    flags: Option<String>,

    /// Path to an rsregex.json config file.
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Treat U+180E as whitespace in `\s` and `\S`.
    #[arg(long = "u180e-whitespace")]
    u180e_whitespace: bool,

    /// Create a default rsregex.json in the current directory.
    #[arg(long)]
    init: bool,

    /// Print only the number of tokens per pattern.
    #[arg(long)]
    count: bool,

    /// Render errors with source snippets, in color on a terminal.
    #[arg(long)]
    pretty: bool,
}

const RED: &str = "\x1b[91m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

static TRACING_INIT: Once = Once::new();

/// Install a tracing subscriber when `RUST_LOG` is set.
fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if cli.init {
        process::exit(run_init());
    }

    process::exit(run_lex(&cli));
}

/// A pattern together with where it came from.
struct Input {
    origin: String,
    source: RegexSource,
}

fn run_lex(cli: &Cli) -> i32 {
    let config = match cli.config {
        Some(ref path) => match parse_config_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                print_error(&format!("Failed to read config file '{}': {}", path, e));
                return 1;
            }
        },
        None => None,
    };

    let flags = match resolve_flags(cli, config.as_ref()) {
        Ok(flags) => flags,
        Err(msg) => {
            print_error(&msg);
            return 1;
        }
    };

    // CLI options override the config file
    let mut options = config
        .as_ref()
        .and_then(|cfg| cfg.options)
        .unwrap_or_default();
    if cli.u180e_whitespace {
        options.u180e_whitespace = true;
    }

    let inputs = collect_inputs(cli, config.as_ref(), flags, options);
    if inputs.is_empty() {
        print_error("No patterns given.");
        return 1;
    }
    tracing::debug!(count = inputs.len(), %flags, "tokenizing patterns");

    // Lexers share only read-only tables, so patterns are independent.
    let results: Vec<Result<Vec<Token>, RegexSyntaxError>> = inputs
        .par_iter()
        .map(|input| tokenize(&input.source))
        .collect();

    let use_color = atty_is_terminal();
    let mut diagnostics = DiagnosticCollection::new();
    for (input, result) in inputs.iter().zip(results) {
        match result {
            Ok(tokens) => print_tokens(input, &tokens, cli.count),
            Err(err) => {
                if cli.pretty {
                    eprint!("{}", render_report(&err, use_color));
                }
                diagnostics.add(err.to_diagnostic(input.origin.clone()));
            }
        }
    }

    if diagnostics.has_errors() {
        if !cli.pretty {
            for diag in diagnostics.iter() {
                eprintln!("{}", diag);
            }
        }
        let count = diagnostics.error_count();
        let plural = if count == 1 { "" } else { "s" };
        if use_color {
            eprintln!("\n{}Found {} error{}.{}", RED, count, plural, RESET);
        } else {
            eprintln!("\nFound {} error{}.", count, plural);
        }
        return 2;
    }
    0
}

fn resolve_flags(cli: &Cli, config: Option<&RegexConfig>) -> Result<RegexFlags, String> {
    if let Some(ref flags) = cli.flags {
        return RegexFlags::parse(flags).map_err(|e| format!("Invalid flags '{}': {}", flags, e));
    }
    match config {
        Some(cfg) => cfg
            .regex_flags()
            .map_err(|e| format!("Invalid flags in config file: {}", e)),
        None => Ok(RegexFlags::NONE),
    }
}

fn collect_inputs(
    cli: &Cli,
    config: Option<&RegexConfig>,
    flags: RegexFlags,
    options: RegexOptions,
) -> Vec<Input> {
    let from_args = cli
        .patterns
        .iter()
        .enumerate()
        .map(|(i, pattern)| (format!("args[{}]", i), pattern));
    let config_name = cli.config.as_deref().unwrap_or(CONFIG_FILE_NAME);
    let from_config = config
        .and_then(|cfg| cfg.patterns.as_ref())
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, pattern)| (format!("{}[{}]", config_name, i), pattern));

    from_args
        .chain(from_config)
        .map(|(origin, pattern)| Input {
            origin,
            source: RegexSource::new(pattern, flags).with_options(options),
        })
        .collect()
}

fn print_tokens(input: &Input, tokens: &[Token], count_only: bool) {
    let source = &input.source;
    if count_only {
        println!("/{}/{}: {}", source.pattern_text(), source.flags(), tokens.len());
        return;
    }
    println!("/{}/{}", source.pattern_text(), source.flags());
    for token in tokens {
        println!("  {}", token);
    }
}

/// A syntax error prepared for graphical rendering.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("RE{code}: {message}")]
struct PatternReport {
    code: u32,
    message: String,
    #[source_code]
    source_code: NamedSource<String>,
    #[label("here")]
    span: SourceSpan,
}

/// Render a syntax error with its source snippet. The theme only decides
/// whether colors are used.
fn render_report(err: &RegexSyntaxError, use_color: bool) -> String {
    // The snippet is `/pattern/flags`, so offsets shift by the leading slash.
    let snippet = format!("/{}/{}", err.pattern, err.flags);
    let range = err.span.to_byte_range(&err.pattern);
    let report = PatternReport {
        code: err.code,
        message: err.message_text.clone(),
        source_code: NamedSource::new("pattern", snippet),
        span: (range.start + 1, range.len()).into(),
    };
    let theme = if use_color {
        GraphicalTheme::unicode()
    } else {
        GraphicalTheme::unicode_nocolor()
    };
    let mut rendered = String::new();
    match GraphicalReportHandler::new_themed(theme).render_report(&mut rendered, &report) {
        Ok(()) => rendered,
        Err(_) => format!("{}\n", err),
    }
}

fn run_init() -> i32 {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_error("An rsregex.json file already exists in the current directory.");
        return 1;
    }

    let default_config = r#"{
  "flags": "u",
  "options": {
    "u180eWhitespace": false
  },
  "patterns": []
}
"#;

    match std::fs::write(config_path, default_config) {
        Ok(()) => {
            println!("Successfully created an rsregex.json file.");
            0
        }
        Err(e) => {
            print_error(&format!("Failed to create rsregex.json: {}", e));
            1
        }
    }
}

fn print_error(msg: &str) {
    if atty_is_terminal() {
        eprintln!("{}{}error{}: {}", BOLD, RED, RESET, msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

fn atty_is_terminal() -> bool {
    // On Unix, check whether stderr is a terminal
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}
