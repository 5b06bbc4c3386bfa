//! Purpose: `jsonvet` CLI entry point and command dispatch glue.
//! Role: Binary crate root; parses args, runs commands, prints verdicts.
//! Invariants: Verdict output is stable per command (human on tty, JSON with --json).
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
#![allow(clippy::result_large_err)]
use std::error::Error as StdError;
use std::ffi::OsString;
use std::io::{self, BufRead, IsTerminal};
use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum, ValueHint,
    error::ErrorKind as ClapErrorKind,
};
use clap_complete::aot::Shell;
use serde_json::{Map, Value, json};
use tracing_subscriber::EnvFilter;

mod command_dispatch;

use jsonvet::api::{
    CheckReport, CheckStatus, Error, ErrorKind, read_concatenated, to_exit_code, validate,
};

#[derive(Copy, Clone, Debug)]
struct RunOutcome {
    exit_code: i32,
}

impl RunOutcome {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }

    fn with_code(exit_code: i32) -> Self {
        Self { exit_code }
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(outcome) => outcome.exit_code,
        Err((err, color_mode)) => {
            emit_error(&err, color_mode);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<RunOutcome, (Error, ColorMode)> {
    let cli = match Cli::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    (
                        Error::new(ErrorKind::Io)
                            .with_message("failed to write help")
                            .with_source(io_err),
                        ColorMode::Auto,
                    )
                })?;
                let exit_code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(RunOutcome::with_code(exit_code));
            }
            _ => {
                return Err((
                    Error::new(ErrorKind::Usage).with_message(clap_error_summary(&err)),
                    ColorMode::Auto,
                ));
            }
        },
    };

    let color_mode = cli.color;
    let result = command_dispatch::dispatch_command(cli.command);

    result
        .map_err(add_io_hint)
        .map_err(|err| (err, color_mode))
}

fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let replacement = arg.to_str().and_then(|value| match value {
                "---help" => Some("--help"),
                "---version" => Some("--version"),
                _ => None,
            });
            replacement.map(OsString::from).unwrap_or_else(|| arg)
        })
        .collect()
}

fn clap_error_summary(err: &clap::Error) -> String {
    err.to_string()
        .lines()
        .next()
        .unwrap_or("invalid arguments")
        .trim_start_matches("error: ")
        .to_string()
}

#[derive(Parser)]
#[command(
    name = "jsonvet",
    version,
    about = "Yes/no JSON well-formedness checks",
    help_template = r#"{about-with-newline}
{before-help}USAGE
  {usage}

COMMANDS
{subcommands}

OPTIONS
{options}

{after-help}
"#,
    long_about = None,
    before_help = r#"Answers one question per input: is this well-formed JSON?
No value tree is built and no error positions are reported.

Mental model:
  - `check` reads files (or stdin) and prints one verdict per input
  - exit 0 means every input was valid JSON
"#,
    after_help = r#"EXAMPLES
  $ jsonvet check config.json
  $ jsonvet check a.json b.json --json
  $ curl -s https://api.example.com/state | jsonvet check -

LEARN MORE
  $ jsonvet <command> --help
  https://github.com/sandover/jsonvet"#,
    arg_required_else_help = true,
    disable_help_subcommand = false
)]
struct Cli {
    #[arg(
        long,
        default_value = "auto",
        value_enum,
        help = "Colorize stderr diagnostics: auto|always|never"
    )]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn use_color(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(
        arg_required_else_help = true,
        about = "Check inputs for JSON well-formedness",
        long_about = r#"Validate each input and print one verdict per input.

Inputs are file paths; use - to read stdin once. Line terminators are
discarded while reading, so multi-line files validate as one string."#,
        after_help = r#"EXAMPLES
  $ jsonvet check config.json
  $ jsonvet check --json a.json b.json
  $ echo '{"a":"b"}' | jsonvet check -

NOTES
  - Human-readable output is the default.
  - Use --json for machine-readable output.
  - Best effort: checks all inputs and reports per-input failures.
  - Exits non-zero when any input is invalid or unreadable."#
    )]
    Check {
        #[arg(
            required = true,
            help = "Input file path(s); use - for stdin",
            value_hint = ValueHint::FilePath
        )]
        inputs: Vec<String>,
        #[arg(long, help = "Emit JSON instead of human-readable output")]
        json: bool,
    },
    #[command(
        about = "Print version info as JSON",
        long_about = r#"Emit version info as JSON (stable, machine-readable)."#,
        after_help = r#"EXAMPLES
  $ jsonvet version"#
    )]
    Version,
    #[command(
        arg_required_else_help = true,
        about = "Generate shell completions",
        long_about = r#"Generate shell completion scripts.

Prints a completion script for the given shell to stdout.
Install the generated file in your shell's completion directory (or source it)
to enable tab completion."#,
        after_help = r#"EXAMPLES
  $ jsonvet completion bash > ~/.local/share/bash-completion/completions/jsonvet
  $ jsonvet completion zsh > ~/.zfunc/_jsonvet
  $ jsonvet completion fish > ~/.config/fish/completions/jsonvet.fish"#
    )]
    Completion {
        #[arg(help = "Shell to generate completions for")]
        shell: Shell,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn check_file(input: &str) -> Result<CheckReport, Error> {
    let path = PathBuf::from(input);
    let content = read_concatenated(&path)?;
    Ok(CheckReport::new(input, verdict(&content)).with_path(path))
}

fn check_stdin() -> Result<CheckReport, Error> {
    let mut content = String::new();
    for line in io::stdin().lock().lines() {
        let line = line.map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read stdin")
                .with_source(err)
        })?;
        content.push_str(&line);
    }
    Ok(CheckReport::new("-", verdict(&content)))
}

fn verdict(content: &str) -> CheckStatus {
    if validate(content) {
        CheckStatus::Valid
    } else {
        CheckStatus::Invalid
    }
}

fn emit_check_human(reports: &[CheckReport], failed: &[(String, Error)]) {
    let is_tty = io::stdout().is_terminal();
    let total = reports.len() + failed.len();
    let not_valid = reports.iter().filter(|report| !report.is_valid()).count() + failed.len();

    if is_tty && total > 1 {
        if not_valid == 0 {
            println!("All {total} inputs valid.");
        } else {
            println!("{not_valid} of {total} inputs not valid.");
        }
        println!();
    }

    for report in reports {
        let label = &report.input;
        match (report.status, is_tty) {
            (CheckStatus::Valid, true) => println!("  ✓ {label}"),
            (CheckStatus::Invalid, true) => println!("  ✗ {label}"),
            (CheckStatus::Valid, false) => println!("OK: {label}"),
            (CheckStatus::Invalid, false) => println!("INVALID: {label}"),
        }
    }
    for (input, err) in failed {
        let detail = err.message().unwrap_or("error");
        if is_tty {
            println!("  ✗ {input} ({detail})");
        } else {
            println!("ERR: {input} ({detail})");
        }
    }
}

fn add_io_hint(err: Error) -> Error {
    if err.hint().is_some() {
        return err;
    }
    match err.kind() {
        ErrorKind::NotFound => err.with_hint("Input file not found. Check the path."),
        ErrorKind::Permission => err.with_hint(
            "Permission denied. Check file permissions or run from a readable location.",
        ),
        ErrorKind::Io => err.with_hint("I/O error. Check the path, filesystem, and encoding."),
        _ => err,
    }
}

fn emit_version_output() {
    if io::stdout().is_terminal() {
        println!("jsonvet {}", env!("CARGO_PKG_VERSION"));
    } else {
        emit_json(json!({
            "name": "jsonvet",
            "version": env!("CARGO_PKG_VERSION"),
        }));
    }
}

fn emit_json(value: Value) {
    let json = if io::stdout().is_terminal() {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
    .unwrap_or_else(|_| "{\"error\":\"json encode failed\"}".to_string());
    println!("{json}");
}

#[derive(Copy, Clone, Debug)]
enum AnsiColor {
    Red,
    Yellow,
}

fn colorize_label(label: &str, enabled: bool, color: AnsiColor) -> String {
    if !enabled {
        return label.to_string();
    }
    let code = match color {
        AnsiColor::Red => "31",
        AnsiColor::Yellow => "33",
    };
    format!("\u{1b}[{code}m{label}\u{1b}[0m")
}

fn emit_error(err: &Error, color_mode: ColorMode) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        eprintln!("{}", error_text(err, color_mode.use_color(is_tty)));
        return;
    }

    let value = error_json(err);
    let json = serde_json::to_string(&value).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_message(err: &Error) -> String {
    if let Some(message) = err.message() {
        return message.to_string();
    }
    match err.kind() {
        ErrorKind::Internal => "internal error".to_string(),
        ErrorKind::Usage => "usage error".to_string(),
        ErrorKind::Invalid => "invalid json".to_string(),
        ErrorKind::NotFound => "not found".to_string(),
        ErrorKind::Permission => "permission denied".to_string(),
        ErrorKind::Io => "i/o error".to_string(),
    }
}

fn error_causes(err: &Error) -> Vec<String> {
    let mut causes = Vec::new();
    let mut cur = err.source();
    while let Some(source) = cur {
        causes.push(source.to_string());
        cur = source.source();
    }
    causes
}

fn error_json(err: &Error) -> Value {
    let mut inner = Map::new();
    inner.insert("kind".to_string(), json!(format!("{:?}", err.kind())));
    inner.insert("message".to_string(), json!(error_message(err)));
    if let Some(hint) = err.hint() {
        inner.insert("hint".to_string(), json!(hint));
    }
    if let Some(path) = err.path() {
        inner.insert("path".to_string(), json!(path.display().to_string()));
    }
    let causes = error_causes(err);
    if !causes.is_empty() {
        inner.insert("causes".to_string(), json!(causes));
    }

    let mut outer = Map::new();
    outer.insert("error".to_string(), Value::Object(inner));
    Value::Object(outer)
}

fn error_text(err: &Error, use_color: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{} {}",
        colorize_label("error:", use_color, AnsiColor::Red),
        error_message(err)
    ));

    if let Some(hint) = err.hint() {
        lines.push(format!(
            "{} {hint}",
            colorize_label("hint:", use_color, AnsiColor::Yellow)
        ));
    }
    if let Some(path) = err.path() {
        lines.push(format!(
            "{} {}",
            colorize_label("path:", use_color, AnsiColor::Yellow),
            path.display()
        ));
    }
    lines.join("\n")
}
