//! Purpose: Hold top-level CLI command dispatch for `jsonvet`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Command behavior, output envelopes, and exit code semantics stay unchanged.
//! Invariants: Helpers in `main.rs` remain the source of output rendering.

use super::*;

pub(super) fn dispatch_command(command: Command) -> Result<RunOutcome, Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "jsonvet", &mut io::stdout());
            Ok(RunOutcome::ok())
        }
        Command::Version => {
            emit_version_output();
            Ok(RunOutcome::ok())
        }
        Command::Check { inputs, json } => {
            let mut reports = Vec::new();
            let mut failed = Vec::new();
            let mut first_error_kind = None;
            let mut stdin_used = false;

            for input in inputs {
                let result = if input == "-" {
                    if stdin_used {
                        Err(Error::new(ErrorKind::Usage)
                            .with_message("stdin can only be checked once")
                            .with_hint("Pass - a single time."))
                    } else {
                        stdin_used = true;
                        check_stdin()
                    }
                } else {
                    check_file(&input)
                };

                match result {
                    Ok(report) => reports.push(report),
                    Err(err) => {
                        if first_error_kind.is_none() {
                            first_error_kind = Some(err.kind());
                        }
                        failed.push((input, err));
                    }
                }
            }

            if json {
                let failures = failed
                    .iter()
                    .map(|(input, err)| {
                        json!({
                            "input": input,
                            "error": error_json(err)["error"].clone(),
                        })
                    })
                    .collect::<Vec<_>>();
                emit_json(json!({ "reports": reports, "failed": failures }));
            } else {
                emit_check_human(&reports, &failed);
            }

            if let Some(kind) = first_error_kind {
                Ok(RunOutcome::with_code(to_exit_code(kind)))
            } else if reports.iter().any(|report| !report.is_valid()) {
                Ok(RunOutcome::with_code(to_exit_code(ErrorKind::Invalid)))
            } else {
                Ok(RunOutcome::ok())
            }
        }
    }
}
