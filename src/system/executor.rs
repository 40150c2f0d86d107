// EN: src/system/executor.rs

//! Sequential, blocking command execution.

use crate::models::{CommandOutput, ShellCommand};
use crate::system::networksetup::NetworkConfigurator;
use std::path::Path;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

/// Failure of one spawned command.
#[derive(Error, Debug)]
pub enum ExecutionError {
    /// The process could not be started.
    #[error("Command '{0}' could not be executed: {1}")]
    CommandFailed(String, std::io::Error),
    /// The process ran and reported failure.
    #[error("Command '{command}' exited with {}.", describe_exit(.code))]
    NonZeroExitStatus {
        /// Rendered command line.
        command: String,
        /// `None` when terminated by a signal.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// What the executor does after a command fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionPolicy {
    /// Keep issuing the remaining commands and report every result.
    #[default]
    ContinueOnFailure,
    /// Stop after the first failed command.
    StopOnFailure,
}

/// The outcome of one command.
#[derive(Debug)]
#[allow(missing_docs)]
pub struct ExecutionResult {
    pub command: ShellCommand,
    pub outcome: Result<CommandOutput, ExecutionError>,
}

impl ExecutionResult {
    /// Whether the command exited successfully.
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs each command in order, blocking until it exits.
///
/// Commands run one after another because later ones depend on state set by
/// earlier ones (DNS overrides only make sense after the DHCP switch). With
/// [`ExecutionPolicy::ContinueOnFailure`] a failing command does not stop the
/// sequence and interpreting failures is left to the caller.
pub fn execute(
    commands: &[ShellCommand],
    configurator: &dyn NetworkConfigurator,
    policy: ExecutionPolicy,
) -> Vec<ExecutionResult> {
    let mut results = Vec::with_capacity(commands.len());

    for command in commands {
        log::debug!("Executing: {}", command);
        let outcome = configurator.run_config_command(&command.to_argv());
        if let Err(e) = &outcome {
            log::warn!("{}", e);
        }
        let failed = outcome.is_err();
        results.push(ExecutionResult {
            command: command.clone(),
            outcome,
        });

        if failed && policy == ExecutionPolicy::StopOnFailure {
            log::info!(
                "Stopping after failure; {} command(s) not issued.",
                commands.len() - results.len()
            );
            break;
        }
    }

    results
}

/// Runs `program` with `args`, waits for it to exit and captures both streams.
///
/// There is no timeout: a hung process blocks the caller.
/// A non-zero exit is returned as `NonZeroExitStatus` carrying the captured stderr.
pub fn run_captured(program: &Path, args: &[String]) -> Result<CommandOutput, ExecutionError> {
    let display = render_command_line(program, args);

    let output = StdCommand::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ExecutionError::CommandFailed(display.clone(), e))?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(ExecutionError::NonZeroExitStatus {
            command: display,
            code: output.status.code(),
            stderr,
        });
    }

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout,
        stderr,
    })
}

/// Shell-quoted rendering of a command line, for messages only.
fn render_command_line(program: &Path, args: &[String]) -> String {
    let program = program.to_string_lossy();
    let words = std::iter::once(program.as_ref()).chain(args.iter().map(String::as_str));
    shlex::try_join(words).unwrap_or_else(|_| {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    })
}
