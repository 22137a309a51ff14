//! External command execution.
//!
//! Runs the whois client and returns its stdout.

use crate::config::MAX_RESPONSE_BYTES;
use colored::Colorize;
use regex::Regex;
use std::process::Command;
use std::sync::OnceLock;
use thiserror::Error;

/// Regex for splitting command strings while preserving quoted substrings.
static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_command_regex() -> &'static Regex {
    COMMAND_REGEX.get_or_init(|| {
        Regex::new(r#"'([^']*)'\s*|\"([^\"]*)\"\s*|([^'\s]*)\s*"#).expect("Invalid Regex")
    })
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("failed to execute {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("exit status {code:?}: {stderr}")]
    Status { code: Option<i32>, stderr: String },
    #[error("response too large: {0} bytes")]
    TooLarge(usize),
    #[error("invalid UTF-8 in response: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Run `cmd` followed by `args` and return its stdout.
///
/// `cmd` is split on spaces with quoted substrings preserved, so it may
/// carry its own options (e.g. `"whois -p 4343"`). `args` are passed
/// through untouched.
pub fn run(cmd: &str, args: &[&str]) -> Result<String, CommandError> {
    let cmds: Vec<&str> = split_and_strip(cmd)
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect();
    let (program, cmd_args) = cmds.split_first().ok_or(CommandError::Empty)?;
    log::debug!("run({cmd}) args={args:?}", cmd = cmd.on_blue());

    let output = Command::new(program)
        .args(cmd_args)
        .args(args)
        .output()
        .map_err(|e| {
            log::error!("Command execution failed: {}", e);
            CommandError::Spawn {
                program: program.to_string(),
                source: e,
            }
        })?;

    if output.status.success() {
        log::debug!("Success output.stdout.len(): {}", output.stdout.len());
        if output.stdout.len() > MAX_RESPONSE_BYTES {
            return Err(CommandError::TooLarge(output.stdout.len()));
        }
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::trace!(
            "code={code:?}, status={status}\n┎######\nstderr=\n{stderr}\n┖######",
            code = output.status.code(),
            status = output.status,
            stderr = stderr.red()
        );
        log::warn!(
            "{failed} to run {cmd} {args:?}",
            failed = "failed".on_red(),
            cmd = cmd.on_blue()
        );
        return Err(CommandError::Status {
            code: output.status.code(),
            stderr,
        });
    }

    Ok(String::from_utf8(output.stdout)?)
}

/// Split a command string on spaces, preserving quoted substrings.
fn split_and_strip(input: &str) -> Vec<&str> {
    get_command_regex()
        .find_iter(input)
        .map(|m| m.as_str().trim().trim_matches('\'').trim_matches('"'))
        .collect()
}
