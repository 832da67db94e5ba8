use std::process::Command;

use anyhow::Context as _;
use lapse_core::{Resolution, Stopwatch};

use crate::exit_codes::ExitCode;

/// Runs the command under a stopwatch and reports the rendered elapsed
/// time on stderr, so it composes with the child's own stdout.
pub fn run(resolution: Resolution, command: &[String]) -> anyhow::Result<i32> {
    let (program, args) = command.split_first().context("no command given")?;

    let sw = Stopwatch::new();
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("failed to run '{program}'"))?;
    sw.stop();

    eprintln!("elapsed: {}", sw.format_elapsed(resolution));

    // A None exit code means the child was killed by a signal.
    Ok(status.code().unwrap_or(ExitCode::RuntimeError.as_i32()))
}
