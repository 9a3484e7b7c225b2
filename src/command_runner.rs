//! External command execution abstraction.
//!
//! This module provides a trait for running external commands with captured
//! output, allowing for mock implementations in tests.

use anyhow::{Context, Result};
use std::process::Command;
use tracing::debug;

/// Captured output of one external command invocation.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Trait for running external commands.
///
/// This abstraction allows for mock implementations in tests.
pub trait CommandRunner {
    /// Run `program` with `args`, block until it exits, and capture
    /// stdout and stderr separately.
    fn run(&mut self, program: &str, args: &[&str]) -> Result<CommandOutput>;
}

/// Real implementation using `std::process`
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, program: &str, args: &[&str]) -> Result<CommandOutput> {
        debug!("Running {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("Failed to run {}", program))?;

        // Exit status is ignored: stderr does not invalidate stdout, and the
        // caller logs whatever lands on stderr.
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_stdout() {
        let out = ShellRunner.run("sh", &["-c", "printf hello"]).unwrap();
        assert_eq!(out.stdout, "hello");
        assert!(out.stderr.is_empty());
    }

    #[test]
    fn test_separates_streams() {
        let out = ShellRunner
            .run("sh", &["-c", "printf out; printf err >&2"])
            .unwrap();
        assert_eq!(out.stdout, "out");
        assert_eq!(out.stderr, "err");
    }

    #[test]
    fn test_ignores_exit_status() {
        let out = ShellRunner.run("sh", &["-c", "printf out; exit 3"]).unwrap();
        assert_eq!(out.stdout, "out");
    }

    #[test]
    fn test_missing_binary_is_an_error() {
        let result = ShellRunner.run("definitely-not-a-real-binary", &[]);
        assert!(result.is_err());
    }
}
