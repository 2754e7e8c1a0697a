use crate::RuntimeError;
use std::process::Command;

/// Captured result of one fully-awaited external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Stdout followed by stderr, for error reporting.
    pub fn combined(&self) -> String {
        let mut out = self.stdout.clone();
        if !self.stderr.is_empty() {
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            out.push_str(&self.stderr);
        }
        out
    }
}

/// Narrow seam over process spawning. The pipeline never touches
/// `std::process` directly, so tests substitute a scripted runner.
pub trait CommandRunner: Send + Sync {
    fn name(&self) -> &str;

    /// Launch the command and await it to completion, capturing both
    /// output streams.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RuntimeError>;
}

/// Runs commands on the host, one at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostRunner;

impl HostRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for HostRunner {
    fn name(&self) -> &'static str {
        "host"
    }

    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, RuntimeError> {
        tracing::debug!("running {program} {}", args.join(" "));
        let output = Command::new(program).args(args).output()?;
        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
