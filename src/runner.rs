//! The command-runner seam and its system implementation.

use std::process::Command;

use log::debug;

use crate::AclError;

/// Executes a fully assembled command line and returns its captured stdout.
///
/// This is the single injected capability the builder depends on. The builder
/// hands over exactly one command string per logical operation and returns
/// the runner's output verbatim; retries, timeouts and cancellation are
/// entirely the runner's concern.
///
/// A blanket implementation covers closures, which keeps test doubles
/// one-liners:
///
/// ```rust
/// use posix_facl::{CommandRunner, Facl};
///
/// let facl = Facl::new(|command: &str| Ok(format!("ran: {command}")));
/// let out = facl.read(&["/tmp/file"], false).unwrap();
/// assert_eq!(out, "ran: getfacl -p /tmp/file");
/// ```
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; `run` takes `&self`, so a runner
/// can be shared across threads without external locking.
///
/// # Object Safety
///
/// This trait is object-safe and can be used as `dyn CommandRunner`.
pub trait CommandRunner: Send + Sync {
    /// Run `command` and return its captured standard output.
    ///
    /// # Errors
    ///
    /// Implementation-defined. [`SystemRunner`] reports
    /// [`AclError::CommandFailed`] for a non-zero exit status and
    /// [`AclError::Io`] when the process cannot be spawned.
    fn run(&self, command: &str) -> Result<String, AclError>;
}

impl<F> CommandRunner for F
where
    F: Fn(&str) -> Result<String, AclError> + Send + Sync,
{
    fn run(&self, command: &str) -> Result<String, AclError> {
        self(command)
    }
}

/// Runner that spawns the command via [`std::process::Command`].
///
/// The command string is split on whitespace: the first token is the program,
/// the rest are its arguments. No shell is involved and no quoting is
/// honored, so paths containing spaces are the caller's responsibility. This
/// matches the builder's own no-escaping contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }

    /// Returns `true` when both `getfacl` and `setfacl` resolve on `PATH`.
    pub fn tools_available() -> bool {
        ["getfacl", "setfacl"].iter().all(|tool| {
            Command::new("which")
                .arg(tool)
                .output()
                .map(|out| out.status.success())
                .unwrap_or(false)
        })
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &str) -> Result<String, AclError> {
        let mut tokens = command.split_whitespace();
        let program = tokens.next().ok_or(AclError::InvalidArguments {
            operation: "run",
            reason: "empty command",
        })?;

        debug!("running `{command}`");
        let output = Command::new(program)
            .args(tokens)
            .output()
            .map_err(|source| AclError::Io {
                command: command.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(AclError::CommandFailed {
                command: command.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_runner_is_object_safe() {
        fn _check(_: &dyn CommandRunner) {}
    }

    #[test]
    fn closures_implement_command_runner() {
        let runner = |command: &str| Ok(command.to_uppercase());
        assert_eq!(runner.run("getfacl -p /tmp").unwrap(), "GETFACL -P /TMP");
    }

    #[test]
    fn system_runner_rejects_empty_command() {
        let err = SystemRunner::new().run("   ").unwrap_err();
        assert!(matches!(err, AclError::InvalidArguments { .. }));
    }

    #[test]
    fn system_runner_reports_spawn_failure() {
        let err = SystemRunner::new()
            .run("definitely-not-a-real-program-7b3f")
            .unwrap_err();
        match err {
            AclError::Io { command, .. } => {
                assert_eq!(command, "definitely-not-a-real-program-7b3f");
            }
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn runners_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SystemRunner>();
    }
}
