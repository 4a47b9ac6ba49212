//! Error types for the POSIX ACL command layer.

use std::io;

/// Error type for ACL command construction and execution.
///
/// The validation variants ([`InvalidArguments`](AclError::InvalidArguments),
/// [`UnsupportedScope`](AclError::UnsupportedScope)) are raised before the
/// runner is ever invoked; the remaining variants surface from the runner
/// side and are propagated to the caller unmodified.
/// Uses `#[non_exhaustive]` for forward compatibility.
///
/// # Examples
///
/// ```rust
/// use posix_facl::AclError;
///
/// let err = AclError::UnsupportedScope { scope: "o".into() };
/// assert_eq!(err.to_string(), "unknown ACL scope: o");
/// ```
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum AclError {
    /// A required argument was missing or empty.
    #[error("{operation}: invalid arguments: {reason}")]
    InvalidArguments {
        /// The operation that rejected its arguments.
        operation: &'static str,
        /// What was missing or malformed.
        reason: &'static str,
    },

    /// The scope token did not match any entry in the alias table.
    #[error("unknown ACL scope: {scope}")]
    UnsupportedScope {
        /// The token that failed to parse.
        scope: String,
    },

    /// The external command exited with a non-zero status.
    #[error("`{command}` exited with status {code}: {stderr}")]
    CommandFailed {
        /// The command line that was run.
        command: String,
        /// The process exit code (-1 when terminated by a signal).
        code: i32,
        /// Captured standard error.
        stderr: String,
    },

    /// Command output did not have the expected shape.
    #[error("unexpected output from `{command}`: {output}")]
    UnexpectedOutput {
        /// The command line that was run.
        command: String,
        /// The output that could not be parsed.
        output: String,
    },

    /// Spawning the external command or capturing its output failed.
    #[error("failed to run `{command}`: {source}")]
    Io {
        /// The command line that was being run.
        command: String,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}
