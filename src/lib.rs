//! # posix-facl
//!
//! Command construction for the **POSIX `getfacl`/`setfacl` utilities** with
//! pluggable command runners.
//!
//! This crate translates high-level ACL operations — read, wipe, modify,
//! delete — into the exact command lines the external tools expect, then
//! delegates execution to an injected [`CommandRunner`]. It never parses or
//! interprets ACL semantics itself: the contract ends at producing a
//! deterministic command string and returning the runner's output verbatim.
//!
//! ---
//!
//! ## Quick Start
//!
//! ```rust
//! use posix_facl::{Facl, SystemRunner};
//!
//! fn grant_read<R: posix_facl::CommandRunner>(facl: &Facl<R>) -> Result<String, posix_facl::AclError> {
//!     facl.modify("user", "backup", "r-x", &["/srv/data"], true)
//! }
//!
//! // Production wiring; the runner actually spawns getfacl/setfacl.
//! let facl = Facl::new(SystemRunner::new());
//! # let _ = facl;
//! ```
//!
//! In tests, inject a closure instead of a process-spawning runner:
//!
//! ```rust
//! use posix_facl::Facl;
//!
//! let facl = Facl::new(|command: &str| Ok(command.to_string()));
//! assert_eq!(
//!     facl.wipe(&["/tmp/file1", "/tmp/file2"], true).unwrap(),
//!     "setfacl -b -R /tmp/file1 /tmp/file2",
//! );
//! ```
//!
//! ---
//!
//! ## Core Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Facl`] | The command builder — one method per ACL operation |
//! | [`CommandRunner`] | The injected execution seam (closures qualify) |
//! | [`SystemRunner`] | Production runner backed by `std::process::Command` |
//! | [`AclScope`] | Entry category (`u`, `g`, `d:u`, `d:g`) with alias parsing |
//! | [`AclEntry`] | One `scope:qualifier[:perms]` clause |
//! | [`AclError`] | Error taxonomy with context |
//!
//! ---
//!
//! ## Generated Commands
//!
//! | Operation | Command |
//! |-----------|---------|
//! | [`Facl::read`] | `getfacl -p [-R] PATH...` |
//! | [`Facl::wipe`] | `setfacl -b [-R] PATH...` |
//! | [`Facl::modify`] | `setfacl -m [-R] SCOPE:QUALIFIER:PERMS PATH...` |
//! | [`Facl::delete`] | `setfacl -x [-R] SCOPE:QUALIFIER PATH...` |
//! | [`Facl::version`] | `getfacl --version` |
//!
//! Tokens are joined by single spaces in that fixed order. No quoting or
//! escaping is applied to paths or entry clauses; this deliberately preserves
//! the behavior of the tooling this crate grew out of.
//!
//! ---
//!
//! ## Error Handling
//!
//! All operations return `Result<String, AclError>`. Argument validation runs
//! before the runner is invoked, so a malformed request never reaches an
//! external process:
//!
//! ```rust
//! use posix_facl::{AclError, Facl};
//!
//! let facl = Facl::new(|_: &str| -> Result<String, AclError> {
//!     unreachable!("runner must not be called")
//! });
//! let empty: [&str; 0] = [];
//! assert!(matches!(
//!     facl.read(&empty, false),
//!     Err(AclError::InvalidArguments { .. }),
//! ));
//! ```
//!
//! Runner-side failures are propagated to the caller unmodified; nothing is
//! retried, logged-and-swallowed, or reinterpreted.
//!
//! ---
//!
//! ## Thread Safety
//!
//! [`CommandRunner`] requires `Send + Sync` and all methods take `&self`, so
//! a [`Facl`] can be shared across threads behind `Arc` without locking.
//!
//! ---
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Enable serialization for [`AclScope`] and [`AclEntry`] |

// Private modules
mod error;
mod facl;
mod runner;
mod types;

// Public re-exports - error types
pub use error::AclError;

// Public re-exports - core types
pub use types::{AclEntry, AclScope};

// Public re-exports - execution seam
pub use runner::{CommandRunner, SystemRunner};

// Public re-exports - the builder
pub use facl::Facl;
