//! The ACL command builder.

use std::path::Path;

use crate::{AclEntry, AclError, CommandRunner};

const GETFACL: &str = "getfacl";
const SETFACL: &str = "setfacl";
const VERSION_COMMAND: &str = "getfacl --version";

/// Builder for `getfacl`/`setfacl` invocations.
///
/// Holds the injected [`CommandRunner`] and exposes one method per logical
/// operation. Command construction is deterministic and pure — identical
/// arguments always produce an identical command string — and the only side
/// effect is handing the finished string to the runner. Whatever the runner
/// returns (output or error) is passed back to the caller unmodified.
///
/// Paths and entry clauses are never quoted or escaped; paths containing
/// spaces are the caller's responsibility.
///
/// # Examples
///
/// ```rust
/// use posix_facl::Facl;
///
/// // Any closure works as a runner; production code uses `SystemRunner`.
/// let facl = Facl::new(|command: &str| Ok(command.to_string()));
///
/// let cmd = facl.modify("user", "myuser", "rwx", &["/srv/data"], true).unwrap();
/// assert_eq!(cmd, "setfacl -m -R u:myuser:rwx /srv/data");
/// ```
#[derive(Debug)]
pub struct Facl<R> {
    runner: R,
}

impl<R: CommandRunner> Facl<R> {
    /// Create a builder around `runner`.
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Borrow the injected runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Read the ACLs of `paths` via `getfacl -p [-R]`.
    ///
    /// `-p` keeps the leading slash in the path headers `getfacl` prints.
    ///
    /// # Errors
    ///
    /// - [`AclError::InvalidArguments`] if `paths` is empty (the runner is
    ///   never invoked)
    /// - any error the runner reports, unmodified
    pub fn read<P: AsRef<Path>>(&self, paths: &[P], recursive: bool) -> Result<String, AclError> {
        let command = read_command(paths, recursive)?;
        self.runner.run(&command)
    }

    /// Remove all extended ACL entries from `paths` via `setfacl -b [-R]`.
    ///
    /// # Errors
    ///
    /// Same contract as [`read`](Self::read).
    pub fn wipe<P: AsRef<Path>>(&self, paths: &[P], recursive: bool) -> Result<String, AclError> {
        let command = wipe_command(paths, recursive)?;
        self.runner.run(&command)
    }

    /// Add or update one ACL entry on `paths` via `setfacl -m [-R]`.
    ///
    /// `scope` accepts both spellings from the alias table (`u`/`user`,
    /// `g`/`group`, `d:u`/`d:user`, `d:g`/`d:group`) and is normalized to the
    /// canonical short form before serialization.
    ///
    /// # Errors
    ///
    /// - [`AclError::InvalidArguments`] if `paths` is empty or `scope`,
    ///   `qualifier` or `permissions` is empty
    /// - [`AclError::UnsupportedScope`] if `scope` is not in the alias table
    /// - any error the runner reports, unmodified
    pub fn modify<P: AsRef<Path>>(
        &self,
        scope: &str,
        qualifier: &str,
        permissions: &str,
        paths: &[P],
        recursive: bool,
    ) -> Result<String, AclError> {
        let command = modify_command(scope, qualifier, permissions, paths, recursive)?;
        self.runner.run(&command)
    }

    /// Remove one ACL entry from `paths` via `setfacl -x [-R]`.
    ///
    /// The entry clause omits permissions (`scope:qualifier`), as `setfacl
    /// -x` requires.
    ///
    /// # Errors
    ///
    /// Same contract as [`modify`](Self::modify), minus the permissions
    /// requirement.
    pub fn delete<P: AsRef<Path>>(
        &self,
        scope: &str,
        qualifier: &str,
        paths: &[P],
        recursive: bool,
    ) -> Result<String, AclError> {
        let command = delete_command(scope, qualifier, paths, recursive)?;
        self.runner.run(&command)
    }

    /// Report the installed ACL tooling version via `getfacl --version`.
    ///
    /// The first output line looks like `getfacl 2.3.1`; the second
    /// whitespace-separated field is returned.
    ///
    /// # Errors
    ///
    /// - [`AclError::UnexpectedOutput`] if the output does not have that shape
    /// - any error the runner reports, unmodified
    pub fn version(&self) -> Result<String, AclError> {
        let output = self.runner.run(VERSION_COMMAND)?;
        output
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().nth(1))
            .map(str::to_string)
            .ok_or_else(|| AclError::UnexpectedOutput {
                command: VERSION_COMMAND.to_string(),
                output: output.clone(),
            })
    }
}

fn read_command<P: AsRef<Path>>(paths: &[P], recursive: bool) -> Result<String, AclError> {
    ensure_paths("read", paths)?;
    Ok(assemble(GETFACL, "-p", recursive, None, paths))
}

fn wipe_command<P: AsRef<Path>>(paths: &[P], recursive: bool) -> Result<String, AclError> {
    ensure_paths("wipe", paths)?;
    Ok(assemble(SETFACL, "-b", recursive, None, paths))
}

fn modify_command<P: AsRef<Path>>(
    scope: &str,
    qualifier: &str,
    permissions: &str,
    paths: &[P],
    recursive: bool,
) -> Result<String, AclError> {
    ensure_paths("modify", paths)?;
    let clause = entry_clause("modify", scope, qualifier, Some(permissions))?;
    Ok(assemble(SETFACL, "-m", recursive, Some(&clause), paths))
}

fn delete_command<P: AsRef<Path>>(
    scope: &str,
    qualifier: &str,
    paths: &[P],
    recursive: bool,
) -> Result<String, AclError> {
    ensure_paths("delete", paths)?;
    let clause = entry_clause("delete", scope, qualifier, None)?;
    Ok(assemble(SETFACL, "-x", recursive, Some(&clause), paths))
}

/// The non-empty-paths invariant, checked before anything else so the runner
/// is never handed a command with no targets.
fn ensure_paths<P: AsRef<Path>>(operation: &'static str, paths: &[P]) -> Result<(), AclError> {
    if paths.is_empty() {
        return Err(AclError::InvalidArguments {
            operation,
            reason: "at least one target path is required",
        });
    }
    Ok(())
}

/// Validate the entry fields and render the `scope:qualifier[:perms]` clause.
fn entry_clause(
    operation: &'static str,
    scope: &str,
    qualifier: &str,
    permissions: Option<&str>,
) -> Result<String, AclError> {
    if scope.is_empty() {
        return Err(AclError::InvalidArguments {
            operation,
            reason: "a scope is required",
        });
    }
    if qualifier.is_empty() {
        return Err(AclError::InvalidArguments {
            operation,
            reason: "a qualifier is required",
        });
    }
    if permissions.is_some_and(str::is_empty) {
        return Err(AclError::InvalidArguments {
            operation,
            reason: "a permission string is required",
        });
    }

    let entry = AclEntry::new(scope.parse()?, qualifier, permissions.map(str::to_string));
    Ok(entry.to_string())
}

/// Join the tokens in the fixed order: base command, primary flag, optional
/// `-R`, optional entry clause, then the paths in insertion order. Paths go
/// in verbatim; no quoting or escaping is applied.
fn assemble<P: AsRef<Path>>(
    base: &str,
    flag: &str,
    recursive: bool,
    clause: Option<&str>,
    paths: &[P],
) -> String {
    let mut tokens = vec![base.to_string(), flag.to_string()];
    if recursive {
        tokens.push("-R".to_string());
    }
    if let Some(clause) = clause {
        tokens.push(clause.to_string());
    }
    tokens.extend(paths.iter().map(|p| p.as_ref().display().to_string()));
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_command_single_path() {
        let cmd = read_command(&["/tmp/file"], false).unwrap();
        assert_eq!(cmd, "getfacl -p /tmp/file");
    }

    #[test]
    fn read_command_recursive_preserves_flag_order() {
        let cmd = read_command(&["/tmp/file1", "/tmp/file2"], true).unwrap();
        assert_eq!(cmd, "getfacl -p -R /tmp/file1 /tmp/file2");
    }

    #[test]
    fn wipe_command_multiple_paths() {
        let cmd = wipe_command(&["/tmp/file1", "/tmp/file2"], false).unwrap();
        assert_eq!(cmd, "setfacl -b /tmp/file1 /tmp/file2");
    }

    #[test]
    fn modify_command_normalizes_long_scope() {
        let short = modify_command("u", "myuser", "rwx", &["/tmp/file"], false).unwrap();
        let long = modify_command("user", "myuser", "rwx", &["/tmp/file"], false).unwrap();
        assert_eq!(short, "setfacl -m u:myuser:rwx /tmp/file");
        assert_eq!(short, long);
    }

    #[test]
    fn modify_command_recursive_flag_precedes_clause() {
        let cmd = modify_command("group", "mygroup", "r-x", &["/srv"], true).unwrap();
        assert_eq!(cmd, "setfacl -m -R g:mygroup:r-x /srv");
    }

    #[test]
    fn delete_command_omits_permissions() {
        let cmd = delete_command("d:user", "myuser", &["/tmp/file"], false).unwrap();
        assert_eq!(cmd, "setfacl -x d:u:myuser /tmp/file");
    }

    #[test]
    fn empty_path_set_is_rejected() {
        let paths: [&str; 0] = [];
        assert!(matches!(
            read_command(&paths, false).unwrap_err(),
            AclError::InvalidArguments { operation: "read", .. }
        ));
        assert!(matches!(
            wipe_command(&paths, true).unwrap_err(),
            AclError::InvalidArguments { operation: "wipe", .. }
        ));
        assert!(matches!(
            modify_command("u", "myuser", "rwx", &paths, false).unwrap_err(),
            AclError::InvalidArguments { operation: "modify", .. }
        ));
        assert!(matches!(
            delete_command("u", "myuser", &paths, false).unwrap_err(),
            AclError::InvalidArguments { operation: "delete", .. }
        ));
    }

    #[test]
    fn empty_entry_fields_are_rejected() {
        for err in [
            modify_command("", "myuser", "rwx", &["/tmp/file"], false).unwrap_err(),
            modify_command("u", "", "rwx", &["/tmp/file"], false).unwrap_err(),
            modify_command("u", "myuser", "", &["/tmp/file"], false).unwrap_err(),
            delete_command("", "myuser", &["/tmp/file"], false).unwrap_err(),
            delete_command("u", "", &["/tmp/file"], false).unwrap_err(),
        ] {
            assert!(matches!(err, AclError::InvalidArguments { .. }));
        }
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let err = modify_command("mask", "myuser", "rwx", &["/tmp/file"], false).unwrap_err();
        assert!(matches!(err, AclError::UnsupportedScope { .. }));
    }

    #[test]
    fn paths_keep_insertion_order() {
        let cmd = read_command(&["/b", "/a", "/c"], false).unwrap();
        assert_eq!(cmd, "getfacl -p /b /a /c");
    }

    #[test]
    fn paths_are_not_quoted() {
        // Faithful to the original tooling: spaces pass through verbatim.
        let cmd = wipe_command(&["/tmp/with space"], false).unwrap();
        assert_eq!(cmd, "setfacl -b /tmp/with space");
    }

    #[test]
    fn version_parses_first_line() {
        let facl = Facl::new(|command: &str| {
            assert_eq!(command, "getfacl --version");
            Ok("getfacl 2.3.1\nWritten by Andreas Gruenbacher\n".to_string())
        });
        assert_eq!(facl.version().unwrap(), "2.3.1");
    }

    #[test]
    fn version_rejects_malformed_output() {
        let facl = Facl::new(|_: &str| Ok("nonsense".to_string()));
        let err = facl.version().unwrap_err();
        match err {
            AclError::UnexpectedOutput { command, output } => {
                assert_eq!(command, "getfacl --version");
                assert_eq!(output, "nonsense");
            }
            other => panic!("expected UnexpectedOutput, got {other:?}"),
        }
    }
}
