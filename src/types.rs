//! Core types for the POSIX ACL command layer.

use std::fmt;
use std::str::FromStr;

use crate::AclError;

/// The category of an ACL entry.
///
/// Parses from both the short and long spellings accepted by the original
/// tooling (`u`/`user`, `g`/`group`, plus the `d:`-prefixed default-entry
/// counterparts) and always serializes to the canonical short form, so
/// `"user"` and `"u"` produce byte-identical commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AclScope {
    /// Named user entry (`u:`).
    User,
    /// Named group entry (`g:`).
    Group,
    /// Default named user entry (`d:u:`), inherited by new children of a directory.
    DefaultUser,
    /// Default named group entry (`d:g:`).
    DefaultGroup,
}

impl AclScope {
    /// Canonical short form used in generated commands.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AclScope::User => "u",
            AclScope::Group => "g",
            AclScope::DefaultUser => "d:u",
            AclScope::DefaultGroup => "d:g",
        }
    }

    /// Returns `true` for the `d:`-prefixed default-entry scopes.
    #[inline]
    pub const fn is_default(&self) -> bool {
        matches!(self, AclScope::DefaultUser | AclScope::DefaultGroup)
    }
}

impl FromStr for AclScope {
    type Err = AclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Fixed alias table; anything outside it is a contract failure.
        match s {
            "u" | "user" => Ok(AclScope::User),
            "g" | "group" => Ok(AclScope::Group),
            "d:u" | "d:user" => Ok(AclScope::DefaultUser),
            "d:g" | "d:group" => Ok(AclScope::DefaultGroup),
            other => Err(AclError::UnsupportedScope {
                scope: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AclScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ACL entry as it appears in a `setfacl` clause.
///
/// Permissions are a short string over `{r,w,x,-}` and are carried through
/// unvalidated; `setfacl` itself rejects malformed permission strings. The
/// delete form (`setfacl -x`) omits permissions entirely.
///
/// # Examples
///
/// ```rust
/// use posix_facl::{AclEntry, AclScope};
///
/// let entry = AclEntry::new(AclScope::User, "myuser", Some("rwx".into()));
/// assert_eq!(entry.to_string(), "u:myuser:rwx");
///
/// let removal = AclEntry::new(AclScope::DefaultGroup, "mygroup", None);
/// assert_eq!(removal.to_string(), "d:g:mygroup");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AclEntry {
    /// Entry scope.
    pub scope: AclScope,
    /// Principal (user or group) name.
    pub qualifier: String,
    /// Permission string (e.g. `rwx`, `r--`); `None` for delete clauses.
    pub permissions: Option<String>,
}

impl AclEntry {
    /// Create an entry from its parts.
    pub fn new(scope: AclScope, qualifier: impl Into<String>, permissions: Option<String>) -> Self {
        Self {
            scope,
            qualifier: qualifier.into(),
            permissions,
        }
    }
}

impl fmt::Display for AclEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.permissions {
            Some(perms) => write!(f, "{}:{}:{}", self.scope, self.qualifier, perms),
            None => write!(f, "{}:{}", self.scope, self.qualifier),
        }
    }
}
