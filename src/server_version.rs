//! Server version value object with lenient parsing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A code-quality server version, reduced to its major and minor components.
///
/// The server reports versions as dotted strings such as `"5.6.1"`. Only the
/// first two components matter for mode selection, so the rest is discarded.
///
/// # Lenient parsing
///
/// [`ServerVersion::parse`] never fails: a missing or non-numeric token
/// defaults to 0, so malformed input silently degrades to `0.0`. Servers old
/// enough to predate the issues mode are indistinguishable from unparseable
/// responses, which is the intended fallback.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::ServerVersion;
///
/// let version = ServerVersion::parse("5.6.1");
/// assert_eq!(version, ServerVersion::new(5, 6));
/// assert!(version.supports_issues_mode());
///
/// let degraded = ServerVersion::parse("abc.def");
/// assert_eq!(degraded, ServerVersion::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ServerVersion {
    /// Major version component.
    pub major: u32,
    /// Minor version component.
    pub minor: u32,
}

impl ServerVersion {
    /// Create a version from explicit components.
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse a dotted version string, defaulting missing or non-numeric
    /// tokens to 0.
    ///
    /// The input is split on `.`; the first token becomes the major version
    /// and the second the minor. Anything past the second token is ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::ServerVersion;
    ///
    /// assert_eq!(ServerVersion::parse("5.2.1"), ServerVersion::new(5, 2));
    /// assert_eq!(ServerVersion::parse("6"), ServerVersion::new(6, 0));
    /// assert_eq!(ServerVersion::parse(""), ServerVersion::new(0, 0));
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut tokens = raw.trim().split('.');
        let major = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();
        let minor = tokens
            .next()
            .and_then(|t| t.parse().ok())
            .unwrap_or_default();

        let version = Self { major, minor };
        if version == Self::new(0, 0) && !raw.trim().is_empty() {
            tracing::warn!(raw, "server version did not parse, treating as 0.0");
        }
        version
    }

    /// Whether this server supports issue-reporting analysis mode.
    ///
    /// Servers at 5.2 and above accept `sonar.analysis.mode=issues`; older
    /// servers only understand incremental mode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::ServerVersion;
    ///
    /// assert!(ServerVersion::new(5, 2).supports_issues_mode());
    /// assert!(!ServerVersion::new(5, 1).supports_issues_mode());
    /// ```
    pub fn supports_issues_mode(&self) -> bool {
        self.major > 5 || (self.major == 5 && self.minor >= 2)
    }
}

impl fmt::Display for ServerVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}
