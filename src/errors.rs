//! Error types for the begin step.
//!
//! This module defines the errors that can occur while preparing or running
//! the scanner begin step. Each variant includes an actionable fix suggestion
//! to help users resolve the issue.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while preparing or running the begin step.
///
/// Each variant includes contextual information about what went wrong and
/// a `fix` field with an actionable suggestion for resolving the issue.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::BeginError;
///
/// fn handle_error(error: BeginError) {
///     eprintln!("Begin step failed: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BeginError {
    /// An analysis property that the begin step manages is already set.
    ///
    /// Pull-request analysis selects `sonar.analysis.mode` itself; a value
    /// supplied through extra arguments conflicts with that selection. This
    /// is checked before any network call is made.
    #[error("Conflicting analysis property: {property} is already set")]
    ConfigurationConflict {
        /// The property that was already present (e.g., "sonar.analysis.mode").
        property: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The server version could not be determined.
    ///
    /// Both fetch attempts against the system-info endpoint came back empty.
    /// Mode selection cannot proceed without a version.
    #[error("Could not determine the version of the server at {server_url}")]
    VersionUnavailable {
        /// Base URL of the unreachable server.
        server_url: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The configured server URL is not a valid URL.
    #[error("Invalid server URL {url}: {message}")]
    InvalidServerUrl {
        /// The URL that failed to parse.
        url: String,
        /// Description of the parse failure.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The HTTP client could not be initialized.
    #[error("Failed to initialize HTTP client: {message}")]
    HttpClient {
        /// Description of the initialization failure.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// A required begin-step setting is missing or empty.
    #[error("Missing required setting: {name}")]
    MissingSetting {
        /// Name of the missing setting (e.g., "projectKey").
        name: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The scanner executable could not be located.
    #[error("Scanner executable not found")]
    ScannerNotFound {
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The scanner begin step ran but failed.
    #[error("Scanner begin step failed: {message}")]
    ScannerFailed {
        /// Description of the failure.
        message: String,
        /// Exit code from the scanner, if available.
        exit_code: Option<i32>,
        /// Standard output from the scanner, if available.
        stdout: Option<String>,
        /// Standard error from the scanner, if available.
        stderr: Option<String>,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// Permission was denied while launching the scanner.
    #[error("Permission denied: {message}")]
    PermissionDenied {
        /// Description of what permission was denied.
        message: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The scanner begin step timed out.
    #[error("Scanner begin step timed out after {duration:?}")]
    Timeout {
        /// How long the begin step was allowed to run.
        duration: Duration,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl BeginError {
    /// Get an actionable suggestion for fixing this error.
    ///
    /// Every error variant includes a fix suggestion that users can follow
    /// to resolve the issue.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::BeginError;
    ///
    /// let error = BeginError::VersionUnavailable {
    ///     server_url: "https://sonar.example.com".to_string(),
    ///     fix: "Check that the server is reachable and the credentials are valid".to_string(),
    /// };
    /// assert!(error.fix_suggestion().contains("reachable"));
    /// ```
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::ConfigurationConflict { fix, .. } => fix,
            Self::VersionUnavailable { fix, .. } => fix,
            Self::InvalidServerUrl { fix, .. } => fix,
            Self::HttpClient { fix, .. } => fix,
            Self::MissingSetting { fix, .. } => fix,
            Self::ScannerNotFound { fix, .. } => fix,
            Self::ScannerFailed { fix, .. } => fix,
            Self::PermissionDenied { fix, .. } => fix,
            Self::Timeout { fix, .. } => fix,
        }
    }
}
