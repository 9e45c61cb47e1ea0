//! Fetch and run options.
//!
//! This module provides the [`FetchOptions`] and [`RunOptions`] structs for
//! configuring the version fetch retry policy and the scanner invocation.

use std::path::PathBuf;
use std::time::Duration;

/// Retry policy for the server version fetch.
///
/// The fetch is an explicit, bounded retry: by default one retry after a
/// fixed one-second delay (two attempts total). This is intentionally not a
/// generic retry framework.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::FetchOptions;
/// use std::time::Duration;
///
/// // Defaults: two attempts, one second between them
/// let opts = FetchOptions::default();
/// assert_eq!(opts.max_attempts, 2);
///
/// // No delay (useful in tests)
/// let opts = FetchOptions {
///     retry_delay: Duration::ZERO,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Total number of fetch attempts, including the first.
    ///
    /// Default: 2 (one retry).
    pub max_attempts: u32,

    /// Fixed delay between attempts.
    ///
    /// Default: 1 second.
    pub retry_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_attempts: 2,
            retry_delay: Duration::from_secs(1),
        }
    }
}

/// Options for running the scanner begin step.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::RunOptions;
/// use std::time::Duration;
///
/// // Defaults: locate the scanner on PATH, 5 minute timeout
/// let opts = RunOptions::default();
/// assert!(opts.scanner_path.is_none());
/// assert_eq!(opts.timeout, Duration::from_secs(300));
/// ```
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Explicit path to the scanner executable.
    ///
    /// When `None`, the scanner is located via PATH and the usual fallback
    /// directories.
    pub scanner_path: Option<PathBuf>,

    /// Maximum time to wait for the begin step to complete.
    ///
    /// Default: 5 minutes (300 seconds).
    pub timeout: Duration,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            scanner_path: None,
            timeout: Duration::from_secs(300),
        }
    }
}
