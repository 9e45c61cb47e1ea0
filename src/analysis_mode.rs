//! Analysis mode enum and its begin-step argument fragments.

use crate::pipeline::{PipelineContext, INCREMENTAL_MODE_KEY};
use crate::server_version::ServerVersion;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Analysis property selecting the server-side analysis mode.
pub const ANALYSIS_MODE_PROPERTY: &str = "sonar.analysis.mode";

/// Analysis property naming the issues report file produced in issues mode.
pub const REPORT_EXPORT_PATH_PROPERTY: &str = "sonar.report.export.path";

/// Default report file written by issues-mode analysis.
pub const REPORT_EXPORT_PATH: &str = "sonar-report.json";

/// The analysis mode used for pull-request analysis.
///
/// The two modes are mutually exclusive and chosen once per invocation based
/// on the server version. Newer servers (5.2+) restrict the scan to
/// issue-reporting against changed code; older servers run an incremental
/// pass instead.
///
/// # Extensibility
///
/// This enum is marked `#[non_exhaustive]` to allow adding new mode types
/// in future versions. When matching on `AnalysisMode`, always include a
/// wildcard pattern to handle future variants.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::{AnalysisMode, ServerVersion};
///
/// let mode = AnalysisMode::for_server(ServerVersion::new(5, 6));
/// assert_eq!(mode, AnalysisMode::Issues);
///
/// let mode = AnalysisMode::for_server(ServerVersion::new(4, 5));
/// assert_eq!(mode, AnalysisMode::Incremental);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum AnalysisMode {
    /// Issue-reporting analysis against changed code (servers 5.2+).
    Issues,
    /// Incremental analysis (servers below 5.2).
    Incremental,
}

impl AnalysisMode {
    /// Select the mode appropriate for a server version.
    ///
    /// `Issues` is chosen for 5.2 and above, `Incremental` below that.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::{AnalysisMode, ServerVersion};
    ///
    /// assert_eq!(AnalysisMode::for_server(ServerVersion::new(5, 2)), AnalysisMode::Issues);
    /// assert_eq!(AnalysisMode::for_server(ServerVersion::new(5, 1)), AnalysisMode::Incremental);
    /// ```
    pub fn for_server(version: ServerVersion) -> Self {
        if version.supports_issues_mode() {
            Self::Issues
        } else {
            Self::Incremental
        }
    }

    /// The value this mode sets for [`ANALYSIS_MODE_PROPERTY`].
    pub fn property_value(&self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::Incremental => "incremental",
        }
    }

    /// Human-readable display name for the mode.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Issues => "issues analysis",
            Self::Incremental => "incremental analysis",
        }
    }

    /// Whether this is the incremental mode.
    pub fn is_incremental(&self) -> bool {
        matches!(self, Self::Incremental)
    }

    /// The begin-step argument fragments this mode appends.
    ///
    /// Issues mode sets the analysis mode and the report export path; the
    /// incremental mode sets the analysis mode alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::AnalysisMode;
    ///
    /// assert_eq!(
    ///     AnalysisMode::Issues.begin_args(),
    ///     vec![
    ///         "/d:sonar.analysis.mode=issues".to_string(),
    ///         "/d:sonar.report.export.path=sonar-report.json".to_string(),
    ///     ]
    /// );
    /// assert_eq!(
    ///     AnalysisMode::Incremental.begin_args(),
    ///     vec!["/d:sonar.analysis.mode=incremental".to_string()]
    /// );
    /// ```
    pub fn begin_args(&self) -> Vec<String> {
        let mut args = vec![format!(
            "/d:{}={}",
            ANALYSIS_MODE_PROPERTY,
            self.property_value()
        )];
        if matches!(self, Self::Issues) {
            args.push(format!(
                "/d:{}={}",
                REPORT_EXPORT_PATH_PROPERTY, REPORT_EXPORT_PATH
            ));
        }
        args
    }

    /// Record the chosen mode in the pipeline context.
    ///
    /// Writes [`INCREMENTAL_MODE_KEY`] as `"true"` or `"false"` regardless of
    /// which mode was selected, so the later publish step always finds the
    /// flag.
    pub fn record(&self, ctx: &mut PipelineContext) {
        ctx.set(INCREMENTAL_MODE_KEY, self.is_incremental().to_string());
    }

    /// Iterator over all known analysis modes.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
