//! Begin-step argument assembly.

use crate::analysis_mode::{AnalysisMode, ANALYSIS_MODE_PROPERTY};
use crate::config::BeginConfig;
use crate::errors::BeginError;
use serde::{Deserialize, Serialize};

/// Analysis properties whose values are masked when arguments are logged.
const REDACTED_PROPERTIES: &[&str] = &["sonar.password", "sonar.jdbc.password"];

/// The ordered argument list for the scanner begin step.
///
/// Arguments are assembled from a [`BeginConfig`] in a fixed order: project
/// identity (`/k:`, `/n:`, `/v:`), server properties, optional legacy
/// database properties, then the free-form extra arguments verbatim. Mode
/// fragments are appended last, after mode selection has run.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::{BeginArgs, BeginConfig};
///
/// let config = BeginConfig {
///     server_url: "https://sonar.example.com".to_string(),
///     project_key: "my-project".to_string(),
///     project_name: "My Project".to_string(),
///     project_version: "1.0".to_string(),
///     ..Default::default()
/// };
/// let args = BeginArgs::from_config(&config).unwrap();
/// assert_eq!(args.as_slice()[0], "/k:my-project");
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeginArgs {
    args: Vec<String>,
}

impl BeginArgs {
    /// Assemble the begin-step arguments from a validated configuration.
    ///
    /// Credentials properties are only emitted when non-empty; database
    /// properties only when configured. Extra arguments are appended
    /// verbatim, unvalidated.
    pub fn from_config(config: &BeginConfig) -> Result<Self, BeginError> {
        config.validate()?;

        let mut args = Self::default();
        args.push(format!("/k:{}", config.project_key));
        args.push(format!("/n:{}", config.project_name));
        args.push(format!("/v:{}", config.project_version));
        args.push_property("sonar.host.url", &config.server_url);

        if !config.login.is_empty() {
            args.push_property("sonar.login", &config.login);
        }
        if !config.password.is_empty() {
            args.push_property("sonar.password", &config.password);
        }

        if let Some(db_url) = &config.db_url {
            args.push_property("sonar.jdbc.url", db_url);
        }
        if let Some(db_username) = &config.db_username {
            args.push_property("sonar.jdbc.username", db_username);
        }
        if let Some(db_password) = &config.db_password {
            args.push_property("sonar.jdbc.password", db_password);
        }

        for extra in &config.extra_args {
            args.push(extra.clone());
        }

        Ok(args)
    }

    /// Append a raw argument fragment.
    pub fn push(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Append an analysis property as a `/d:key=value` fragment.
    pub fn push_property(&mut self, key: &str, value: &str) {
        self.args.push(format!("/d:{}={}", key, value));
    }

    /// Whether an analysis property is already set by any fragment.
    ///
    /// Scans for `/d:key=` prefixes, which is how properties arrive both
    /// from assembly and from free-form extra arguments.
    pub fn contains_property(&self, key: &str) -> bool {
        let prefix = format!("/d:{}=", key);
        self.args.iter().any(|arg| arg.starts_with(&prefix))
    }

    /// Check that no fragment already sets the analysis mode.
    ///
    /// Pull-request analysis selects the mode itself, so a pre-existing
    /// `sonar.analysis.mode` fragment is a fatal configuration conflict.
    /// This runs before any network call is made.
    pub fn ensure_no_mode_conflict(&self) -> Result<(), BeginError> {
        if self.contains_property(ANALYSIS_MODE_PROPERTY) {
            return Err(BeginError::ConfigurationConflict {
                property: ANALYSIS_MODE_PROPERTY.to_string(),
                fix: format!(
                    "Remove /d:{}= from the extra arguments or disable pull-request analysis",
                    ANALYSIS_MODE_PROPERTY
                ),
            });
        }
        Ok(())
    }

    /// Append the fragments for a selected analysis mode.
    pub fn apply_mode(&mut self, mode: AnalysisMode) {
        self.args.extend(mode.begin_args());
    }

    /// The assembled fragments in order.
    pub fn as_slice(&self) -> &[String] {
        &self.args
    }

    /// Iterate over the assembled fragments.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(String::as_str)
    }

    /// Consume the assembly into the raw argument vector.
    pub fn into_vec(self) -> Vec<String> {
        self.args
    }

    /// The fragments with password property values masked, for logging.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sonar_scanner_begin::BeginArgs;
    ///
    /// let mut args = BeginArgs::default();
    /// args.push_property("sonar.password", "hunter2");
    /// assert_eq!(args.redacted(), vec!["/d:sonar.password=***".to_string()]);
    /// ```
    pub fn redacted(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| {
                for property in REDACTED_PROPERTIES {
                    let prefix = format!("/d:{}=", property);
                    if arg.starts_with(&prefix) {
                        return format!("{}***", prefix);
                    }
                }
                arg.clone()
            })
            .collect()
    }
}
