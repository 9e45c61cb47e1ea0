//! Begin-step configuration.

use crate::errors::BeginError;
use serde::{Deserialize, Serialize};

/// Inputs for the scanner begin step.
///
/// This mirrors the settings a pipeline task collects before starting an
/// analysis: the server endpoint and credentials, the project identity, the
/// legacy database settings older servers still need, free-form extra
/// arguments, and the pull-request analysis flag.
///
/// # Credentials
///
/// Either credential may be empty. Token authentication passes the token as
/// `login` with an empty `password`; anonymous servers take both empty.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::BeginConfig;
///
/// let config = BeginConfig {
///     server_url: "https://sonar.example.com".to_string(),
///     project_key: "my-project".to_string(),
///     project_name: "My Project".to_string(),
///     project_version: "1.0".to_string(),
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeginConfig {
    /// Base URL of the code-quality server.
    pub server_url: String,

    /// Login or authentication token. May be empty.
    #[serde(default)]
    pub login: String,

    /// Password. Empty for token or anonymous authentication.
    #[serde(default)]
    pub password: String,

    /// Unique key identifying the project on the server.
    pub project_key: String,

    /// Display name of the project.
    pub project_name: String,

    /// Version string recorded with the analysis.
    pub project_version: String,

    /// JDBC URL for legacy servers that analyze against the database.
    #[serde(default)]
    pub db_url: Option<String>,

    /// Database username for legacy servers.
    #[serde(default)]
    pub db_username: Option<String>,

    /// Database password for legacy servers.
    #[serde(default)]
    pub db_password: Option<String>,

    /// Free-form argument fragments appended verbatim after the assembled
    /// arguments. A `/d:sonar.analysis.mode=` fragment supplied here
    /// conflicts with pull-request analysis.
    #[serde(default)]
    pub extra_args: Vec<String>,

    /// Whether pull-request analysis mode selection is enabled.
    #[serde(default)]
    pub pull_request_analysis: bool,
}

impl BeginConfig {
    /// Check that every required setting is present.
    ///
    /// The first missing setting wins; the error names it and how to fix it.
    pub fn validate(&self) -> Result<(), BeginError> {
        let required = [
            ("serverUrl", &self.server_url),
            ("projectKey", &self.project_key),
            ("projectName", &self.project_name),
            ("projectVersion", &self.project_version),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(BeginError::MissingSetting {
                    name: name.to_string(),
                    fix: format!("Set {} in the begin-step configuration", name),
                });
            }
        }

        Ok(())
    }
}
