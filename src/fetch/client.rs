//! Authenticated HTTP fetch against the server's system-info endpoint.

use crate::errors::BeginError;
use crate::fetch::source::VersionSource;
use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

/// Path of the version-info endpoint, relative to the server base URL.
const SYSTEM_INFO_PATH: &str = "api/system/info";

/// Response body of the system-info endpoint.
///
/// Only the nested `SonarQube.Version` field matters; everything else in the
/// body is ignored.
#[derive(Deserialize, Debug)]
struct SystemInfo {
    #[serde(rename = "SonarQube", default)]
    sonarqube: ServerSection,
}

#[derive(Deserialize, Debug, Default)]
struct ServerSection {
    #[serde(rename = "Version")]
    version: Option<String>,
}

/// Fetches the server version over HTTP with Basic authentication.
///
/// Issues a GET against `{server_url}/api/system/info` with an
/// `Authorization: Basic base64(login:password)` header. The header is built
/// unconditionally: token authentication passes the token as `login` with an
/// empty `password`, and anonymous access sends both empty.
///
/// # Example
///
/// ```rust,no_run
/// use sonar_scanner_begin::{HttpVersionSource, VersionSource};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let source = HttpVersionSource::new("https://sonar.example.com", "token", "")
///         .expect("valid server URL");
///     if let Some(version) = source.fetch_version().await {
///         println!("server reports {}", version);
///     }
/// }
/// ```
pub struct HttpVersionSource {
    endpoint: Url,
    login: String,
    password: String,
    client: reqwest::Client,
}

impl HttpVersionSource {
    /// Build a source for the given server base URL and credentials.
    ///
    /// A trailing slash on the base URL is tolerated. Fails with
    /// [`BeginError::InvalidServerUrl`] when the URL does not parse and
    /// [`BeginError::HttpClient`] when the client cannot be initialized.
    pub fn new(server_url: &str, login: &str, password: &str) -> Result<Self, BeginError> {
        let endpoint = format!("{}/{}", server_url.trim_end_matches('/'), SYSTEM_INFO_PATH);
        let endpoint = Url::parse(&endpoint).map_err(|e| BeginError::InvalidServerUrl {
            url: server_url.to_string(),
            message: e.to_string(),
            fix: "Use an absolute http(s) URL for the server".to_string(),
        })?;

        let client = reqwest::Client::builder()
            .user_agent(concat!("sonar-scanner-begin/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BeginError::HttpClient {
                message: e.to_string(),
                fix: "Check the TLS configuration of the build host".to_string(),
            })?;

        Ok(Self {
            endpoint,
            login: login.to_string(),
            password: password.to_string(),
            client,
        })
    }

    /// The resolved endpoint URL this source queries.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl VersionSource for HttpVersionSource {
    async fn fetch_version(&self) -> Option<String> {
        let request = self
            .client
            .get(self.endpoint.clone())
            .basic_auth(&self.login, Some(&self.password));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("system-info request failed: {e}");
                return None;
            }
        };

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("system-info request rejected: {e}");
                return None;
            }
        };

        let info = match response.json::<SystemInfo>().await {
            Ok(info) => info,
            Err(e) => {
                tracing::debug!("system-info body did not decode: {e}");
                return None;
            }
        };

        let version = info.sonarqube.version?.trim().to_string();
        if version.is_empty() {
            return None;
        }
        Some(version)
    }
}
