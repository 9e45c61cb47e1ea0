//! Begin-step orchestration.

use crate::analysis_mode::AnalysisMode;
use crate::config::BeginConfig;
use crate::errors::BeginError;
use crate::fetch::{fetch_server_version, HttpVersionSource, VersionSource};
use crate::options::FetchOptions;
use crate::pipeline::PipelineContext;
use crate::scanner::BeginArgs;
use crate::server_version::ServerVersion;

/// Select the analysis mode for a server version, honoring the feature flag.
///
/// Returns `None` when pull-request analysis is disabled: no arguments are
/// appended and nothing is recorded, for any version input. With the flag on,
/// the mode is chosen by the 5.2 boundary.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::{select_mode, AnalysisMode, ServerVersion};
///
/// assert_eq!(select_mode(ServerVersion::new(5, 6), false), None);
/// assert_eq!(
///     select_mode(ServerVersion::new(5, 6), true),
///     Some(AnalysisMode::Issues)
/// );
/// ```
pub fn select_mode(version: ServerVersion, pull_request_analysis: bool) -> Option<AnalysisMode> {
    if !pull_request_analysis {
        return None;
    }
    Some(AnalysisMode::for_server(version))
}

/// Prepare the begin-step arguments, fetching the server version through the
/// given source.
///
/// # Flow
///
/// 1. Validate the configuration and assemble the base arguments
/// 2. If pull-request analysis is disabled, return the arguments as-is
/// 3. Check for a pre-existing mode argument; a conflict aborts before any
///    network call is made
/// 4. Fetch the server version with the bounded retry policy; an absent
///    result is fatal (`VersionUnavailable`)
/// 5. Parse the version leniently, select the mode, append its fragments,
///    and record the choice in the pipeline context
///
/// On failure no mode arguments are applied and the context is left
/// untouched.
///
/// # Arguments
///
/// * `config` - The begin-step configuration
/// * `source` - Where the server version comes from (HTTP in production,
///   stubs in tests)
/// * `options` - The fetch retry policy
/// * `ctx` - The shared pipeline context, written only when mode selection
///   runs
pub async fn begin_with_source(
    config: &BeginConfig,
    source: &dyn VersionSource,
    options: &FetchOptions,
    ctx: &mut PipelineContext,
) -> Result<BeginArgs, BeginError> {
    let mut args = BeginArgs::from_config(config)?;

    if !config.pull_request_analysis {
        tracing::debug!("pull-request analysis disabled, skipping mode selection");
        return Ok(args);
    }

    // The conflict must abort the whole operation before any network call.
    args.ensure_no_mode_conflict()?;

    let raw = fetch_server_version(source, options).await.ok_or_else(|| {
        BeginError::VersionUnavailable {
            server_url: config.server_url.clone(),
            fix: "Check that the server is reachable and the credentials are valid".to_string(),
        }
    })?;

    let version = ServerVersion::parse(&raw);
    let mode = AnalysisMode::for_server(version);
    tracing::info!(
        server_version = %version,
        mode = mode.display_name(),
        "selected analysis mode"
    );

    args.apply_mode(mode);
    mode.record(ctx);

    Ok(args)
}

/// Prepare the begin-step arguments against the configured server.
///
/// Convenience wrapper around [`begin_with_source`] that builds an
/// [`HttpVersionSource`] from the configuration and uses the default
/// [`FetchOptions`].
///
/// # Example
///
/// ```rust,no_run
/// use sonar_scanner_begin::{begin, BeginConfig, PipelineContext};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = BeginConfig {
///         server_url: "https://sonar.example.com".to_string(),
///         project_key: "my-project".to_string(),
///         project_name: "My Project".to_string(),
///         project_version: "1.0".to_string(),
///         pull_request_analysis: true,
///         ..Default::default()
///     };
///
///     let mut ctx = PipelineContext::new();
///     match begin(&config, &mut ctx).await {
///         Ok(args) => println!("begin {}", args.as_slice().join(" ")),
///         Err(e) => eprintln!("{}. Fix: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn begin(
    config: &BeginConfig,
    ctx: &mut PipelineContext,
) -> Result<BeginArgs, BeginError> {
    let source = HttpVersionSource::new(&config.server_url, &config.login, &config.password)?;
    begin_with_source(config, &source, &FetchOptions::default(), ctx).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_mode_disabled_is_noop_for_any_version() {
        for version in [
            ServerVersion::new(0, 0),
            ServerVersion::new(4, 9),
            ServerVersion::new(5, 2),
            ServerVersion::new(9, 9),
        ] {
            assert_eq!(select_mode(version, false), None);
        }
    }

    #[test]
    fn test_select_mode_enabled_follows_boundary() {
        assert_eq!(
            select_mode(ServerVersion::new(5, 2), true),
            Some(AnalysisMode::Issues)
        );
        assert_eq!(
            select_mode(ServerVersion::new(5, 1), true),
            Some(AnalysisMode::Incremental)
        );
        assert_eq!(
            select_mode(ServerVersion::new(6, 0), true),
            Some(AnalysisMode::Issues)
        );
        assert_eq!(
            select_mode(ServerVersion::new(4, 9), true),
            Some(AnalysisMode::Incremental)
        );
    }

    #[test]
    fn test_select_mode_is_idempotent() {
        let version = ServerVersion::new(5, 6);
        assert_eq!(select_mode(version, true), select_mode(version, true));
    }
}
