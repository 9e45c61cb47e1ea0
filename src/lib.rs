//! # sonar-scanner-begin
//!
//! Begin-step assembly and server version detection for the SonarQube MSBuild
//! scanner in CI pipelines.
//!
//! This crate prepares the *begin* step of an analysis run: it validates the
//! begin-step configuration, assembles the scanner command line, and, when
//! pull-request analysis is enabled, authenticates against the code-quality
//! server, fetches its version (with a single bounded retry), and selects the
//! analysis mode that server understands. The chosen mode is recorded in the
//! shared pipeline context for a later, independently-invoked step.
//!
//! ## Features
//!
//! - `BeginConfig` describing the begin-step inputs
//! - `begin()` / `begin_with_source()` async functions preparing the arguments
//! - `run_begin()` async function launching the scanner begin step
//! - `AnalysisMode` / `ServerVersion` types for the mode-selection rules
//!
//! ## Example
//!
//! ```rust,no_run
//! use sonar_scanner_begin::{begin, run_begin, BeginConfig, PipelineContext, RunOptions};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let config = BeginConfig {
//!         server_url: "https://sonar.example.com".to_string(),
//!         login: "token".to_string(),
//!         project_key: "my-project".to_string(),
//!         project_name: "My Project".to_string(),
//!         project_version: "1.0".to_string(),
//!         pull_request_analysis: true,
//!         ..Default::default()
//!     };
//!
//!     let mut ctx = PipelineContext::new();
//!     let args = begin(&config, &mut ctx).await.expect("begin-step preparation");
//!     run_begin(&args, &RunOptions::default()).await.expect("begin step");
//! }
//! ```

mod analysis_mode;
mod begin;
mod config;
mod errors;
mod fetch;
mod options;
mod pipeline;
mod scanner;
mod server_version;

pub use analysis_mode::{
    AnalysisMode, ANALYSIS_MODE_PROPERTY, REPORT_EXPORT_PATH, REPORT_EXPORT_PATH_PROPERTY,
};
pub use begin::{begin, begin_with_source, select_mode};
pub use config::BeginConfig;
pub use errors::BeginError;
pub use fetch::{fetch_server_version, HttpVersionSource, VersionSource};
pub use options::{FetchOptions, RunOptions};
pub use pipeline::{PipelineContext, INCREMENTAL_MODE_KEY};
pub use scanner::{run_begin, BeginArgs};
pub use server_version::ServerVersion;
