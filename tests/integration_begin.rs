//! Integration tests for begin-step preparation.
//!
//! These tests drive the full begin flow with scripted version sources, so
//! they are deterministic and need no running server.

use async_trait::async_trait;
use sonar_scanner_begin::{
    begin_with_source, run_begin, BeginArgs, BeginConfig, BeginError, FetchOptions,
    PipelineContext, RunOptions, VersionSource, INCREMENTAL_MODE_KEY,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Stub source replaying a scripted sequence of fetch results.
struct ScriptedSource {
    responses: Vec<Option<String>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn new(responses: Vec<Option<String>>) -> Self {
        Self {
            responses,
            calls: AtomicUsize::new(0),
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VersionSource for ScriptedSource {
    async fn fetch_version(&self) -> Option<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses.get(call).cloned().flatten()
    }
}

fn config(pull_request_analysis: bool) -> BeginConfig {
    BeginConfig {
        server_url: "https://sonar.example.com".to_string(),
        login: "token".to_string(),
        project_key: "my-project".to_string(),
        project_name: "My Project".to_string(),
        project_version: "1.0".to_string(),
        pull_request_analysis,
        ..Default::default()
    }
}

fn no_delay() -> FetchOptions {
    FetchOptions {
        retry_delay: Duration::ZERO,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_flag_off_skips_fetch_and_context() {
    let source = ScriptedSource::new(vec![Some("7.0".to_string())]);
    let mut ctx = PipelineContext::new();

    let args = begin_with_source(&config(false), &source, &no_delay(), &mut ctx)
        .await
        .unwrap();

    assert_eq!(source.call_count(), 0);
    assert!(ctx.is_empty());
    assert!(!args.contains_property("sonar.analysis.mode"));
}

#[tokio::test]
async fn test_retry_once_selects_issues_mode() {
    // Empty first attempt, 7.0 on the second: the retry must be exercised
    // and 7.0 lands on the issues side of the boundary.
    let source = ScriptedSource::new(vec![None, Some("7.0".to_string())]);
    let mut ctx = PipelineContext::new();

    let args = begin_with_source(&config(true), &source, &no_delay(), &mut ctx)
        .await
        .unwrap();

    assert_eq!(source.call_count(), 2);
    assert!(args
        .iter()
        .any(|a| a == "/d:sonar.analysis.mode=issues"));
    assert!(args
        .iter()
        .any(|a| a == "/d:sonar.report.export.path=sonar-report.json"));
    assert_eq!(ctx.get(INCREMENTAL_MODE_KEY), Some("false"));
    assert_eq!(ctx.len(), 1);
}

#[tokio::test]
async fn test_old_server_selects_incremental_mode() {
    let source = ScriptedSource::new(vec![Some("4.5.7".to_string())]);
    let mut ctx = PipelineContext::new();

    let args = begin_with_source(&config(true), &source, &no_delay(), &mut ctx)
        .await
        .unwrap();

    assert!(args
        .iter()
        .any(|a| a == "/d:sonar.analysis.mode=incremental"));
    assert!(!args.contains_property("sonar.report.export.path"));
    assert_eq!(ctx.get(INCREMENTAL_MODE_KEY), Some("true"));
}

#[tokio::test]
async fn test_fetch_failure_after_retry_is_fatal() {
    let source = ScriptedSource::new(vec![None, None]);
    let mut ctx = PipelineContext::new();

    let err = begin_with_source(&config(true), &source, &no_delay(), &mut ctx)
        .await
        .unwrap_err();

    assert_eq!(source.call_count(), 2);
    match err {
        BeginError::VersionUnavailable { server_url, .. } => {
            assert_eq!(server_url, "https://sonar.example.com");
        }
        other => panic!("expected VersionUnavailable, got {:?}", other),
    }
    // No partial application on failure.
    assert!(ctx.is_empty());
}

#[tokio::test]
async fn test_conflict_aborts_before_any_fetch() {
    let source = ScriptedSource::new(vec![Some("7.0".to_string())]);
    let mut ctx = PipelineContext::new();
    let conflicting = BeginConfig {
        extra_args: vec!["/d:sonar.analysis.mode=preview".to_string()],
        ..config(true)
    };

    let err = begin_with_source(&conflicting, &source, &no_delay(), &mut ctx)
        .await
        .unwrap_err();

    assert!(matches!(err, BeginError::ConfigurationConflict { .. }));
    assert_eq!(source.call_count(), 0);
    assert!(ctx.is_empty());
}

#[tokio::test]
async fn test_unparseable_version_degrades_to_incremental() {
    // An unparseable version becomes 0.0, which selects incremental mode
    // rather than failing.
    let source = ScriptedSource::new(vec![Some("unknown".to_string())]);
    let mut ctx = PipelineContext::new();

    let args = begin_with_source(&config(true), &source, &no_delay(), &mut ctx)
        .await
        .unwrap();

    assert!(args
        .iter()
        .any(|a| a == "/d:sonar.analysis.mode=incremental"));
    assert_eq!(ctx.get(INCREMENTAL_MODE_KEY), Some("true"));
}

#[tokio::test]
async fn test_invalid_config_fails_before_fetch() {
    let source = ScriptedSource::new(vec![Some("7.0".to_string())]);
    let mut ctx = PipelineContext::new();
    let invalid = BeginConfig {
        project_key: String::new(),
        ..config(true)
    };

    let err = begin_with_source(&invalid, &source, &no_delay(), &mut ctx)
        .await
        .unwrap_err();

    assert!(matches!(err, BeginError::MissingSetting { .. }));
    assert_eq!(source.call_count(), 0);
}

#[cfg(unix)]
mod fake_scanner {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    /// Write an executable shell script standing in for the scanner.
    fn write_fake_scanner(dir: &std::path::Path, body: &str) -> PathBuf {
        let path = dir.join("fake-scanner");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[tokio::test]
    async fn test_run_begin_succeeds_with_zero_exit() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = write_fake_scanner(dir.path(), "exit 0");

        let result = run_begin(
            &BeginArgs::default(),
            &RunOptions {
                scanner_path: Some(scanner),
                ..Default::default()
            },
        )
        .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_begin_surfaces_scanner_output_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = write_fake_scanner(
            dir.path(),
            "echo 'begin step output'; echo 'project key rejected' >&2; exit 3",
        );

        let result = run_begin(
            &BeginArgs::default(),
            &RunOptions {
                scanner_path: Some(scanner),
                ..Default::default()
            },
        )
        .await;

        match result {
            Err(BeginError::ScannerFailed {
                exit_code,
                stdout,
                stderr,
                ..
            }) => {
                assert_eq!(exit_code, Some(3));
                assert!(stdout.unwrap().contains("begin step output"));
                assert!(stderr.unwrap().contains("project key rejected"));
            }
            other => panic!("expected ScannerFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_run_begin_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let scanner = write_fake_scanner(dir.path(), "sleep 5");

        let result = run_begin(
            &BeginArgs::default(),
            &RunOptions {
                scanner_path: Some(scanner),
                timeout: Duration::from_millis(100),
            },
        )
        .await;

        assert!(matches!(result, Err(BeginError::Timeout { .. })));
    }
}
