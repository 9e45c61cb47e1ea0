//! Begin-step execution.
//!
//! This module provides the [`run_begin`] function that launches the scanner
//! begin step with the assembled arguments, a timeout, and failure mapping.

use crate::errors::BeginError;
use crate::options::RunOptions;
use crate::scanner::args::BeginArgs;
use crate::scanner::locate::find_scanner;
use std::process::Stdio;
use tokio::process::Command;
use tokio::time::timeout;

/// Run the scanner begin step with the assembled arguments.
///
/// This function:
/// 1. Resolves the scanner executable (an explicit [`RunOptions::scanner_path`]
///    wins over the PATH lookup)
/// 2. Spawns `<scanner> begin <args>` with captured output
/// 3. Enforces [`RunOptions::timeout`]
/// 4. Maps permission, timeout, and exit-status failures to [`BeginError`]
///
/// # Example
///
/// ```rust,no_run
/// use sonar_scanner_begin::{run_begin, BeginArgs, BeginConfig, RunOptions};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = BeginConfig {
///         server_url: "https://sonar.example.com".to_string(),
///         project_key: "my-project".to_string(),
///         project_name: "My Project".to_string(),
///         project_version: "1.0".to_string(),
///         ..Default::default()
///     };
///     let args = BeginArgs::from_config(&config).expect("valid config");
///
///     match run_begin(&args, &RunOptions::default()).await {
///         Ok(()) => println!("begin step completed"),
///         Err(e) => eprintln!("{}. Fix: {}", e, e.fix_suggestion()),
///     }
/// }
/// ```
pub async fn run_begin(args: &BeginArgs, options: &RunOptions) -> Result<(), BeginError> {
    let scanner = match &options.scanner_path {
        Some(path) => path.clone(),
        None => find_scanner().ok_or_else(|| BeginError::ScannerNotFound {
            fix: "Install the SonarQube scanner for MSBuild or set scanner_path explicitly"
                .to_string(),
        })?,
    };

    tracing::info!(
        scanner = %scanner.display(),
        args = ?args.redacted(),
        "running scanner begin step"
    );

    let mut command = Command::new(&scanner);
    command
        .arg("begin")
        .args(args.iter())
        .kill_on_drop(true)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let result = timeout(options.timeout, command.output()).await;

    let output = match result {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                return Err(BeginError::PermissionDenied {
                    message: e.to_string(),
                    fix: "Check the execute permission on the scanner binary".to_string(),
                });
            }
            return Err(BeginError::ScannerFailed {
                message: e.to_string(),
                exit_code: None,
                stdout: None,
                stderr: None,
                fix: "Check the scanner installation and try again".to_string(),
            });
        }
        Err(_) => {
            return Err(BeginError::Timeout {
                duration: options.timeout,
                fix: format!(
                    "Begin step timed out after {:?}. Try a longer timeout or check server connectivity.",
                    options.timeout
                ),
            });
        }
    };

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        return Err(BeginError::ScannerFailed {
            message: format!("Scanner exited with code {:?}", output.status.code()),
            exit_code: output.status.code(),
            stdout: Some(stdout),
            stderr: Some(stderr),
            fix: "See scanner output above for details".to_string(),
        });
    }

    tracing::debug!("scanner begin step completed");
    Ok(())
}
