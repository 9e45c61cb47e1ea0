//! Bounded retry over a version source.

use crate::fetch::source::VersionSource;
use crate::options::FetchOptions;
use tokio::time::sleep;

/// Fetch the server's raw version string with a bounded retry.
///
/// Attempts the source up to [`FetchOptions::max_attempts`] times, waiting
/// [`FetchOptions::retry_delay`] between attempts. With the defaults this is
/// the retry-once policy: one attempt, a one-second wait, and one more
/// attempt. Whatever the final attempt yields is returned; `None` after the
/// policy is exhausted means the caller must treat the server as unreachable.
///
/// # Example
///
/// ```rust,no_run
/// use sonar_scanner_begin::{fetch_server_version, FetchOptions, HttpVersionSource, ServerVersion};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let source = HttpVersionSource::new("https://sonar.example.com", "", "")
///         .expect("valid server URL");
///     match fetch_server_version(&source, &FetchOptions::default()).await {
///         Some(raw) => println!("server is at {}", ServerVersion::parse(&raw)),
///         None => eprintln!("server version unavailable"),
///     }
/// }
/// ```
pub async fn fetch_server_version(
    source: &dyn VersionSource,
    options: &FetchOptions,
) -> Option<String> {
    let attempts = options.max_attempts.max(1);

    for attempt in 1..=attempts {
        if let Some(version) = source.fetch_version().await {
            tracing::debug!(version = %version, attempt, "fetched server version");
            return Some(version);
        }

        if attempt < attempts {
            tracing::warn!(
                attempt,
                "server version fetch came back empty, retrying after {:?}",
                options.retry_delay
            );
            sleep(options.retry_delay).await;
        }
    }

    None
}
