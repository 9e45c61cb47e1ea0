//! Seam over a single version fetch attempt.

use async_trait::async_trait;

/// A source of the server's raw version string.
///
/// One call is one attempt. Any network-level failure, non-success response,
/// undecodable body, or empty version string yields `None`. Transient errors
/// are swallowed at this layer and no detail is preserved beyond
/// presence/absence. Retrying is the caller's concern
/// (see [`fetch_server_version`](crate::fetch::fetch_server_version)).
///
/// The production implementation is
/// [`HttpVersionSource`](crate::fetch::HttpVersionSource); tests substitute
/// stubs with scripted responses.
#[async_trait]
pub trait VersionSource: Send + Sync {
    /// Attempt to fetch the raw version string once.
    async fn fetch_version(&self) -> Option<String>;
}
