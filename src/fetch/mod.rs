//! Server version fetch submodule.
//!
//! This module contains the internal implementation details for determining
//! the version of the code-quality server. It provides:
//!
//! - `VersionSource`: the seam over a single fetch attempt
//! - `HttpVersionSource`: authenticated GET against the system-info endpoint
//! - `fetch_server_version`: bounded retry over a `VersionSource`

mod client;
mod retry;
mod source;

pub use client::HttpVersionSource;
pub use retry::fetch_server_version;
pub use source::VersionSource;
