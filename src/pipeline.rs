//! Shared pipeline context for cross-step communication.
//!
//! Build pipelines pass values between otherwise-independent steps through a
//! string-keyed variable store. This module models that store as an explicit
//! [`PipelineContext`] object passed by reference into the components that
//! need it, rather than as ambient global state.

use std::collections::HashMap;

/// Context key recording whether incremental mode was selected.
///
/// Written once per invocation when pull-request analysis runs, with value
/// `"true"` or `"false"`. A later, independently-invoked pipeline step reads
/// this to decide how to publish analysis results.
pub const INCREMENTAL_MODE_KEY: &str = "MSBuild.SonarQube.Internal.IsIncrementalAnalysis";

/// A string-keyed, string-valued store shared across pipeline steps.
///
/// Writes are fire-and-forget: this crate only ever sets
/// [`INCREMENTAL_MODE_KEY`] and never reads it back. Invocations are not
/// expected to run concurrently within the same pipeline execution, so no
/// locking is involved.
///
/// # Example
///
/// ```rust
/// use sonar_scanner_begin::PipelineContext;
///
/// let mut ctx = PipelineContext::new();
/// ctx.set("some.key", "value");
/// assert_eq!(ctx.get("some.key"), Some("value"));
/// assert!(ctx.contains("some.key"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    values: HashMap<String, String>,
}

impl PipelineContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Read a variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check whether a variable is set.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of variables in the context.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context holds no variables.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_context() {
        let ctx = PipelineContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.len(), 0);
        assert_eq!(ctx.get("anything"), None);
        assert!(!ctx.contains("anything"));
    }

    #[test]
    fn test_set_and_get() {
        let mut ctx = PipelineContext::new();
        ctx.set(INCREMENTAL_MODE_KEY, "true");

        assert_eq!(ctx.get(INCREMENTAL_MODE_KEY), Some("true"));
        assert!(ctx.contains(INCREMENTAL_MODE_KEY));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_set_replaces_previous_value() {
        let mut ctx = PipelineContext::new();
        ctx.set("key", "first");
        ctx.set("key", "second");

        assert_eq!(ctx.get("key"), Some("second"));
        assert_eq!(ctx.len(), 1);
    }
}
