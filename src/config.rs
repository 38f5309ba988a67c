//! Pipeline configuration.
//!
//! A [`PipelineConfig`] is attached to a [`Pipeline`](crate::Pipeline) and read by
//! the stages that have a choice to make. It can be built in code or loaded
//! from JSON:
//!
//! ```
//! use ironseq::{PipelineConfig, SortStrategy};
//!
//! let cfg = PipelineConfig::from_json_str(r#"{ "sort": "unstable" }"#).unwrap();
//! assert_eq!(cfg.sort, SortStrategy::Unstable);
//! assert!(!cfg.trace_stages);
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How `sorted*` stages order elements that compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortStrategy {
    /// Equal elements keep their encounter order.
    #[default]
    Stable,
    /// Equal elements may come out in any order.
    Unstable,
}

/// Settings shared by every sequence built from one pipeline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Tie-breaking policy for sorting stages.
    pub sort: SortStrategy,
    /// Emit a `trace` event for every element a stage handles.
    pub trace_stages: bool,
}

impl PipelineConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    /// Returns an error if `s` is not valid JSON or has fields of the wrong type.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing pipeline config")
    }

    /// Builder-style setter for [`sort`](Self::sort).
    #[must_use]
    pub fn with_sort(mut self, sort: SortStrategy) -> Self {
        self.sort = sort;
        self
    }

    /// Builder-style setter for [`trace_stages`](Self::trace_stages).
    #[must_use]
    pub fn with_trace_stages(mut self, on: bool) -> Self {
        self.trace_stages = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg = PipelineConfig::from_json_str("{}").unwrap();
        assert_eq!(cfg, PipelineConfig::default());
        assert_eq!(cfg.sort, SortStrategy::Stable);
    }

    #[test]
    fn bad_json_is_an_error() {
        let err = PipelineConfig::from_json_str(r#"{ "sort": "sideways" }"#).unwrap_err();
        assert!(err.to_string().contains("pipeline config"));
    }
}
