//! Lightweight unique identifier for stages within a [`Pipeline`](crate::pipeline::Pipeline).
//!
//! Every stage a [`Seq`](crate::Seq) adds is recorded in the pipeline graph and
//! assigned a sequential `StageId`. They are opaque handles; only the planner
//! and the testing utilities look at them directly.

use std::fmt::{Display, Formatter};

/// Unique numeric identifier for a stage in a pipeline graph.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct StageId(u64);

impl StageId {
    /// Create a new `StageId` (used internally by the pipeline).
    pub(crate) fn new(v: u64) -> Self {
        Self(v)
    }

    /// Return the underlying numeric value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl Display for StageId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
