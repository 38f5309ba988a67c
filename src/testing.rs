//! Testing utilities for ironseq sequences.
//!
//! - **Assertions** comparing sequence output with expected values
//! - **Data builders** for ranges, repeats and hand-picked values
//! - **Fixtures**: the sample customers and a few canned inputs
//! - **Debug stages** that print what flows through a sequence
//!
//! # Quick Start
//!
//! ```
//! use ironseq::*;
//! use ironseq::testing::*;
//!
//! let p = TestPipeline::new();
//! let names = from_vec(&p, sample_customers())
//!     .sorted()
//!     .map(|c: &Customer| c.name().to_string())
//!     .collect()
//!     .unwrap();
//! assert_collections_equal(&names, &["Bar".to_string(), "Baz".into(), "Foo".into()]);
//! assert_eq!(p.node_count(), 3);
//! ```

mod assertions;
mod builders;
mod debug;
mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use debug::*;
pub use fixtures::*;

use crate::Pipeline;

/// A [`Pipeline`] with a few graph inspection helpers for tests.
#[derive(Clone, Default)]
pub struct TestPipeline {
    pipeline: Pipeline,
}

impl TestPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stages recorded so far (sources included).
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.pipeline.snapshot().0.len()
    }

    /// Number of upstream-to-downstream links recorded so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.pipeline.snapshot().1.len()
    }

    /// Print the recorded stages and links.
    pub fn debug_print_graph(&self) {
        let (nodes, edges) = self.pipeline.snapshot();
        let mut ids: Vec<_> = nodes.keys().copied().collect();
        ids.sort();
        println!("Pipeline Graph: {} stages, {} links", nodes.len(), edges.len());
        for id in ids {
            let n = &nodes[&id];
            println!("    {id} {} ({})", n.kind, n.label);
        }
        for (from, to) in &edges {
            println!("    {from} -> {to}");
        }
    }
}

// Use a TestPipeline wherever a &Pipeline is expected.
impl std::ops::Deref for TestPipeline {
    type Target = Pipeline;

    fn deref(&self) -> &Self::Target {
        &self.pipeline
    }
}

impl AsRef<Pipeline> for TestPipeline {
    fn as_ref(&self) -> &Pipeline {
        &self.pipeline
    }
}
