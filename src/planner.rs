//! Plan building and explanation.
//!
//! [`build_plan`] walks the recorded stage graph backwards from a terminal stage
//! to its source and returns the linear chain. [`Plan::explain`] turns that
//! chain into an [`ExecutionExplanation`] that says, per step, whether the
//! stage streams, keeps state, or buffers its whole input.

use crate::error::SeqError;
use crate::node::{Node, StageKind};
use crate::{Pipeline, StageId};
use anyhow::Result;
use std::fmt::{Display, Formatter, Result as FormatResult};

/// A linear chain of stages, source first.
#[derive(Clone, Debug)]
pub struct Plan {
    pub chain: Vec<(StageId, Node)>,
}

/// One step of an explained plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplainStep {
    /// Position in the chain, starting at 0 for the source.
    pub step: usize,
    pub stage: StageId,
    pub kind: StageKind,
    pub label: String,
    pub is_barrier: bool,
    pub is_stateful: bool,
    pub cost_hint: u8,
}

/// Totals over the whole chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CostEstimate {
    pub total_ops: usize,
    pub streaming_ops: usize,
    pub stateful_ops: usize,
    pub barriers: usize,
    pub fallible_ops: usize,
    /// Element count of the source, when known up front.
    pub source_size: Option<usize>,
}

/// Human- and test-friendly description of a plan.
#[derive(Clone, Debug)]
pub struct ExecutionExplanation {
    pub steps: Vec<ExplainStep>,
    pub cost_estimate: CostEstimate,
}

impl ExecutionExplanation {
    /// Stage kinds in execution order.
    pub fn kinds(&self) -> Vec<StageKind> {
        self.steps.iter().map(|s| s.kind).collect()
    }
}

impl Display for ExecutionExplanation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        writeln!(f, "EXECUTION PLAN")?;
        writeln!(f, "{:-<60}", "")?;
        for s in &self.steps {
            let mode = if s.is_barrier {
                "barrier"
            } else if s.is_stateful {
                "stateful"
            } else {
                "streaming"
            };
            writeln!(
                f,
                "{:>3}  {:<12} {:<10} cost={:<3} {}",
                s.step,
                s.kind.to_string(),
                mode,
                s.cost_hint,
                s.label
            )?;
        }
        writeln!(f, "{:-<60}", "")?;
        let c = &self.cost_estimate;
        writeln!(
            f,
            "ops={} streaming={} stateful={} barriers={} fallible={} source={}",
            c.total_ops,
            c.streaming_ops,
            c.stateful_ops,
            c.barriers,
            c.fallible_ops,
            c.source_size
                .map_or_else(|| "unknown".to_string(), |n| n.to_string())
        )
    }
}

impl Plan {
    /// Summarize the chain.
    #[must_use]
    pub fn explain(&self) -> ExecutionExplanation {
        let mut cost = CostEstimate::default();
        let mut steps = Vec::with_capacity(self.chain.len());

        for (idx, (id, node)) in self.chain.iter().enumerate() {
            match node.kind {
                StageKind::Source { len_hint } => cost.source_size = len_hint,
                kind => {
                    cost.total_ops += 1;
                    if kind.is_barrier() {
                        cost.barriers += 1;
                    }
                    if kind.is_stateful() {
                        cost.stateful_ops += 1;
                    } else {
                        cost.streaming_ops += 1;
                    }
                    if kind.is_fallible() {
                        cost.fallible_ops += 1;
                    }
                }
            }
            steps.push(ExplainStep {
                step: idx,
                stage: *id,
                kind: node.kind,
                label: node.label.clone(),
                is_barrier: node.kind.is_barrier(),
                is_stateful: node.kind.is_stateful(),
                cost_hint: node.kind.cost_hint(),
            });
        }

        ExecutionExplanation {
            steps,
            cost_estimate: cost,
        }
    }
}

/// Linearize the chain ending at `terminal`.
///
/// # Errors
/// Returns [`SeqError::UnknownStage`] if a stage on the path is missing.
pub fn build_plan(p: &Pipeline, terminal: StageId) -> Result<Plan> {
    let mut chain = Vec::new();
    let mut cur = Some(terminal);
    while let Some(id) = cur {
        chain.push((id, p.node(id)?));
        cur = p.upstream(id);
    }
    chain.reverse();

    let starts_at_source = matches!(
        chain.first(),
        Some((_, Node { kind: StageKind::Source { .. }, .. }))
    );
    if !starts_at_source {
        let id = chain.first().map_or(terminal, |(id, _)| *id);
        return Err(SeqError::UnknownStage(id.raw()).into());
    }
    Ok(Plan { chain })
}
