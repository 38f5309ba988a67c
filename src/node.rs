//! Stage descriptors recorded in the pipeline graph.
//!
//! A [`Node`] describes one stage of a [`Seq`](crate::Seq): what kind of stage it
//! is and a human label. It carries no element data and no closures; those live
//! in the `Seq`'s iterator chain. The planner walks nodes to explain a plan.

use std::fmt::{Display, Formatter};

/// What a stage does to the element stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// In-memory source (vector, iterator or range).
    Source { len_hint: Option<usize> },
    Filter,
    Map,
    MapToInt,
    FlatMap,
    MapMulti,
    /// Keeps a seen-set for the whole traversal.
    Distinct,
    /// Natural-order sort; buffers everything.
    Sorted,
    /// Comparator or key sort; buffers everything.
    SortedBy,
    Peek,
    TryMap,
    TryFilter,
    TryFlatMap,
    Limit(usize),
    Skip(usize),
    /// Fixed-size batches; buffers one batch.
    Chunked(usize),
    /// Pass-through stage added by the testing debug helpers.
    Debug,
}

impl StageKind {
    /// Short, stable name used in plan output.
    pub fn name(&self) -> &'static str {
        match self {
            StageKind::Source { .. } => "Source",
            StageKind::Filter => "Filter",
            StageKind::Map => "Map",
            StageKind::MapToInt => "MapToInt",
            StageKind::FlatMap => "FlatMap",
            StageKind::MapMulti => "MapMulti",
            StageKind::Distinct => "Distinct",
            StageKind::Sorted => "Sorted",
            StageKind::SortedBy => "SortedBy",
            StageKind::Peek => "Peek",
            StageKind::TryMap => "TryMap",
            StageKind::TryFilter => "TryFilter",
            StageKind::TryFlatMap => "TryFlatMap",
            StageKind::Limit(_) => "Limit",
            StageKind::Skip(_) => "Skip",
            StageKind::Chunked(_) => "Chunked",
            StageKind::Debug => "Debug",
        }
    }

    /// Whether the stage must see its whole input before yielding anything.
    pub fn is_barrier(&self) -> bool {
        matches!(self, StageKind::Sorted | StageKind::SortedBy)
    }

    /// Whether the stage keeps state across elements of one traversal.
    pub fn is_stateful(&self) -> bool {
        matches!(
            self,
            StageKind::Distinct | StageKind::Sorted | StageKind::SortedBy | StageKind::Chunked(_)
        )
    }

    /// Whether the stage can fail on its own (user closure returns `Result`).
    pub fn is_fallible(&self) -> bool {
        matches!(
            self,
            StageKind::TryMap | StageKind::TryFilter | StageKind::TryFlatMap
        )
    }

    /// Rough relative cost per element, used by plan explanations.
    pub fn cost_hint(&self) -> u8 {
        match self {
            StageKind::Source { .. } | StageKind::Limit(_) | StageKind::Skip(_) => 1,
            StageKind::Sorted | StageKind::SortedBy => 20,
            StageKind::Distinct => 5,
            StageKind::FlatMap | StageKind::TryFlatMap | StageKind::MapMulti => 8,
            _ => 2,
        }
    }
}

impl Display for StageKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StageKind::Limit(n) | StageKind::Skip(n) | StageKind::Chunked(n) => {
                write!(f, "{}({n})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}

/// One recorded stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub kind: StageKind,
    /// Label given by the caller, or the element type for plain stages.
    pub label: String,
}

impl Node {
    pub(crate) fn new(kind: StageKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
        }
    }
}
