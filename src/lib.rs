//! # ironseq
//!
//! **Lazy, single-pass sequence pipelines** for in-memory data.
//!
//! A [`Seq<T>`] is built from a source, extended with stages, and run by a
//! terminal. Nothing happens until the terminal is called, and a `Seq` can be
//! consumed only once (every stage and terminal takes `self`).
//!
//! ## Quick Start
//!
//! ```
//! use ironseq::*;
//! # use anyhow::Result;
//!
//! # fn main() -> Result<()> {
//! let p = Pipeline::default();
//!
//! let out = range_closed(&p, 1, 3)
//!     .map(|n: &i64| format!("{n}: {}", n * n))
//!     .collect()?;
//! assert_eq!(out, vec!["1: 1", "2: 4", "3: 9"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Concepts
//!
//! ### Pipeline
//!
//! A [`Pipeline`] is the context shared by every sequence created from it. It
//! records the stage graph (used by [`Seq::explain`]) and carries a
//! [`PipelineConfig`]. It never holds element data.
//!
//! ### Stages
//!
//! #### Streaming (one element at a time)
//! - [`filter`](Seq::filter), [`map`](Seq::map), [`map_to_int`](Seq::map_to_int)
//! - [`flat_map`](Seq::flat_map) - zero or more outputs per input, from an iterable
//! - [`map_multi`](Seq::map_multi) - zero or more outputs per input, pushed into an [`Emitter`]
//! - [`peek`](Seq::peek) - observe elements as they are traversed
//! - [`limit`](Seq::limit), [`skip`](Seq::skip)
//!
//! #### Stateful
//! - [`distinct`](Seq::distinct) - first occurrence wins, encounter order kept
//! - [`sorted`](Seq::sorted), [`sorted_by`](Seq::sorted_by), [`sorted_by_key`](Seq::sorted_by_key) - buffer everything, then yield
//! - [`chunked`](Seq::chunked) - fixed-size batches
//!
//! #### Fallible
//! - [`try_map`](Seq::try_map), [`try_filter`](Seq::try_filter), [`try_flat_map`](Seq::try_flat_map)
//!
//! ### Terminals
//!
//! [`collect`](Seq::collect), [`for_each`](Seq::for_each), [`count`](Seq::count),
//! [`first`](Seq::first), [`fold`](Seq::fold), [`reduce`](Seq::reduce),
//! [`any`](Seq::any), [`all`](Seq::all), [`collect_sorted`](Seq::collect_sorted)
//! and, on `Seq<i64>`, [`sum`](Seq::sum), [`min`](Seq::min), [`max`](Seq::max),
//! [`average`](Seq::average), [`summary_statistics`](Seq::summary_statistics).
//!
//! ## Errors
//!
//! Terminals return [`anyhow::Result`]. A failure raised by a fallible stage's
//! closure reaches the terminal unchanged and stops the traversal. Errors the
//! library raises itself are [`SeqError`]s.
//!
//! ## Module Overview
//!
//! - [`seq`] - the `Seq` type and its terminals
//! - [`pipeline`] - stage graph and configuration holder
//! - [`planner`] - plan building and explanation
//! - [`config`] - `PipelineConfig`
//! - [`customer`] - the `Customer` sample entity
//! - [`testing`] - assertions, fixtures and debug stages for tests

pub mod config;
pub mod customer;
pub mod error;
pub mod helpers;
pub mod node;
pub mod pipeline;
pub mod planner;
pub mod seq;
pub mod stage_id;
pub mod stages;
pub mod testing;

pub use config::{PipelineConfig, SortStrategy};
pub use customer::{Customer, CustomerBuilder};
pub use error::SeqError;
pub use helpers::*;
pub use node::{Node, StageKind};
pub use pipeline::Pipeline;
pub use planner::{build_plan, ExecutionExplanation, Plan};
pub use seq::{Seq, SeqIter};
pub use stage_id::StageId;
pub use stages::Emitter;
