use crate::node::{Node, StageKind};
use crate::pipeline::Pipeline;
use crate::planner::{build_plan, ExecutionExplanation};
use crate::stage_id::StageId;
use anyhow::Result;
use std::any::type_name;

/// Boxed lazy element stream behind a [`Seq`].
pub type SeqIter<'a, T> = Box<dyn Iterator<Item = Result<T>> + 'a>;

/// A lazy, single-pass sequence of `T`.
///
/// Stages such as [`filter`](Seq::filter) or [`map`](Seq::map) consume the
/// `Seq` and return a new one; nothing runs until a terminal such as
/// [`collect`](Seq::collect) is called. A `Seq` can only be consumed once.
///
/// `'a` bounds what the stages may borrow: the source (e.g. `slice.iter()`)
/// and any locals captured by `FnMut` closures.
pub struct Seq<'a, T> {
    pub(crate) pipeline: Pipeline,
    pub(crate) id: StageId,
    pub(crate) iter: SeqIter<'a, T>,
}

impl<'a, T: 'a> Seq<'a, T> {
    /// Register a source node and wrap `iter`.
    pub(crate) fn source<I>(p: &Pipeline, len_hint: Option<usize>, iter: I) -> Self
    where
        I: Iterator<Item = T> + 'a,
    {
        let id = p.insert_node(Node::new(StageKind::Source { len_hint }, type_name::<T>()));
        Seq {
            pipeline: p.clone(),
            id,
            iter: Box::new(iter.map(Ok::<T, anyhow::Error>)),
        }
    }

    /// Record a stage after this one and build its iterator from ours.
    pub(crate) fn chain<O, I>(
        self,
        kind: StageKind,
        label: impl Into<String>,
        build: impl FnOnce(SeqIter<'a, T>) -> I,
    ) -> Seq<'a, O>
    where
        O: 'a,
        I: Iterator<Item = Result<O>> + 'a,
    {
        let id = self.pipeline.insert_node(Node::new(kind, label));
        self.pipeline.connect(self.id, id);
        let iter = build(self.iter);
        let iter: SeqIter<'a, O> = if self.pipeline.config().trace_stages {
            Box::new(iter.inspect(move |r| tracing::trace!(stage = %id, ok = r.is_ok(), "element")))
        } else {
            Box::new(iter)
        };
        Seq {
            pipeline: self.pipeline,
            id,
            iter,
        }
    }

    /// Id of the last stage of this sequence.
    pub fn stage_id(&self) -> StageId {
        self.id
    }

    /// The pipeline this sequence records its stages in.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Describe the stages from the source up to this sequence.
    ///
    /// # Errors
    /// Fails only if the stage graph is inconsistent.
    pub fn explain(&self) -> Result<ExecutionExplanation> {
        Ok(build_plan(&self.pipeline, self.id)?.explain())
    }
}

// ---- terminals ----
impl<'a, T: 'a> Seq<'a, T> {
    /// Run the pipeline and gather every element in order.
    ///
    /// # Errors
    /// Returns the first error raised by a fallible stage; traversal stops there.
    pub fn collect(self) -> Result<Vec<T>> {
        tracing::debug!(stage = %self.id, "collect");
        let out = self.iter.collect::<Result<Vec<T>>>()?;
        tracing::debug!(stage = %self.id, len = out.len(), "collect done");
        Ok(out)
    }

    /// Alias of [`collect`](Seq::collect).
    ///
    /// # Errors
    /// See [`collect`](Seq::collect).
    pub fn to_vec(self) -> Result<Vec<T>> {
        self.collect()
    }

    /// Run the pipeline, handing each element to `f`.
    ///
    /// # Errors
    /// Returns the first stage error; `f` is not called for later elements.
    pub fn for_each<F>(self, mut f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        for item in self.iter {
            f(item?);
        }
        Ok(())
    }

    /// Number of elements.
    ///
    /// # Errors
    /// Returns the first stage error.
    pub fn count(self) -> Result<usize> {
        let mut n = 0usize;
        for item in self.iter {
            item?;
            n += 1;
        }
        Ok(n)
    }

    /// First element, pulling nothing past it.
    ///
    /// # Errors
    /// Returns a stage error hit before the first element.
    pub fn first(mut self) -> Result<Option<T>> {
        self.iter.next().transpose()
    }

    /// Left fold starting from `init`.
    ///
    /// # Errors
    /// Returns the first stage error.
    pub fn fold<A, F>(self, init: A, mut f: F) -> Result<A>
    where
        F: FnMut(A, T) -> A,
    {
        let mut acc = init;
        for item in self.iter {
            acc = f(acc, item?);
        }
        Ok(acc)
    }

    /// Fold with the first element as the seed; `None` when empty.
    ///
    /// # Errors
    /// Returns the first stage error.
    pub fn reduce<F>(self, mut f: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        self.fold(None, |acc, t| match acc {
            None => Some(t),
            Some(a) => Some(f(a, t)),
        })
    }

    /// Whether any element matches; stops at the first match.
    ///
    /// # Errors
    /// Returns a stage error hit before a match was found.
    pub fn any<P>(self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.iter {
            if pred(&item?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether every element matches; stops at the first mismatch.
    ///
    /// # Errors
    /// Returns a stage error hit before a mismatch was found.
    pub fn all<P>(self, mut pred: P) -> Result<bool>
    where
        P: FnMut(&T) -> bool,
    {
        for item in self.iter {
            if !pred(&item?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'a, T: 'a> IntoIterator for Seq<'a, T> {
    type Item = Result<T>;
    type IntoIter = SeqIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter
    }
}
