//! Iterator adapters behind the stages of a [`Seq`](crate::Seq).
//!
//! Every adapter works on `anyhow::Result<T>` items. An `Err` coming from
//! upstream is passed through untouched so the terminal sees it and stops.

use crate::config::SortStrategy;
use anyhow::Result;
use std::cmp::Ordering;
use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

/// Sink handed to a [`map_multi`](crate::Seq::map_multi) expander.
///
/// Each call to [`emit`](Emitter::emit) appends one value to the output, in call
/// order. Values emitted for one input element are yielded before the next
/// input element is pulled.
pub struct Emitter<O> {
    pending: VecDeque<O>,
}

impl<O> Emitter<O> {
    pub(crate) fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Append one value to the output.
    pub fn emit(&mut self, value: O) {
        self.pending.push_back(value);
    }

    /// Append every value of `values`, in order.
    pub fn emit_all(&mut self, values: impl IntoIterator<Item = O>) {
        self.pending.extend(values);
    }
}

/// Flat-map over `Ok` items; the mapper itself may fail.
pub(crate) struct FlatMapOk<I, F, U: IntoIterator> {
    pub(crate) upstream: I,
    pub(crate) f: F,
    pub(crate) front: Option<U::IntoIter>,
}

impl<T, I, F, U> Iterator for FlatMapOk<I, F, U>
where
    I: Iterator<Item = Result<T>>,
    F: FnMut(&T) -> Result<U>,
    U: IntoIterator,
{
    type Item = Result<U::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.front.as_mut() {
                if let Some(o) = inner.next() {
                    return Some(Ok(o));
                }
                self.front = None;
            }
            match self.upstream.next()? {
                Ok(t) => match (self.f)(&t) {
                    Ok(u) => self.front = Some(u.into_iter()),
                    Err(e) => return Some(Err(e)),
                },
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Callback-driven expansion: the expander runs once per input element and
/// pushes its outputs into a shared [`Emitter`].
pub(crate) struct MapMulti<I, F, O> {
    pub(crate) upstream: I,
    pub(crate) f: F,
    pub(crate) emitter: Emitter<O>,
}

impl<T, I, F, O> Iterator for MapMulti<I, F, O>
where
    I: Iterator<Item = Result<T>>,
    F: FnMut(&T, &mut Emitter<O>),
{
    type Item = Result<O>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(o) = self.emitter.pending.pop_front() {
                return Some(Ok(o));
            }
            match self.upstream.next()? {
                Ok(t) => (self.f)(&t, &mut self.emitter),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// First occurrence wins. The seen-set lives as long as the traversal.
pub(crate) struct Distinct<I, T> {
    pub(crate) upstream: I,
    pub(crate) seen: HashSet<T>,
}

impl<I, T> Iterator for Distinct<I, T>
where
    I: Iterator<Item = Result<T>>,
    T: Eq + Hash + Clone,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.upstream.next()? {
                Ok(t) => {
                    if self.seen.insert(t.clone()) {
                        return Some(Ok(t));
                    }
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

enum SortState<I, T> {
    Pending(I),
    Draining(std::vec::IntoIter<T>),
    Done,
}

/// Buffers the whole upstream on the first pull, then yields it in order.
/// An upstream error aborts buffering and is yielded instead.
pub(crate) struct Sorted<I, T, C> {
    state: SortState<I, T>,
    cmp: C,
    strategy: SortStrategy,
}

impl<I, T, C> Sorted<I, T, C> {
    pub(crate) fn new(upstream: I, cmp: C, strategy: SortStrategy) -> Self {
        Self {
            state: SortState::Pending(upstream),
            cmp,
            strategy,
        }
    }
}

impl<I, T, C> Iterator for Sorted<I, T, C>
where
    I: Iterator<Item = Result<T>>,
    C: FnMut(&T, &T) -> Ordering,
{
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.state = match std::mem::replace(&mut self.state, SortState::Done) {
            SortState::Pending(upstream) => {
                let mut buf: Vec<T> = match upstream.collect() {
                    Ok(v) => v,
                    Err(e) => return Some(Err(e)),
                };
                match self.strategy {
                    SortStrategy::Stable => buf.sort_by(&mut self.cmp),
                    SortStrategy::Unstable => buf.sort_unstable_by(&mut self.cmp),
                }
                SortState::Draining(buf.into_iter())
            }
            other => other,
        };
        match &mut self.state {
            SortState::Draining(it) => it.next().map(Ok),
            _ => None,
        }
    }
}

/// Groups `Ok` items into batches of `size`; the last batch may be short.
pub(crate) struct Chunked<I, T> {
    pub(crate) upstream: I,
    pub(crate) size: usize,
    pub(crate) done: bool,
    pub(crate) _t: std::marker::PhantomData<T>,
}

impl<I, T> Iterator for Chunked<I, T>
where
    I: Iterator<Item = Result<T>>,
{
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut batch = Vec::with_capacity(self.size);
        while batch.len() < self.size {
            match self.upstream.next() {
                Some(Ok(t)) => batch.push(t),
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    self.done = true;
                    break;
                }
            }
        }
        if batch.is_empty() { None } else { Some(Ok(batch)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    fn oks<T>(v: Vec<T>) -> impl Iterator<Item = Result<T>> {
        v.into_iter().map(Ok)
    }

    #[test]
    fn sorted_stops_at_first_error() {
        let src = vec![Ok(3), Err(anyhow!("boom")), Ok(1)].into_iter();
        let mut it = Sorted::new(src, |a: &i32, b: &i32| a.cmp(b), SortStrategy::Stable);
        assert_eq!(it.next().unwrap().unwrap_err().to_string(), "boom");
        assert!(it.next().is_none());
    }

    #[test]
    fn stable_sort_keeps_encounter_order_for_ties() {
        let src = oks(vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')]);
        let out: Vec<_> = Sorted::new(src, |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0), SortStrategy::Stable)
            .map(Result::unwrap)
            .collect();
        assert_eq!(out, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }

    #[test]
    fn chunked_yields_short_tail() {
        let it = Chunked {
            upstream: oks(vec![1, 2, 3, 4, 5]),
            size: 2,
            done: false,
            _t: std::marker::PhantomData,
        };
        let out: Vec<_> = it.map(Result::unwrap).collect();
        assert_eq!(out, vec![vec![1, 2], vec![3, 4], vec![5]]);
    }

    #[test]
    fn map_multi_can_emit_nothing() {
        let it = MapMulti {
            upstream: oks(vec![1, 2, 3]),
            f: |_: &i32, _: &mut Emitter<i32>| {},
            emitter: Emitter::new(),
        };
        assert_eq!(it.count(), 0);
    }
}
