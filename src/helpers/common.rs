//! Streaming, element-wise stages.
//!
//! All of these handle one element at a time and keep no state across
//! elements (apart from [`Seq::limit`] and [`Seq::skip`] counters).

use crate::node::StageKind;
use crate::stages::{Emitter, FlatMapOk, MapMulti};
use crate::Seq;
use std::any::type_name;

impl<'a, T: 'a> Seq<'a, T> {
    /// Keep elements for which `pred` returns `true`, in their original order.
    ///
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let evens = range_closed(&p, 0, 9).filter(|n: &i64| n % 2 == 0);
    /// assert_eq!(evens.collect().unwrap(), vec![0, 2, 4, 6, 8]);
    /// ```
    #[must_use]
    pub fn filter<P>(self, mut pred: P) -> Seq<'a, T>
    where
        P: FnMut(&T) -> bool + 'a,
    {
        self.chain(StageKind::Filter, type_name::<T>(), move |up| {
            up.filter(move |r| match r {
                Ok(t) => pred(t),
                Err(_) => true,
            })
        })
    }

    /// Transform every element; one output per input.
    #[must_use]
    pub fn map<O, F>(self, mut f: F) -> Seq<'a, O>
    where
        O: 'a,
        F: FnMut(&T) -> O + 'a,
    {
        self.chain(StageKind::Map, type_name::<O>(), move |up| {
            up.map(move |r| r.map(|t| f(&t)))
        })
    }

    /// Expand every element into zero or more outputs.
    ///
    /// The inner iterables are concatenated in input order and each is
    /// consumed lazily.
    ///
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let divisors = range_closed(&p, 2, 4)
    ///     .flat_map(|n: &i64| { let n = *n; (1..=n).filter(move |d| n % d == 0) });
    /// assert_eq!(divisors.collect().unwrap(), vec![1, 2, 1, 3, 1, 2, 4]);
    /// ```
    #[must_use]
    pub fn flat_map<O, U, F>(self, mut f: F) -> Seq<'a, O>
    where
        O: 'a,
        U: IntoIterator<Item = O> + 'a,
        F: FnMut(&T) -> U + 'a,
    {
        self.chain(StageKind::FlatMap, type_name::<O>(), move |up| FlatMapOk {
            upstream: up,
            f: move |t: &T| -> anyhow::Result<U> { Ok(f(t)) },
            front: None::<U::IntoIter>,
        })
    }

    /// Expand every element by pushing outputs into an [`Emitter`].
    ///
    /// `expand` runs exactly once per input element, in source order; each
    /// [`Emitter::emit`] call appends one output in call order. Equivalent to
    /// [`flat_map`](Seq::flat_map) without building a collection per element.
    ///
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let out = range_closed(&p, 0, 3).map_multi(|n: &i64, out: &mut Emitter<i64>| {
    ///     out.emit(*n);
    ///     if n % 2 == 0 {
    ///         out.emit(n * n);
    ///     }
    /// });
    /// assert_eq!(out.collect().unwrap(), vec![0, 0, 1, 2, 4, 3]);
    /// ```
    #[must_use]
    pub fn map_multi<O, F>(self, expand: F) -> Seq<'a, O>
    where
        O: 'a,
        F: FnMut(&T, &mut Emitter<O>) + 'a,
    {
        self.chain(StageKind::MapMulti, type_name::<O>(), move |up| MapMulti {
            upstream: up,
            f: expand,
            emitter: Emitter::new(),
        })
    }

    /// Observe every element as it is traversed, without changing it.
    ///
    /// `observer` runs once per element and only when a terminal actually pulls
    /// the element; an unconsumed sequence never calls it.
    #[must_use]
    pub fn peek<F>(self, mut observer: F) -> Seq<'a, T>
    where
        F: FnMut(&T) + 'a,
    {
        self.chain(StageKind::Peek, type_name::<T>(), move |up| {
            up.inspect(move |r| {
                if let Ok(t) = r {
                    observer(t);
                }
            })
        })
    }

    /// Stop after `n` elements. Upstream is not pulled past the `n`-th.
    #[must_use]
    pub fn limit(self, n: usize) -> Seq<'a, T> {
        self.chain(StageKind::Limit(n), type_name::<T>(), move |mut up| {
            let mut left = n;
            std::iter::from_fn(move || {
                if left == 0 {
                    return None;
                }
                let r = up.next()?;
                if r.is_ok() {
                    left -= 1;
                }
                Some(r)
            })
        })
    }

    /// Drop the first `n` elements. Errors are never skipped.
    #[must_use]
    pub fn skip(self, n: usize) -> Seq<'a, T> {
        let mut left = n;
        self.chain(StageKind::Skip(n), type_name::<T>(), move |up| {
            up.filter(move |r| {
                if r.is_ok() && left > 0 {
                    left -= 1;
                    return false;
                }
                true
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn limit_does_not_pull_past_n() {
        let p = Pipeline::default();
        let mut pulled = 0;
        let out = range_closed(&p, 1, 100)
            .peek(|_| pulled += 1)
            .limit(3)
            .collect()
            .unwrap();
        assert_eq!(out, vec![1, 2, 3]);
        assert_eq!(pulled, 3);
    }

    #[test]
    fn skip_then_limit() {
        let p = Pipeline::default();
        let out = range_closed(&p, 1, 10).skip(2).limit(3).collect().unwrap();
        assert_eq!(out, vec![3, 4, 5]);
    }
}
