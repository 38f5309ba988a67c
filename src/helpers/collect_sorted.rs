//! Sorting stages for [`Seq`].
//!
//! - [`Seq::sorted`] - natural order (`T: Ord`).
//! - [`Seq::sorted_by`] - caller-supplied comparator.
//! - [`Seq::sorted_by_key`] / [`Seq::sorted_by_f64_key`] - order by a derived key.
//! - [`Seq::collect_sorted`] - terminal shortcut for `sorted().collect()`.
//!
//! Every sorting stage is a barrier: it pulls its whole input on the first
//! request and only then yields. How ties are broken is decided by the
//! pipeline's [`SortStrategy`](crate::SortStrategy); the default keeps
//! encounter order.

use crate::node::StageKind;
use crate::stages::Sorted;
use crate::Seq;
use anyhow::Result;
use ordered_float::OrderedFloat;
use std::any::type_name;
use std::cmp::Ordering;

impl<'a, T: 'a + Ord> Seq<'a, T> {
    /// Sort by the elements' natural order.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let out = from_vec(&p, vec![3, 6, 1, 5]).sorted();
    /// assert_eq!(out.collect().unwrap(), vec![1, 3, 5, 6]);
    /// ```
    #[must_use]
    pub fn sorted(self) -> Self {
        let strategy = self.pipeline.config().sort;
        self.chain(StageKind::Sorted, type_name::<T>(), move |up| {
            Sorted::new(up, <T as Ord>::cmp, strategy)
        })
    }

    /// Collect every element and return them in natural order.
    ///
    /// # Errors
    /// Propagates the first stage error.
    pub fn collect_sorted(self) -> Result<Vec<T>> {
        self.sorted().collect()
    }
}

impl<'a, T: 'a> Seq<'a, T> {
    /// Sort with a comparator.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let out = from_vec(&p, vec![3, 6, 1, 5]).sorted_by(|a: &i32, b: &i32| b.cmp(a));
    /// assert_eq!(out.collect().unwrap(), vec![6, 5, 3, 1]);
    /// ```
    #[must_use]
    pub fn sorted_by<C>(self, cmp: C) -> Self
    where
        C: FnMut(&T, &T) -> Ordering + 'a,
    {
        let strategy = self.pipeline.config().sort;
        self.chain(StageKind::SortedBy, "comparator", move |up| {
            Sorted::new(up, cmp, strategy)
        })
    }

    /// Sort by a key extracted from each element.
    ///
    /// The key function may be called more than once per element.
    #[must_use]
    pub fn sorted_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Ord,
        F: FnMut(&T) -> K + 'a,
    {
        let strategy = self.pipeline.config().sort;
        self.chain(StageKind::SortedBy, type_name::<K>(), move |up| {
            Sorted::new(up, move |a: &T, b: &T| key(a).cmp(&key(b)), strategy)
        })
    }

    /// Sort by a floating-point key. NaN sorts after every other value.
    #[must_use]
    pub fn sorted_by_f64_key<F>(self, mut key: F) -> Self
    where
        F: FnMut(&T) -> f64 + 'a,
    {
        let strategy = self.pipeline.config().sort;
        self.chain(StageKind::SortedBy, "f64", move |up| {
            Sorted::new(
                up,
                move |a: &T, b: &T| OrderedFloat(key(a)).cmp(&OrderedFloat(key(b))),
                strategy,
            )
        })
    }
}
