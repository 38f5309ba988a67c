//! Exact deduplication.
//!
//! [`Seq::distinct`] keeps the first occurrence of every element and drops
//! later duplicates, preserving encounter order. Equality comes from the
//! element's `Eq + Hash` impls, so for composite types it is whatever the type
//! defines (for [`Customer`](crate::Customer), name and addresses together).

use crate::node::StageKind;
use crate::stages::Distinct;
use crate::Seq;
use std::any::type_name;
use std::collections::HashSet;
use std::hash::Hash;

impl<'a, T> Seq<'a, T>
where
    T: 'a + Eq + Hash + Clone,
{
    /// Remove duplicates, keeping first occurrences in encounter order.
    ///
    /// The seen-set grows with the number of distinct elements and is dropped
    /// with the sequence.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let out = from_vec(&p, vec![1, 2, 2, 3, 4, 4, 4, 4, 5, 4, 1]).distinct();
    /// assert_eq!(out.collect().unwrap(), vec![1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn distinct(self) -> Self {
        self.chain(StageKind::Distinct, type_name::<T>(), |up| Distinct {
            upstream: up,
            seen: HashSet::<T>::new(),
        })
    }
}

impl<'a, T: 'a> Seq<'a, T> {
    /// Remove elements whose `key` was already seen; the first one per key wins.
    #[must_use]
    pub fn distinct_by_key<K, F>(self, mut key: F) -> Self
    where
        K: Eq + Hash + 'a,
        F: FnMut(&T) -> K + 'a,
    {
        let mut seen = HashSet::new();
        self.chain(StageKind::Distinct, type_name::<K>(), move |up| {
            up.filter(move |r| match r {
                Ok(t) => seen.insert(key(t)),
                Err(_) => true,
            })
        })
    }
}
