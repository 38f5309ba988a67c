//! Fixed-size batching.
//!
//! [`Seq::chunked`] groups consecutive elements into `Vec<T>` batches, which
//! lets an expensive downstream step work on slices instead of single items.

use crate::error::SeqError;
use crate::node::StageKind;
use crate::stages::Chunked;
use crate::Seq;
use anyhow::Result;
use std::any::type_name;
use std::marker::PhantomData;

impl<'a, T: 'a> Seq<'a, T> {
    /// Group elements into batches of `size`; the last batch may be shorter.
    ///
    /// # Errors
    /// Returns [`SeqError::InvalidArgument`] if `size` is zero. The check happens
    /// here, when the stage is added, not during traversal.
    ///
    /// # Example
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let batches = range_closed(&p, 1, 5).chunked(2).unwrap();
    /// assert_eq!(batches.collect().unwrap(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn chunked(self, size: usize) -> Result<Seq<'a, Vec<T>>> {
        if size == 0 {
            return Err(SeqError::invalid_argument("size", "batch size must be at least 1").into());
        }
        Ok(self.chain(StageKind::Chunked(size), type_name::<T>(), move |up| Chunked {
            upstream: up,
            size,
            done: false,
            _t: PhantomData,
        }))
    }
}
