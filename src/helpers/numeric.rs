//! Integer sequences: [`Seq::map_to_int`] and the numeric terminals.
//!
//! `map_to_int` behaves exactly like [`map`](Seq::map) with an `i64` output; the
//! point is the terminals that become available on `Seq<i64>`:
//!
//! | terminal | result |
//! |---|---|
//! | [`sum`](Seq::sum) | `i64` (0 when empty) |
//! | [`min`](Seq::min) / [`max`](Seq::max) | `Option<i64>` |
//! | [`average`](Seq::average) | `Option<f64>` |
//! | [`summary_statistics`](Seq::summary_statistics) | [`IntSummary`] |
//!
//! Sums are checked. A sum that leaves the `i64` range ends the terminal with
//! [`SeqError::Overflow`] rather than panicking or wrapping around.

use crate::error::SeqError;
use crate::node::StageKind;
use crate::Seq;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Count, sum, min and max of an integer sequence, gathered in one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntSummary {
    pub count: u64,
    pub sum: i64,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl IntSummary {
    /// Fold one value in.
    ///
    /// # Errors
    /// Returns [`SeqError::Overflow`] if the sum leaves the `i64` range; `self`
    /// is left unchanged.
    pub fn accept(&mut self, v: i64) -> Result<(), SeqError> {
        self.sum = self
            .sum
            .checked_add(v)
            .ok_or_else(|| SeqError::overflow("summary_statistics"))?;
        self.count += 1;
        self.min = Some(self.min.map_or(v, |m| m.min(v)));
        self.max = Some(self.max.map_or(v, |m| m.max(v)));
        Ok(())
    }

    /// Merge another summary into this one.
    ///
    /// # Errors
    /// Returns [`SeqError::Overflow`] if the combined sum leaves the `i64`
    /// range; `self` is left unchanged.
    pub fn combine(&mut self, other: IntSummary) -> Result<(), SeqError> {
        self.sum = self
            .sum
            .checked_add(other.sum)
            .ok_or_else(|| SeqError::overflow("summary_statistics"))?;
        self.count += other.count;
        self.min = match (self.min, other.min) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        self.max = match (self.max, other.max) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };
        Ok(())
    }

    /// Arithmetic mean, `None` for an empty summary.
    #[allow(clippy::cast_precision_loss)]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum as f64 / self.count as f64)
    }
}

impl<'a, T: 'a> Seq<'a, T> {
    /// Map every element to an `i64`.
    ///
    /// ```
    /// use ironseq::*;
    /// let p = Pipeline::default();
    /// let squares = range_closed(&p, 1, 3).map_to_int(|n: &i64| n * n);
    /// assert_eq!(squares.collect().unwrap(), vec![1, 4, 9]);
    /// ```
    #[must_use]
    pub fn map_to_int<F>(self, mut f: F) -> Seq<'a, i64>
    where
        F: FnMut(&T) -> i64 + 'a,
    {
        self.chain(StageKind::MapToInt, "i64", move |up| up.map(move |r| r.map(|t| f(&t))))
    }
}

impl<'a> Seq<'a, i64> {
    /// Sum of all elements.
    ///
    /// # Errors
    /// Propagates the first stage error, or returns [`SeqError::Overflow`] as
    /// soon as the running sum leaves the `i64` range.
    pub fn sum(self) -> Result<i64> {
        let mut acc = 0i64;
        for item in self.iter {
            acc = acc.checked_add(item?).ok_or_else(|| SeqError::overflow("sum"))?;
        }
        Ok(acc)
    }

    /// Smallest element.
    ///
    /// # Errors
    /// Propagates the first stage error.
    pub fn min(self) -> Result<Option<i64>> {
        self.reduce(i64::min)
    }

    /// Largest element.
    ///
    /// # Errors
    /// Propagates the first stage error.
    pub fn max(self) -> Result<Option<i64>> {
        self.reduce(i64::max)
    }

    /// Arithmetic mean.
    ///
    /// # Errors
    /// Same as [`summary_statistics`](Seq::summary_statistics).
    pub fn average(self) -> Result<Option<f64>> {
        Ok(self.summary_statistics()?.average())
    }

    /// Count, sum, min and max in one traversal.
    ///
    /// # Errors
    /// Propagates the first stage error, or returns [`SeqError::Overflow`] when
    /// the sum leaves the `i64` range.
    pub fn summary_statistics(self) -> Result<IntSummary> {
        let mut summary = IntSummary::default();
        for item in self.iter {
            summary.accept(item?)?;
        }
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_with_empty_keeps_bounds() {
        let mut a = IntSummary::default();
        a.accept(3).unwrap();
        a.accept(-2).unwrap();
        a.combine(IntSummary::default()).unwrap();
        assert_eq!(a.min, Some(-2));
        assert_eq!(a.max, Some(3));
        assert_eq!(a.count, 2);
        assert_eq!(a.average(), Some(0.5));
    }

    #[test]
    fn empty_summary_has_no_average() {
        assert_eq!(IntSummary::default().average(), None);
    }

    #[test]
    fn overflowing_accept_leaves_summary_untouched() {
        let mut a = IntSummary::default();
        a.accept(i64::MAX).unwrap();
        assert_eq!(a.accept(1), Err(SeqError::Overflow("summary_statistics")));
        assert_eq!(a.count, 1);
        assert_eq!(a.sum, i64::MAX);

        let mut b = IntSummary::default();
        b.accept(i64::MIN).unwrap();
        assert!(b.combine(IntSummary { count: 1, sum: -1, min: Some(-1), max: Some(-1) }).is_err());
        assert_eq!(b.count, 1);
    }
}
