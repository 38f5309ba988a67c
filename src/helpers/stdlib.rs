//! Sources: turning ordinary Rust data into a [`Seq`].
//!
//! ### Overview
//! - [`from_vec`] -- owns a `Vec<T>` and yields its elements in order.
//! - [`from_iter`] -- wraps any `IntoIterator`, including borrowing ones such as
//!   `slice.iter()`; nothing is pulled until a terminal runs.
//! - [`range_closed`] -- the integers `start..=end` as `i64`.
//!
//! ### Example
//! ```
//! use ironseq::*;
//!
//! let p = Pipeline::default();
//! let words = vec!["alpha", "beta"];
//! let lens = from_iter(&p, words.iter()).map(|w: &&&str| w.len());
//! assert_eq!(lens.collect().unwrap(), vec![5, 4]);
//!
//! let squares = range_closed(&p, 1, 4).map(|n: &i64| n * n);
//! assert_eq!(squares.collect().unwrap(), vec![1, 4, 9, 16]);
//! ```

use crate::{Pipeline, Seq};

/// Create a [`Seq<T>`] that owns `data`.
pub fn from_vec<'a, T: 'a>(p: &Pipeline, data: Vec<T>) -> Seq<'a, T> {
    let len = data.len();
    Seq::source(p, Some(len), data.into_iter())
}

/// Create a [`Seq<T>`] over any iterable.
///
/// The iterator is driven lazily, so a borrowing source stays borrowed until
/// the sequence is consumed or dropped.
pub fn from_iter<'a, T, I>(p: &Pipeline, iter: I) -> Seq<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    let it = iter.into_iter();
    let len_hint = match it.size_hint() {
        (lo, Some(hi)) if lo == hi => Some(lo),
        _ => None,
    };
    Seq::source(p, len_hint, it)
}

/// The integers from `start` to `end_inclusive`. Empty when `start > end_inclusive`.
pub fn range_closed<'a>(p: &Pipeline, start: i64, end_inclusive: i64) -> Seq<'a, i64> {
    from_iter(p, start..=end_inclusive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_range_is_empty() {
        let p = Pipeline::default();
        assert!(range_closed(&p, 5, 1).collect().unwrap().is_empty());
    }

    #[test]
    fn single_point_range() {
        let p = Pipeline::default();
        assert_eq!(range_closed(&p, 7, 7).collect().unwrap(), vec![7]);
    }
}
