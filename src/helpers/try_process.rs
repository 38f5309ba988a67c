//! Fallible stages.
//!
//! User closures that can fail return `Result<_, E>`. The first `Err` is
//! converted into an [`anyhow::Error`] unchanged (it can be downcast back to
//! `E`) and handed to the terminal, which stops pulling. No partial result is
//! returned.
//!
//! ```
//! use ironseq::*;
//!
//! let p = Pipeline::default();
//! let parsed = from_vec(&p, vec!["1", "x", "3"])
//!     .try_map(|s: &&str| s.parse::<i32>())
//!     .collect();
//! assert!(parsed.unwrap_err().downcast_ref::<std::num::ParseIntError>().is_some());
//! ```

use crate::node::StageKind;
use crate::stages::FlatMapOk;
use crate::Seq;
use std::any::type_name;

impl<'a, T: 'a> Seq<'a, T> {
    /// Like [`map`](Seq::map), but `f` may fail.
    #[must_use]
    pub fn try_map<O, E, F>(self, mut f: F) -> Seq<'a, O>
    where
        O: 'a,
        E: Into<anyhow::Error>,
        F: FnMut(&T) -> Result<O, E> + 'a,
    {
        self.chain(StageKind::TryMap, type_name::<O>(), move |up| {
            up.map(move |r| r.and_then(|t| f(&t).map_err(Into::into)))
        })
    }

    /// Like [`filter`](Seq::filter), but `pred` may fail.
    #[must_use]
    pub fn try_filter<E, P>(self, mut pred: P) -> Seq<'a, T>
    where
        E: Into<anyhow::Error>,
        P: FnMut(&T) -> Result<bool, E> + 'a,
    {
        self.chain(StageKind::TryFilter, type_name::<T>(), move |up| {
            up.filter_map(move |r| match r {
                Ok(t) => match pred(&t) {
                    Ok(true) => Some(Ok(t)),
                    Ok(false) => None,
                    Err(e) => Some(Err(e.into())),
                },
                Err(e) => Some(Err(e)),
            })
        })
    }

    /// Like [`flat_map`](Seq::flat_map), but `f` may fail.
    #[must_use]
    pub fn try_flat_map<O, U, E, F>(self, mut f: F) -> Seq<'a, O>
    where
        O: 'a,
        U: IntoIterator<Item = O> + 'a,
        E: Into<anyhow::Error>,
        F: FnMut(&T) -> Result<U, E> + 'a,
    {
        self.chain(StageKind::TryFlatMap, type_name::<O>(), move |up| FlatMapOk {
            upstream: up,
            f: move |t: &T| -> anyhow::Result<U> { f(t).map_err(Into::into) },
            front: None::<U::IntoIter>,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use anyhow::anyhow;

    #[test]
    fn try_filter_error_stops_traversal() {
        let p = Pipeline::default();
        let mut seen = Vec::new();
        let err = range_closed(&p, 1, 10)
            .peek(|n| seen.push(*n))
            .try_filter(|n: &i64| if *n == 4 { Err(anyhow!("bad {n}")) } else { Ok(n % 2 == 0) })
            .collect()
            .unwrap_err();
        assert_eq!(err.to_string(), "bad 4");
        assert_eq!(seen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn try_flat_map_ok_path_matches_flat_map() {
        let p = Pipeline::default();
        let out = range_closed(&p, 1, 3)
            .try_flat_map(|n: &i64| Ok::<_, anyhow::Error>(vec![*n; *n as usize]))
            .collect()
            .unwrap();
        assert_eq!(out, vec![1, 2, 2, 3, 3, 3]);
    }
}
