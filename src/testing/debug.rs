//! Debug stages for inspecting sequences during tests.
//!
//! These are pass-through stages: they never change the elements, and like
//! every stage they only print when the sequence is actually traversed.

use crate::node::StageKind;
use crate::Seq;
use std::fmt::Debug;

/// Only this many elements are printed by [`SeqDebugExt::debug_inspect`].
const INSPECT_LIMIT: usize = 10;

/// Extension trait adding debug stages to [`Seq`].
///
/// ```
/// use ironseq::*;
/// use ironseq::testing::SeqDebugExt;
///
/// let p = Pipeline::default();
/// let out = range_closed(&p, 1, 3)
///     .debug_inspect("input")
///     .map(|n: &i64| n * 10)
///     .debug_count("after map")
///     .collect()
///     .unwrap();
/// assert_eq!(out, vec![10, 20, 30]);
/// ```
pub trait SeqDebugExt<'a, T> {
    /// Print each element (up to a limit) to stderr as it passes.
    #[must_use]
    fn debug_inspect(self, label: &str) -> Seq<'a, T>;

    /// Print the number of elements that passed once upstream is exhausted.
    #[must_use]
    fn debug_count(self, label: &str) -> Seq<'a, T>;

    /// Print the first `n` elements to stderr.
    #[must_use]
    fn debug_sample(self, label: &str, n: usize) -> Seq<'a, T>;
}

impl<'a, T: Debug + 'a> SeqDebugExt<'a, T> for Seq<'a, T> {
    fn debug_inspect(self, label: &str) -> Seq<'a, T> {
        let label = label.to_string();
        let mut seen = 0usize;
        self.chain(StageKind::Debug, format!("inspect:{label}"), move |up| {
            up.inspect(move |r| {
                match r {
                    Ok(t) if seen < INSPECT_LIMIT => eprintln!("[Debug: {label}] [{seen}]: {t:?}"),
                    Ok(_) if seen == INSPECT_LIMIT => eprintln!("[Debug: {label}] ..."),
                    Ok(_) => {}
                    Err(e) => eprintln!("[Debug: {label}] error: {e:#}"),
                }
                seen += 1;
            })
        })
    }

    fn debug_count(self, label: &str) -> Seq<'a, T> {
        let label = label.to_string();
        self.chain(StageKind::Debug, format!("count:{label}"), move |mut up| {
            let mut n = 0usize;
            let mut reported = false;
            std::iter::from_fn(move || match up.next() {
                Some(r) => {
                    n += usize::from(r.is_ok());
                    Some(r)
                }
                None => {
                    if !reported {
                        reported = true;
                        eprintln!("[Debug: {label}] Count: {n} elements");
                    }
                    None
                }
            })
        })
    }

    fn debug_sample(self, label: &str, n: usize) -> Seq<'a, T> {
        let label = label.to_string();
        let mut i = 0usize;
        self.chain(StageKind::Debug, format!("sample:{label}"), move |up| {
            up.inspect(move |r| {
                if let Ok(t) = r {
                    if i < n {
                        eprintln!("[Debug: {label}] sample [{i}]: {t:?}");
                    }
                    i += 1;
                }
            })
        })
    }
}
