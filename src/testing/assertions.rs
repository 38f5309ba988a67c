//! Assertions for sequence output.

use crate::Seq;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert `actual` equals `expected` element by element, in order.
///
/// # Panics
/// On a length mismatch or the first differing index.
///
/// ```
/// use ironseq::testing::assert_collections_equal;
/// assert_collections_equal(&[0, 2, 4], &[0, 2, 4]);
/// ```
pub fn assert_collections_equal<T: Debug + PartialEq>(actual: &[T], expected: &[T]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length differs: expected {} got {}\n  expected: {expected:?}\n  actual:   {actual:?}",
        expected.len(),
        actual.len()
    );
    if let Some(i) = actual.iter().zip(expected).position(|(a, e)| a != e) {
        panic!(
            "first difference at index {i}: expected {:?} got {:?}\n  expected: {expected:?}\n  actual:   {actual:?}",
            expected[i], actual[i]
        );
    }
}

/// Assert both slices hold the same elements with the same multiplicities,
/// in any order.
///
/// # Panics
/// When some element occurs a different number of times.
pub fn assert_collections_unordered_equal<T: Debug + Eq + Hash>(actual: &[T], expected: &[T]) {
    fn tally<T: Eq + Hash>(v: &[T]) -> HashMap<&T, usize> {
        let mut m = HashMap::new();
        for t in v {
            *m.entry(t).or_insert(0) += 1;
        }
        m
    }
    let (a, e) = (tally(actual), tally(expected));
    if a != e {
        let missing: Vec<_> = e.keys().filter(|k| a.get(*k) != e.get(*k)).collect();
        panic!(
            "contents differ (ignoring order); mismatched counts for {missing:?}\n  expected: {expected:?}\n  actual:   {actual:?}"
        );
    }
}

/// Collect `seq` and compare with `expected` in order.
///
/// # Panics
/// When the sequence fails or its output differs from `expected`.
pub fn assert_seq_yields<'a, T: Debug + PartialEq + 'a>(seq: Seq<'a, T>, expected: &[T]) {
    match seq.collect() {
        Ok(v) => assert_collections_equal(&v, expected),
        Err(e) => panic!("sequence failed: {e:#}"),
    }
}

/// # Panics
/// When any element fails `predicate`.
pub fn assert_all<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, bad)) = collection.iter().enumerate().find(|(_, t)| !predicate(t)) {
        panic!("element {i} ({bad:?}) does not satisfy the predicate; collection: {collection:?}");
    }
}

/// # Panics
/// When no element satisfies `predicate`.
pub fn assert_any<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    assert!(
        collection.iter().any(predicate),
        "no element satisfies the predicate; collection: {collection:?}"
    );
}

/// # Panics
/// When some element satisfies `predicate`.
pub fn assert_none<T: Debug>(collection: &[T], predicate: impl Fn(&T) -> bool) {
    if let Some((i, hit)) = collection.iter().enumerate().find(|(_, t)| predicate(t)) {
        panic!("element {i} ({hit:?}) unexpectedly satisfies the predicate");
    }
}

/// # Panics
/// When `collection.len() != expected_size`.
pub fn assert_collection_size<T>(collection: &[T], expected_size: usize) {
    assert_eq!(
        collection.len(),
        expected_size,
        "expected {expected_size} elements, got {}",
        collection.len()
    );
}

/// # Panics
/// When `element` is absent.
pub fn assert_contains<T: Debug + PartialEq>(collection: &[T], element: &T) {
    assert!(
        collection.contains(element),
        "{element:?} not found in {collection:?}"
    );
}

/// Assert two floats are within `eps` of each other (default `1e-10`).
#[macro_export]
macro_rules! assert_approx_eq {
    ($actual:expr, $expected:expr) => {
        $crate::assert_approx_eq!($actual, $expected, 1e-10)
    };
    ($actual:expr, $expected:expr, $eps:expr) => {{
        let (actual, expected, eps): (f64, f64, f64) = ($actual, $expected, $eps);
        let diff = (actual - expected).abs();
        assert!(
            diff <= eps,
            "assertion failed: `(left ≈ right)`\n  left: `{actual:?}`\n right: `{expected:?}`\n  diff: `{diff:?}`"
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unordered_respects_multiplicity() {
        assert_collections_unordered_equal(&[1, 2, 2], &[2, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "mismatched counts")]
    fn unordered_catches_missing_duplicate() {
        assert_collections_unordered_equal(&[1, 2, 2], &[1, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "first difference at index 1")]
    fn ordered_reports_index() {
        assert_collections_equal(&[1, 3], &[1, 2]);
    }
}
