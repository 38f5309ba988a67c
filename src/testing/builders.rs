//! Test data builders.

use std::ops::RangeInclusive;

/// Fluent builder for test inputs.
///
/// ```
/// use ironseq::testing::TestDataBuilder;
///
/// let data = TestDataBuilder::new()
///     .add_range(1..=3)
///     .add_repeated(4, 2)
///     .add_value(1)
///     .build();
/// assert_eq!(data, vec![1, 2, 3, 4, 4, 1]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestDataBuilder<T> {
    data: Vec<T>,
}

impl<T> TestDataBuilder<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    #[must_use]
    pub fn add_value(mut self, value: T) -> Self {
        self.data.push(value);
        self
    }

    #[must_use]
    pub fn add_values(mut self, values: impl IntoIterator<Item = T>) -> Self {
        self.data.extend(values);
        self
    }

    /// Add `value` `count` times.
    #[must_use]
    pub fn add_repeated(mut self, value: T, count: usize) -> Self
    where
        T: Clone,
    {
        self.data.extend(std::iter::repeat_n(value, count));
        self
    }

    /// Add one value per call of `f(i)` for `i` in `0..count`.
    #[must_use]
    pub fn add_generated(mut self, count: usize, f: impl FnMut(usize) -> T) -> Self {
        self.data.extend((0..count).map(f));
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<T> {
        self.data
    }
}

impl TestDataBuilder<i64> {
    /// Add every integer of `range`.
    #[must_use]
    pub fn add_range(mut self, range: RangeInclusive<i64>) -> Self {
        self.data.extend(range);
        self
    }
}

/// `start..=end` as a `Vec<i64>`.
#[must_use]
pub fn sequential_data(start: i64, end: i64) -> Vec<i64> {
    (start..=end).collect()
}
