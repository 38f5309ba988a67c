//! Canned inputs shared by tests and demos.

use crate::Customer;

/// The three sample customers, in declaration order: `Foo` (2 addresses),
/// `Bar` (1) and `Baz` (3).
///
/// ```
/// use ironseq::testing::sample_customers;
/// let cs = sample_customers();
/// assert_eq!(cs.iter().map(|c| c.addresses().len()).sum::<usize>(), 6);
/// ```
#[must_use]
pub fn sample_customers() -> Vec<Customer> {
    vec![
        Customer::new("Foo", ["Foo'nun 1. adresi", "Foo'nun 2. adresi"]),
        Customer::new("Bar", ["Bar'in 1. adresi"]),
        Customer::new(
            "Baz",
            ["Baz'in 1. adresi", "Baz'in 2. adresi", "Baz'in 3. adresi"],
        ),
    ]
}

/// Integers with runs and late repeats: `[1, 2, 2, 3, 4, 4, 4, 4, 5, 4, 1]`.
#[must_use]
pub fn repeated_ints() -> Vec<i64> {
    vec![1, 2, 2, 3, 4, 4, 4, 4, 5, 4, 1]
}

/// Divisors `d` of `n` with `1 <= d <= n`, ascending.
#[must_use]
pub fn divisors(n: i64) -> Vec<i64> {
    (1..=n).filter(|d| n % d == 0).collect()
}
