pub(crate) mod batches;
pub(crate) mod collect_sorted;
pub(crate) mod common;
pub(crate) mod distinct;
pub(crate) mod numeric;
pub(crate) mod stdlib;
pub(crate) mod try_process;

// Only re-export files with top-level items
pub use numeric::IntSummary;
pub use stdlib::*;
