//! Prints the plan of a few sequences before running them.

use anyhow::Result;
use ironseq::testing::{divisors, repeated_ints};
use ironseq::*;

fn main() -> Result<()> {
    println!("=== Streaming only ===\n");
    let p = Pipeline::default();
    let evens = range_closed(&p, 0, 9).filter(|n: &i64| n % 2 == 0);
    println!("{}", evens.explain()?);
    println!("result: {:?}\n", evens.collect()?);

    println!("=== Stateful and barrier stages ===\n");
    let p = Pipeline::with_config(PipelineConfig::default().with_sort(SortStrategy::Unstable));
    let seq = from_vec(&p, repeated_ints())
        .distinct()
        .flat_map(|n: &i64| divisors(*n))
        .sorted_by(|a: &i64, b: &i64| b.cmp(a))
        .limit(5);
    println!("{}", seq.explain()?);
    println!("result: {:?}", seq.collect()?);
    Ok(())
}
