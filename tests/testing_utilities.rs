//! Integration tests demonstrating the testing utilities.

use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn assert_seq_yields_collects_and_compares() {
    let p = TestPipeline::new();
    assert_seq_yields(range_closed(&p, 1, 3).map(|n: &i64| n * n), &[1, 4, 9]);
}

#[test]
#[should_panic(expected = "sequence failed")]
fn assert_seq_yields_reports_failures() {
    let p = TestPipeline::new();
    assert_seq_yields(
        range_closed(&p, 1, 3).try_map(|_: &i64| Err::<i64, _>(std::fmt::Error)),
        &[],
    );
}

#[test]
fn predicate_assertions() -> Result<()> {
    let p = TestPipeline::new();
    let out = range_closed(&p, 0, 9).filter(|n: &i64| n % 3 == 0).collect()?;
    assert_all(&out, |n| n % 3 == 0);
    assert_any(&out, |n| *n == 9);
    assert_none(&out, |n| *n == 4);
    assert_contains(&out, &6);
    Ok(())
}

#[test]
fn builder_and_fixtures() {
    let data = TestDataBuilder::new()
        .add_values([10, 20])
        .add_generated(3, |i| i as i64)
        .build();
    assert_eq!(data, vec![10, 20, 0, 1, 2]);
    assert_eq!(sequential_data(3, 5), vec![3, 4, 5]);
    assert_eq!(divisors(12), vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(sample_customers().len(), 3);
}

#[test]
fn graph_counts_follow_stages() {
    let p = TestPipeline::new();
    assert_eq!(p.node_count(), 0);
    let seq = range_closed(&p, 1, 3).filter(|_| true).map(|n: &i64| *n);
    assert_eq!(p.node_count(), 3);
    assert_eq!(p.edge_count(), 2);
    p.debug_print_graph();
    drop(seq);
}

#[test]
fn debug_stages_are_pass_through() -> Result<()> {
    let p = TestPipeline::new();
    let out = range_closed(&p, 1, 20)
        .debug_inspect("in")
        .debug_sample("sample", 3)
        .filter(|n: &i64| n % 5 == 0)
        .debug_count("fives")
        .collect()?;
    assert_collections_equal(&out, &[5, 10, 15, 20]);
    Ok(())
}
