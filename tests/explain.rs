//! Tests for plan building and explanation.

use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn explain_lists_stages_in_order() -> Result<()> {
    let p = TestPipeline::new();
    let seq = from_vec(&p, vec![3, 1, 2, 3])
        .filter(|n: &i32| *n > 1)
        .distinct()
        .sorted()
        .peek(|_| {});

    let explanation = seq.explain()?;
    assert_eq!(
        explanation.kinds(),
        vec![
            StageKind::Source { len_hint: Some(4) },
            StageKind::Filter,
            StageKind::Distinct,
            StageKind::Sorted,
            StageKind::Peek,
        ]
    );
    let c = &explanation.cost_estimate;
    assert_eq!(c.total_ops, 4);
    assert_eq!(c.barriers, 1);
    assert_eq!(c.stateful_ops, 2);
    assert_eq!(c.streaming_ops, 2);
    assert_eq!(c.source_size, Some(4));
    println!("{explanation}");

    // explaining does not consume
    assert_eq!(seq.collect()?, vec![2, 3]);
    Ok(())
}

#[test]
fn build_plan_matches_seq_explain() -> Result<()> {
    let p = TestPipeline::new();
    let seq = range_closed(&p, 1, 10)
        .try_map(|n: &i64| Ok::<_, std::io::Error>(n + 1))
        .limit(3);
    let plan = build_plan(&p, seq.stage_id())?;
    assert_eq!(plan.chain.len(), 3);
    let explanation = plan.explain();
    assert_eq!(explanation.cost_estimate.fallible_ops, 1);
    assert_eq!(explanation.kinds()[2], StageKind::Limit(3));
    Ok(())
}

#[test]
fn branches_share_the_graph_but_explain_separately() -> Result<()> {
    let p = TestPipeline::new();
    let a = from_vec(&p, vec![1, 2]).map(|n: &i32| n + 1);
    let b = from_vec(&p, vec!["x"]).map(|s: &&str| s.len()).sorted();

    assert_eq!(p.node_count(), 5);
    assert_eq!(p.edge_count(), 3);
    assert_eq!(a.explain()?.steps.len(), 2);
    assert_eq!(b.explain()?.steps.len(), 3);
    Ok(())
}

#[test]
fn display_mentions_every_stage() -> Result<()> {
    let p = TestPipeline::new();
    let seq = range_closed(&p, 0, 5)
        .map_multi(|n: &i64, out: &mut Emitter<i64>| out.emit(*n))
        .chunked(2)?;
    let text = seq.explain()?.to_string();
    assert!(text.contains("Source"));
    assert!(text.contains("MapMulti"));
    assert!(text.contains("Chunked(2)"));
    assert!(text.contains("source=6"));
    Ok(())
}

#[test]
fn unknown_stage_is_reported() {
    let p = TestPipeline::new();
    let other = Pipeline::default();
    let seq = from_vec(&other, vec![1]).map(|n: &i32| *n);
    let err = build_plan(&p, seq.stage_id()).unwrap_err();
    assert!(matches!(err.downcast_ref::<SeqError>(), Some(SeqError::UnknownStage(_))));
}
