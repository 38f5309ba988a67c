use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

fn pairs() -> Vec<(u8, char)> {
    vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (2, 'e')]
}

#[test]
fn default_sort_is_stable() -> Result<()> {
    let p = TestPipeline::new();
    let out = from_vec(&p, pairs())
        .sorted_by(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0))
        .map(|r: &(u8, char)| r.1)
        .collect()?;
    assert_collections_equal(&out, &['b', 'd', 'a', 'c', 'e']);
    Ok(())
}

#[test]
fn unstable_sort_still_orders_keys() -> Result<()> {
    let p = Pipeline::with_config(PipelineConfig::default().with_sort(SortStrategy::Unstable));
    let out = from_vec(&p, pairs())
        .sorted_by_key(|r: &(u8, char)| r.0)
        .collect()?;
    let keys: Vec<u8> = out.iter().map(|r| r.0).collect();
    assert_collections_equal(&keys, &[1, 1, 2, 2, 2]);
    assert_collections_unordered_equal(&out, &pairs());
    Ok(())
}

#[test]
fn config_from_json() -> Result<()> {
    let cfg = PipelineConfig::from_json_str(r#"{ "sort": "unstable", "trace_stages": true }"#)?;
    assert_eq!(cfg.sort, SortStrategy::Unstable);
    assert!(cfg.trace_stages);

    let p = Pipeline::with_config(cfg.clone());
    assert_eq!(p.config(), cfg);
    Ok(())
}

#[test]
fn tracing_stages_does_not_change_results() -> Result<()> {
    let p = Pipeline::with_config(PipelineConfig::default().with_trace_stages(true));
    let out = from_vec(&p, repeated_ints()).distinct().sorted().collect()?;
    assert_collections_equal(&out, &[1, 2, 3, 4, 5]);
    Ok(())
}
