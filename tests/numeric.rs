use anyhow::Result;
use ironseq::testing::*;
use ironseq::*;

#[test]
fn sum_min_max_average() -> Result<()> {
    let p = TestPipeline::new();
    assert_eq!(range_closed(&p, 1, 5).sum()?, 15);
    assert_eq!(range_closed(&p, -3, 4).min()?, Some(-3));
    assert_eq!(range_closed(&p, -3, 4).max()?, Some(4));
    assert_approx_eq!(range_closed(&p, 1, 4).average()?.unwrap(), 2.5);
    Ok(())
}

#[test]
fn empty_sequence_terminals() -> Result<()> {
    let p = TestPipeline::new();
    assert_eq!(range_closed(&p, 1, 0).sum()?, 0);
    assert_eq!(range_closed(&p, 1, 0).min()?, None);
    assert_eq!(range_closed(&p, 1, 0).average()?, None);
    assert_eq!(range_closed(&p, 1, 0).summary_statistics()?, IntSummary::default());
    Ok(())
}

#[test]
fn summary_of_customer_address_counts() -> Result<()> {
    let p = TestPipeline::new();
    let stats = from_vec(&p, sample_customers())
        .map_to_int(|c: &Customer| c.addresses().len() as i64)
        .summary_statistics()?;
    assert_eq!(stats.count, 3);
    assert_eq!(stats.sum, 6);
    assert_eq!(stats.min, Some(1));
    assert_eq!(stats.max, Some(3));
    assert_approx_eq!(stats.average().unwrap(), 2.0);
    Ok(())
}

#[test]
fn generic_terminals() -> Result<()> {
    let p = TestPipeline::new();
    assert_eq!(from_vec(&p, vec!["a", "b", "c"]).count()?, 3);
    assert_eq!(from_vec(&p, Vec::<u8>::new()).first()?, None);
    assert_eq!(
        from_vec(&p, vec!["a", "b", "c"]).fold(String::new(), |acc, s| acc + s)?,
        "abc"
    );
    assert_eq!(range_closed(&p, 1, 4).reduce(|a, b| a * b)?, Some(24));
    assert!(range_closed(&p, 1, 4).any(|n| *n == 3)?);
    assert!(!range_closed(&p, 1, 4).all(|n| *n < 4)?);
    assert_eq!(range_closed(&p, 1, 4).to_vec()?, vec![1, 2, 3, 4]);
    Ok(())
}

#[test]
fn any_stops_at_first_match() -> Result<()> {
    let p = TestPipeline::new();
    let mut pulled = 0;
    let found = range_closed(&p, 1, 100).peek(|_| pulled += 1).any(|n| *n == 3)?;
    assert!(found);
    assert_eq!(pulled, 3);
    Ok(())
}

#[test]
fn raw_iterator_access() {
    let p = TestPipeline::new();
    let doubled: Vec<i64> = range_closed(&p, 1, 3)
        .map(|n: &i64| n * 2)
        .into_iter()
        .map(Result::unwrap)
        .collect();
    assert_eq!(doubled, vec![2, 4, 6]);
}

#[test]
fn overflowing_sum_is_an_error_not_a_panic() {
    let p = TestPipeline::new();
    for result in [
        from_vec(&p, vec![i64::MAX, 1]).sum().map(|_| ()),
        from_vec(&p, vec![i64::MAX, 1]).summary_statistics().map(|_| ()),
        from_vec(&p, vec![i64::MAX, 1]).average().map(|_| ()),
        from_vec(&p, vec![i64::MIN, -1]).sum().map(|_| ()),
    ] {
        let err = result.unwrap_err();
        assert!(matches!(err.downcast_ref::<SeqError>(), Some(SeqError::Overflow(_))));
    }
}

#[test]
fn sum_reaching_the_bounds_is_fine() -> Result<()> {
    let p = TestPipeline::new();
    assert_eq!(from_vec(&p, vec![i64::MAX - 1, 1]).sum()?, i64::MAX);
    assert_eq!(from_vec(&p, vec![i64::MAX, 1, -1]).max()?, Some(i64::MAX));
    Ok(())
}
