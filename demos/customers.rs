//! Walks the sample customers through map, flat_map, map_multi and sorted,
//! printing each intermediate result.
//!
//! Run with `RUST_LOG=ironseq=debug` to see terminal events.

use anyhow::Result;
use ironseq::testing::sample_customers;
use ironseq::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let p = Pipeline::default();
    let customers = sample_customers();

    let names = from_iter(&p, customers.iter())
        .map(|c: &&Customer| c.name().to_string())
        .collect()?;
    println!("customer names           = {names:?}");

    let nested = from_iter(&p, customers.iter())
        .map(|c: &&Customer| c.addresses().to_vec())
        .collect()?;
    println!("addresses with map       = {nested:?}");

    let flat = from_iter(&p, customers.iter())
        .flat_map(|c: &&Customer| c.addresses().to_vec())
        .collect()?;
    println!("addresses with flat_map  = {flat:?}");

    let several = from_iter(&p, customers.iter())
        .map_multi(|c: &&Customer, out: &mut Emitter<String>| {
            if c.addresses().len() >= 2 {
                out.emit(c.name().to_string());
            }
        })
        .collect()?;
    println!("two or more addresses    = {several:?}");

    let ordered = from_vec(&p, customers).sorted().collect()?;
    println!("sorted customers:");
    for c in &ordered {
        println!("  {c}");
    }
    Ok(())
}
