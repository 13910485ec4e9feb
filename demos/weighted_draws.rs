//! Weighted draws from one population, with and without replacement.
//!
//! Same skewed weight vector, same seed: with replacement the heavy
//! elements show up over and over, without replacement each one can be
//! taken at most once and the tail gets pulled in.

use urn::{sample, RngSource, SampleArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Power-law weights: a few heavy elements, a long light tail.
    let weights: Vec<f64> = (0..50)
        .map(|i| 1.0 / (1.0 + i as f64).powf(2.0))
        .collect();
    let population = weights.len() as f64;
    let size = 10.0;

    let mut source = RngSource::seeded(7);
    let with = sample(
        SampleArgs::new(population, size)
            .with_replacement(true)
            .with_weights(weights.clone()),
        &mut source,
    )?;

    let mut source = RngSource::seeded(7);
    let without = sample(
        SampleArgs::new(population, size).with_weights(weights.clone()),
        &mut source,
    )?;

    println!("weights[0..10]:");
    for (i, w) in weights.iter().take(10).enumerate() {
        println!("  element {:2}  w={:.6}", i + 1, w);
    }
    println!();
    println!("with replacement:    {with:?}");
    println!("without replacement: {without:?}");

    Ok(())
}
