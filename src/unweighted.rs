//! Equal-probability sampling over the population `1..=n`.

use crate::source::UniformSource;

/// Draws `size` values from `1..=population` with replacement.
///
/// Each draw maps one uniform value through `floor(population * u) + 1`.
/// Consumes exactly `size` draws, independent of the population size.
///
/// # Panics
///
/// Panics if `population` is zero while `size` is positive.
pub fn sample_with_replacement<S: UniformSource + ?Sized>(
    population: u64,
    size: usize,
    source: &mut S,
) -> Vec<u64> {
    assert!(
        population > 0 || size == 0,
        "cannot draw from an empty population"
    );
    let n = population as f64;
    (0..size)
        .map(|_| (n * source.next_unif()).floor() as u64 + 1)
        .collect()
}

/// Draws `size` distinct values from `1..=population` without replacement.
///
/// Keeps a pool of the not-yet-drawn values; each draw picks slot
/// `floor(len * u)` and closes it by swapping in the tail element.
/// Consumes exactly `size` draws.
///
/// # Panics
///
/// Panics if `size > population`.
pub fn sample_without_replacement<S: UniformSource + ?Sized>(
    population: u64,
    size: usize,
    source: &mut S,
) -> Vec<u64> {
    assert!(
        size as u64 <= population,
        "sample size must not exceed the population without replacement"
    );
    // A single draw never revisits the pool, so skip building it.
    if size < 2 {
        return sample_with_replacement(population, size, source);
    }

    let mut pool: Vec<u64> = (1..=population).collect();
    let mut len = pool.len();
    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        let j = (len as f64 * source.next_unif()) as usize;
        out.push(pool[j]);
        len -= 1;
        pool[j] = pool[len];
    }
    out
}
