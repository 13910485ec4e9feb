//! Probability-weighted sampling.
//!
//! Both samplers take an already-normalized probability vector (see
//! [`checked_normalize`]), pair it with the original indices `1..=n`, and
//! process elements in ascending weight order as produced by
//! [`heap::sort_ascending`](crate::heap::sort_ascending). With
//! replacement, each draw maps through the cumulative distribution of the
//! sorted weights; without replacement, each draw walks the remaining mass
//! and the chosen slot is shifted away, shrinking the active region. All
//! work happens on private copies; the caller's vectors are never mutated.

use crate::error::SampleError;
use crate::heap;
use crate::source::UniformSource;

/// An element is "heavy" when its expected count `n * p` exceeds this.
const HEAVY_EXPECTED_COUNT: f64 = 0.1;

/// Most heavy elements [`sample_with_replacement`] accepts.
///
/// The linear cumulative scan stays cheap only while large weights are
/// rare; beyond this bound an alias-table sampler would be required, which
/// this crate does not provide. Requests over the bound are rejected at
/// validation time with [`SampleError::UnsupportedHeavyWeights`].
pub const MAX_HEAVY_WEIGHTS: usize = 200;

/// Validates `weights` and returns a normalized private copy.
///
/// Entries are checked in index order, finiteness before sign, and the
/// first offending entry is reported. At least one entry must be strictly
/// positive; without replacement there must be at least `size` strictly
/// positive entries. The sum runs over the positive entries in index order
/// with plain `f64` accumulation, so every platform rounds identically.
///
/// # Example
///
/// ```
/// let probs = urn::weighted::checked_normalize(&[2.0, 3.0, 5.0], 1, true).unwrap();
/// assert_eq!(probs, vec![0.2, 0.3, 0.5]);
/// ```
pub fn checked_normalize(
    weights: &[f64],
    size: usize,
    replace: bool,
) -> Result<Vec<f64>, SampleError> {
    let mut positive = 0usize;
    let mut sum = 0.0_f64;
    for &w in weights {
        if !w.is_finite() {
            return Err(SampleError::NonFiniteProbability);
        }
        if w < 0.0 {
            return Err(SampleError::NegativeProbability);
        }
        if w > 0.0 {
            sum += w;
            positive += 1;
        }
    }
    if positive == 0 || (!replace && size > positive) {
        return Err(SampleError::TooFewPositiveProbabilities);
    }
    let mut probs = weights.to_vec();
    for p in &mut probs {
        *p /= sum;
    }
    Ok(probs)
}

/// Number of heavy elements in a normalized probability vector.
pub(crate) fn heavy_count(probs: &[f64]) -> usize {
    let n = probs.len() as f64;
    probs.iter().filter(|&&p| n * p > HEAVY_EXPECTED_COUNT).count()
}

/// Draws `size` indices in `1..=probs.len()` with replacement,
/// proportionally to the normalized `probs`.
///
/// Sorts a private copy ascending, accumulates it in place, then maps each
/// uniform draw through a linear scan: the first slot `j` in the scan range
/// `0..n-1` with `u <= cumulative[j]` wins, and the last slot catches
/// everything the scan range missed. Consumes exactly `size` draws.
///
/// # Panics
///
/// Panics if `probs` is empty while `size` is positive.
pub fn sample_with_replacement<S: UniformSource + ?Sized>(
    probs: &[f64],
    size: usize,
    source: &mut S,
) -> Vec<u64> {
    assert!(
        !probs.is_empty() || size == 0,
        "cannot draw from an empty probability vector"
    );
    let n = probs.len();
    let mut cumulative = probs.to_vec();
    let mut indices: Vec<u64> = (1..=n as u64).collect();
    heap::sort_ascending(&mut cumulative, &mut indices);
    for i in 1..n {
        cumulative[i] += cumulative[i - 1];
    }

    let mut out = Vec::with_capacity(size);
    for _ in 0..size {
        let u = source.next_unif();
        let mut j = 0;
        while j < n - 1 && u > cumulative[j] {
            j += 1;
        }
        out.push(indices[j]);
    }
    out
}

/// Draws `size` distinct indices in `1..=probs.len()` without replacement,
/// proportionally to the normalized `probs`.
///
/// Each draw scales the remaining total mass, walks the still-active
/// ascending prefix until the running mass reaches the target (the last
/// active slot catches the remainder), then shifts the survivors down to
/// close the gap. Consumes exactly `size` draws.
///
/// # Panics
///
/// Panics if `size > probs.len()`.
pub fn sample_without_replacement<S: UniformSource + ?Sized>(
    probs: &[f64],
    size: usize,
    source: &mut S,
) -> Vec<u64> {
    assert!(
        size <= probs.len(),
        "sample size must not exceed the number of probabilities"
    );
    let n = probs.len();
    let mut weights = probs.to_vec();
    let mut indices: Vec<u64> = (1..=n as u64).collect();
    heap::sort_ascending(&mut weights, &mut indices);

    let mut total_mass = 1.0_f64;
    let mut out = Vec::with_capacity(size);
    for i in 0..size {
        let last_active = n - 1 - i;
        let target = total_mass * source.next_unif();
        let mut mass = 0.0_f64;
        let mut j = 0usize;
        while j < last_active {
            mass += weights[j];
            if target <= mass {
                break;
            }
            j += 1;
        }
        out.push(indices[j]);
        total_mass -= weights[j];
        weights.copy_within(j + 1..=last_active, j);
        indices.copy_within(j + 1..=last_active, j);
    }
    out
}
