//! Request validation and algorithm classification.
//!
//! [`SampleArgs`] captures a raw request the way a caller hands it over:
//! population and size as integer-valued doubles (NaN standing in for a
//! missing value), a replacement flag, and an optional weight vector.
//! [`SampleArgs::plan`] runs every admissibility check up front and
//! classifies the request into one of the four [`SamplePlan`] variants.
//! A plan that exists always draws successfully, so no failure can surface
//! after the first uniform draw has been consumed — the validator never
//! even sees a draw source.

use tracing::debug;

use crate::error::SampleError;
use crate::source::UniformSource;
use crate::{unweighted, weighted};

/// Largest admissible population size.
pub const MAX_POPULATION: f64 = 4.5e15;

/// A raw sampling request.
///
/// `population` and `size` arrive as doubles so that a missing value (NaN)
/// and an out-of-range magnitude can be reported instead of silently
/// wrapping; fractional parts are truncated toward zero. `replace`
/// defaults to `false` and `weights` to `None` (equal probability).
///
/// # Example
///
/// ```
/// use urn::{SampleArgs, SamplePlan};
///
/// let plan = SampleArgs::new(5.0, 2.0)
///     .with_replacement(true)
///     .plan()
///     .unwrap();
/// assert!(matches!(plan, SamplePlan::UnweightedWithReplacement { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleArgs {
    population: f64,
    size: f64,
    replace: bool,
    weights: Option<Vec<f64>>,
}

impl SampleArgs {
    /// A request to draw `size` elements from `1..=population`.
    pub fn new(population: f64, size: f64) -> Self {
        Self {
            population,
            size,
            replace: false,
            weights: None,
        }
    }

    /// Sets whether drawn elements stay eligible for re-selection.
    pub fn with_replacement(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    /// Sets per-element selection weights.
    ///
    /// The vector length must equal the population size; entries need not
    /// sum to one, normalization happens during [`plan`](Self::plan).
    pub fn with_weights(mut self, weights: Vec<f64>) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Returns the population argument.
    pub fn population(&self) -> f64 {
        self.population
    }

    /// Returns the size argument.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the replacement flag.
    pub fn replace(&self) -> bool {
        self.replace
    }

    /// Returns the weight vector, if any.
    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    /// Validates the request and classifies it into a [`SamplePlan`].
    ///
    /// Checks run in a fixed order and the first failure is reported:
    /// population admissibility, emptiness against the requested size,
    /// size admissibility, sample-versus-population bound, weight length,
    /// weight entries, positive-weight count, and finally the
    /// heavy-element cap for weighted draws with replacement. No uniform
    /// draw is consumed on any path.
    pub fn plan(self) -> Result<SamplePlan, SampleError> {
        if !self.population.is_finite() {
            return Err(SampleError::InvalidPopulation {
                population: self.population,
            });
        }
        let population = self.population.trunc();
        if population < 0.0 || population > MAX_POPULATION {
            return Err(SampleError::InvalidPopulation {
                population: self.population,
            });
        }
        let size = self.size.trunc();
        if self.weights.is_none() && population == 0.0 && size > 0.0 {
            return Err(SampleError::InvalidPopulation {
                population: self.population,
            });
        }
        if size.is_nan() || size < 0.0 {
            return Err(SampleError::InvalidSampleSize { size: self.size });
        }
        if !self.replace && self.weights.is_none() && size > population {
            return Err(SampleError::SampleLargerThanPopulation { size, population });
        }

        let population_u = population as u64;
        let size_u = size as usize;
        let plan = match self.weights {
            None => {
                if self.replace {
                    SamplePlan::UnweightedWithReplacement {
                        population: population_u,
                        size: size_u,
                    }
                } else {
                    SamplePlan::UnweightedWithoutReplacement {
                        population: population_u,
                        size: size_u,
                    }
                }
            }
            Some(w) => {
                if w.len() as u64 != population_u {
                    return Err(SampleError::ProbabilityLengthMismatch {
                        len: w.len(),
                        population: population_u,
                    });
                }
                let probs = weighted::checked_normalize(&w, size_u, self.replace)?;
                if self.replace {
                    let heavy = weighted::heavy_count(&probs);
                    if heavy > weighted::MAX_HEAVY_WEIGHTS {
                        return Err(SampleError::UnsupportedHeavyWeights {
                            heavy,
                            limit: weighted::MAX_HEAVY_WEIGHTS,
                        });
                    }
                    SamplePlan::WeightedWithReplacement {
                        probs,
                        size: size_u,
                    }
                } else {
                    SamplePlan::WeightedWithoutReplacement {
                        probs,
                        size: size_u,
                    }
                }
            }
        };
        debug!(
            population = population_u,
            size = size_u,
            plan = plan.name(),
            "sampling plan classified"
        );
        Ok(plan)
    }
}

/// A validated sampling request, classified by algorithm.
///
/// Construction goes through [`SampleArgs::plan`]; every variant draws
/// without further failure. Weighted variants hold the normalized
/// probability vector; [`draw`](Self::draw) works on private copies, so
/// one plan can serve any number of independent calls.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplePlan {
    /// Equal probability; duplicates permitted.
    UnweightedWithReplacement {
        /// Population size.
        population: u64,
        /// Number of elements to draw.
        size: usize,
    },
    /// Equal probability; each element drawn at most once.
    UnweightedWithoutReplacement {
        /// Population size.
        population: u64,
        /// Number of elements to draw.
        size: usize,
    },
    /// Probability-weighted; duplicates permitted.
    WeightedWithReplacement {
        /// Normalized per-element probabilities; the population size is
        /// the vector length.
        probs: Vec<f64>,
        /// Number of elements to draw.
        size: usize,
    },
    /// Probability-weighted; each element drawn at most once.
    WeightedWithoutReplacement {
        /// Normalized per-element probabilities; the population size is
        /// the vector length.
        probs: Vec<f64>,
        /// Number of elements to draw.
        size: usize,
    },
}

impl SamplePlan {
    /// Draws the sample, consuming exactly one uniform value per requested
    /// element, in draw order.
    ///
    /// Returns `size` values in `1..=population`; without replacement they
    /// are pairwise distinct.
    pub fn draw<S: UniformSource + ?Sized>(&self, source: &mut S) -> Vec<u64> {
        match self {
            Self::UnweightedWithReplacement { population, size } => {
                unweighted::sample_with_replacement(*population, *size, source)
            }
            Self::UnweightedWithoutReplacement { population, size } => {
                unweighted::sample_without_replacement(*population, *size, source)
            }
            Self::WeightedWithReplacement { probs, size } => {
                weighted::sample_with_replacement(probs, *size, source)
            }
            Self::WeightedWithoutReplacement { probs, size } => {
                weighted::sample_without_replacement(probs, *size, source)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::UnweightedWithReplacement { .. } => "unweighted-with-replacement",
            Self::UnweightedWithoutReplacement { .. } => "unweighted-without-replacement",
            Self::WeightedWithReplacement { .. } => "weighted-with-replacement",
            Self::WeightedWithoutReplacement { .. } => "weighted-without-replacement",
        }
    }
}

/// Validates `args` and draws the sample in one call.
///
/// # Example
///
/// ```
/// use urn::{sample, SampleArgs, SequenceSource};
///
/// let mut source = SequenceSource::new([0.1, 0.9, 0.5]);
/// let picked = sample(SampleArgs::new(5.0, 3.0), &mut source).unwrap();
/// assert_eq!(picked, vec![1, 4, 2]);
/// ```
pub fn sample<S: UniformSource + ?Sized>(
    args: SampleArgs,
    source: &mut S,
) -> Result<Vec<u64>, SampleError> {
    Ok(args.plan()?.draw(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SequenceSource;

    #[test]
    fn classifies_all_four_variants() {
        let plan = SampleArgs::new(5.0, 2.0).plan().unwrap();
        assert!(matches!(
            plan,
            SamplePlan::UnweightedWithoutReplacement {
                population: 5,
                size: 2
            }
        ));

        let plan = SampleArgs::new(5.0, 2.0)
            .with_replacement(true)
            .plan()
            .unwrap();
        assert!(matches!(
            plan,
            SamplePlan::UnweightedWithReplacement {
                population: 5,
                size: 2
            }
        ));

        let plan = SampleArgs::new(2.0, 1.0)
            .with_weights(vec![1.0, 3.0])
            .plan()
            .unwrap();
        assert!(matches!(
            plan,
            SamplePlan::WeightedWithoutReplacement { ref probs, size: 1 }
                if probs == &[0.25, 0.75]
        ));

        let plan = SampleArgs::new(2.0, 1.0)
            .with_weights(vec![1.0, 3.0])
            .with_replacement(true)
            .plan()
            .unwrap();
        assert!(matches!(
            plan,
            SamplePlan::WeightedWithReplacement { ref probs, size: 1 }
                if probs == &[0.25, 0.75]
        ));
    }

    #[test]
    fn truncates_fractional_arguments() {
        let plan = SampleArgs::new(5.9, 2.7).plan().unwrap();
        assert!(matches!(
            plan,
            SamplePlan::UnweightedWithoutReplacement {
                population: 5,
                size: 2
            }
        ));

        // Truncation happens before the sign check: -0.5 becomes 0.
        let plan = SampleArgs::new(3.0, -0.5).plan().unwrap();
        assert!(matches!(
            plan,
            SamplePlan::UnweightedWithoutReplacement {
                population: 3,
                size: 0
            }
        ));
    }

    #[test]
    fn plans_are_reusable() {
        let plan = SampleArgs::new(6.0, 3.0).plan().unwrap();
        let mut a = SequenceSource::new([0.3, 0.8, 0.1]);
        let mut b = SequenceSource::new([0.3, 0.8, 0.1]);
        assert_eq!(plan.draw(&mut a), plan.draw(&mut b));
    }

    #[test]
    fn heavy_shapes_are_rejected_before_any_draw() {
        let err = SampleArgs::new(250.0, 1.0)
            .with_weights(vec![1.0; 250])
            .with_replacement(true)
            .plan()
            .unwrap_err();
        assert_eq!(
            err,
            SampleError::UnsupportedHeavyWeights {
                heavy: 250,
                limit: 200
            }
        );

        // The same shape is fine without replacement.
        assert!(SampleArgs::new(250.0, 1.0)
            .with_weights(vec![1.0; 250])
            .plan()
            .is_ok());
    }

    #[test]
    fn accessors_round_trip() {
        let args = SampleArgs::new(4.0, 2.0)
            .with_replacement(true)
            .with_weights(vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(args.population(), 4.0);
        assert_eq!(args.size(), 2.0);
        assert!(args.replace());
        assert_eq!(args.weights(), Some(&[1.0, 2.0, 3.0, 4.0][..]));
    }
}
