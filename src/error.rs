//! Error types for sample validation.

/// Error type for all fallible operations in this crate.
///
/// Every variant is raised before a single uniform draw is consumed, so a
/// failed call leaves the draw source untouched and produces no partial
/// result.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SampleError {
    /// Population is NaN, non-finite, negative, or above the population
    /// cap (4.5e15). Also raised when no weight vector is given, the
    /// population is empty, and at least one draw was requested.
    #[error("invalid population: {population}")]
    InvalidPopulation {
        /// The offending population argument, as supplied.
        population: f64,
    },

    /// Sample size is NaN or negative.
    #[error("invalid sample size: {size}")]
    InvalidSampleSize {
        /// The offending size argument, as supplied.
        size: f64,
    },

    /// More elements requested than the population holds, drawing without
    /// replacement.
    #[error("cannot take a sample of {size} larger than the population of {population} without replacement")]
    SampleLargerThanPopulation {
        /// Requested sample size.
        size: f64,
        /// Population size.
        population: f64,
    },

    /// Weight vector length differs from the population size.
    #[error("incorrect number of probabilities: got {len}, population is {population}")]
    ProbabilityLengthMismatch {
        /// Length of the supplied weight vector.
        len: usize,
        /// Population size.
        population: u64,
    },

    /// A weight is NaN or infinite.
    #[error("NA or non-finite value in probability vector")]
    NonFiniteProbability,

    /// A weight is negative.
    #[error("negative probability")]
    NegativeProbability,

    /// No strictly positive weight, or fewer strictly positive weights
    /// than the requested sample size when drawing without replacement.
    #[error("too few positive probabilities")]
    TooFewPositiveProbabilities,

    /// Weighted sampling with replacement where too many elements carry an
    /// expected count above 0.1. The cumulative-scan sampler degrades on
    /// such shapes and the alias-table sampler that would serve them is
    /// not provided.
    #[error("weighted sampling with replacement supports at most {limit} heavy elements, got {heavy}")]
    UnsupportedHeavyWeights {
        /// Number of heavy elements observed.
        heavy: usize,
        /// The supported maximum.
        limit: usize,
    },
}
