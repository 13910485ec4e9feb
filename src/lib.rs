//! `urn`: finite-population sampling with a reproducible draw stream.
//!
//! Draws an ordered sample of `size` elements from the population
//! `1..=population`, with or without replacement, optionally weighted by a
//! per-element probability vector. Every algorithm consumes exactly one
//! uniform draw per requested element, in a fixed order, so two runs fed
//! the same draw stream select the same elements — results are replayable
//! and regression-testable down to the exact sequence.
//!
//! Exposed modules:
//! - `plan`: request validation and classification into four sampler
//!   variants.
//! - `unweighted`: equal-probability samplers.
//! - `weighted`: probability-weighted samplers (cumulative scan with
//!   replacement, mass-removal without).
//! - `heap`: the pinned heapsort that orders weights reproducibly.
//! - `source`: uniform draw sources (a [`rand`] adapter and a replayable
//!   sequence).
//!
//! Validation is a hard gate: every admissibility failure is reported
//! before a single draw is consumed, and a constructed [`SamplePlan`]
//! always draws successfully.
//!
//! # Quick start
//!
//! ```
//! use urn::{sample, RngSource, SampleArgs};
//!
//! let mut source = RngSource::seeded(42);
//! let picked = sample(SampleArgs::new(10.0, 3.0), &mut source).unwrap();
//! assert_eq!(picked.len(), 3);
//! assert!(picked.iter().all(|&v| (1..=10).contains(&v)));
//! ```
//!
//! Known limitation: weighted draws with replacement are served by a
//! cumulative-distribution scan and reject configurations with more than
//! [`MAX_HEAVY_WEIGHTS`] heavy elements (expected count above 0.1), where
//! an alias-table sampler would be needed instead.

#![forbid(unsafe_code)]

pub mod error;
pub mod heap;
pub mod plan;
pub mod source;
pub mod unweighted;
pub mod weighted;

pub use error::SampleError;
pub use plan::{sample, SampleArgs, SamplePlan, MAX_POPULATION};
pub use source::{RngSource, SequenceSource, UniformSource};
pub use weighted::MAX_HEAVY_WEIGHTS;
