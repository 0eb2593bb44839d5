//! Inference engine modules.
//!
//! Pipeline: [`enumerate`] yields assignments consistent with evidence,
//! [`joint`] scores each one, [`marginal`] sums the scores per person and
//! normalizes them into a [`posterior::PedigreePosterior`].

pub mod assignment;
pub mod engine;
pub mod enumerate;
pub mod joint;
pub mod marginal;
pub mod posterior;

pub use assignment::Assignment;
pub use engine::{infer, InferenceConfig, InferenceEngine};
pub use enumerate::{
    consistent_assignment_count, ConstrainedEnumerator, EnumerationStrategy, Enumerator,
    ExhaustiveEnumerator, MASK_LIMIT,
};
pub use joint::joint_probability;
pub use marginal::MarginalAccumulator;
pub use posterior::{GeneDistribution, PedigreePosterior, PersonPosterior, TraitDistribution};
