//! Exact posterior inference over a pedigree.
//!
//! The engine enumerates every evidence-consistent assignment, scores it
//! with [`joint_probability`], and accumulates the scores into per-person
//! marginals. Cost grows as 3^n × 2^unknown, so a population ceiling guards
//! against requests that would never finish.

use std::time::Instant;

use hd_common::{Error, Result};
use hd_config::ModelParams;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::assignment::Assignment;
use super::enumerate::{consistent_assignment_count, EnumerationStrategy, Enumerator};
use super::joint::joint_probability;
use super::marginal::MarginalAccumulator;
use super::posterior::PedigreePosterior;
use crate::pedigree::Pedigree;

/// Assignments scored between progress traces.
const TRACE_BATCH: u64 = 1 << 16;

// ── Configuration ───────────────────────────────────────────────────────

/// Engine tuning knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Largest pedigree the engine will enumerate.
    pub max_population: usize,
    /// How assignments are enumerated.
    pub strategy: EnumerationStrategy,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            max_population: 12,
            strategy: EnumerationStrategy::default(),
        }
    }
}

// ── Engine ──────────────────────────────────────────────────────────────

/// Validated model plus engine configuration.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    model: ModelParams,
    config: InferenceConfig,
}

impl InferenceEngine {
    /// Create an engine, rejecting models that are not valid distributions.
    pub fn new(model: ModelParams, config: InferenceConfig) -> Result<Self> {
        model.validate()?;
        Ok(Self { model, config })
    }

    pub fn model(&self) -> &ModelParams {
        &self.model
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Posterior gene and trait distributions for every person.
    pub fn infer(&self, pedigree: &Pedigree) -> Result<PedigreePosterior> {
        let enumerator = self.config.strategy.enumerator();
        self.infer_with(pedigree, enumerator.as_ref())
    }

    /// Same as [`InferenceEngine::infer`] with an explicit enumerator.
    pub fn infer_with(
        &self,
        pedigree: &Pedigree,
        enumerator: &dyn Enumerator,
    ) -> Result<PedigreePosterior> {
        self.check_population(pedigree)?;
        let started = Instant::now();
        debug!(
            people = pedigree.len(),
            observed = pedigree.observed_count(),
            candidates = %consistent_assignment_count(pedigree),
            strategy = enumerator.name(),
            "starting enumeration"
        );

        let accumulator = self.accumulate(pedigree, enumerator.assignments(pedigree)?)?;
        let posterior = accumulator.normalize(pedigree)?;

        info!(
            people = pedigree.len(),
            assignments = accumulator.assignments(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "inference complete"
        );
        Ok(posterior)
    }

    /// Score and sum a stream of assignments without normalizing.
    ///
    /// Accumulators built over disjoint streams can be combined with
    /// [`MarginalAccumulator::merge`].
    ///
    /// # Errors
    /// [`Error::InvalidAssignment`] for an assignment that does not cover the
    /// pedigree or contradicts an observed trait.
    pub fn accumulate<I>(&self, pedigree: &Pedigree, assignments: I) -> Result<MarginalAccumulator>
    where
        I: IntoIterator<Item = Assignment>,
    {
        let mut accumulator = MarginalAccumulator::new(pedigree);
        for assignment in assignments {
            if !assignment.respects_evidence(pedigree) {
                return Err(Error::InvalidAssignment(format!(
                    "assignment #{} contradicts observed traits",
                    accumulator.assignments() + 1
                )));
            }
            let p = joint_probability(pedigree, &self.model, &assignment)?;
            accumulator.add(&assignment, p)?;
            if accumulator.assignments() % TRACE_BATCH == 0 {
                trace!(scored = accumulator.assignments(), "assignment batch scored");
            }
        }
        Ok(accumulator)
    }

    fn check_population(&self, pedigree: &Pedigree) -> Result<()> {
        if pedigree.len() > self.config.max_population {
            return Err(Error::PopulationTooLarge {
                size: pedigree.len(),
                max: self.config.max_population,
            });
        }
        Ok(())
    }
}

/// Exact inference with default engine settings.
pub fn infer(pedigree: &Pedigree, model: &ModelParams) -> Result<PedigreePosterior> {
    InferenceEngine::new(model.clone(), InferenceConfig::default())?.infer(pedigree)
}
