//! Marginal accumulation and normalization.
//!
//! Every enumerated assignment adds its joint probability into one gene
//! bucket and one trait bucket per person. Because the enumeration visits
//! each consistent assignment exactly once, the buckets hold unnormalized
//! marginals; dividing by their totals yields the posteriors.

use hd_common::{Error, Result};
use hd_math::{normalize_array, NeumaierSum};
use tracing::warn;

use super::assignment::Assignment;
use super::posterior::{GeneDistribution, PedigreePosterior, PersonPosterior, TraitDistribution};
use crate::pedigree::Pedigree;

/// Unnormalized totals for one person.
#[derive(Debug, Clone, Default)]
struct PersonTotals {
    /// Indexed by gene count.
    gene: [NeumaierSum; 3],
    /// `[present, absent]`.
    trait_: [NeumaierSum; 2],
}

/// Per-person, per-variable running sums of joint probabilities.
#[derive(Debug, Clone)]
pub struct MarginalAccumulator {
    totals: Vec<PersonTotals>,
    assignments: u64,
}

impl MarginalAccumulator {
    /// All-zero totals for every person in `pedigree`.
    pub fn new(pedigree: &Pedigree) -> Self {
        Self {
            totals: vec![PersonTotals::default(); pedigree.len()],
            assignments: 0,
        }
    }

    /// Add `probability` into the buckets selected by `assignment`.
    pub fn add(&mut self, assignment: &Assignment, probability: f64) -> Result<()> {
        let n = self.totals.len();
        if assignment.genes().len() != n || assignment.traits().len() != n {
            return Err(Error::InvalidAssignment(format!(
                "assignment does not cover the {} accumulated people",
                n
            )));
        }
        for ((totals, gene), &has_trait) in self
            .totals
            .iter_mut()
            .zip(assignment.genes())
            .zip(assignment.traits())
        {
            totals.gene[gene.index()].add(probability);
            totals.trait_[trait_slot(has_trait)].add(probability);
        }
        self.assignments += 1;
        Ok(())
    }

    /// Fold in totals accumulated over a disjoint part of the enumeration.
    pub fn merge(&mut self, other: &MarginalAccumulator) -> Result<()> {
        if other.totals.len() != self.totals.len() {
            return Err(Error::InvalidAssignment(format!(
                "cannot merge accumulators over {} and {} people",
                self.totals.len(),
                other.totals.len()
            )));
        }
        for (mine, theirs) in self.totals.iter_mut().zip(&other.totals) {
            for (a, b) in mine.gene.iter_mut().zip(&theirs.gene) {
                a.merge(b);
            }
            for (a, b) in mine.trait_.iter_mut().zip(&theirs.trait_) {
                a.merge(b);
            }
        }
        self.assignments += other.assignments;
        Ok(())
    }

    /// Number of assignments added so far (including merged ones).
    pub fn assignments(&self) -> u64 {
        self.assignments
    }

    /// Unnormalized gene totals `[zero, one, two]` for the person at `index`.
    pub fn gene_totals(&self, index: usize) -> Option<[f64; 3]> {
        self.totals
            .get(index)
            .map(|t| [t.gene[0].value(), t.gene[1].value(), t.gene[2].value()])
    }

    /// Unnormalized trait totals `[present, absent]` for the person at `index`.
    pub fn trait_totals(&self, index: usize) -> Option<[f64; 2]> {
        self.totals
            .get(index)
            .map(|t| [t.trait_[0].value(), t.trait_[1].value()])
    }

    /// Rescale every distribution to sum to 1.
    ///
    /// # Errors
    /// [`Error::DegenerateEvidence`] for the first person whose gene or trait
    /// totals carry no probability mass.
    pub fn normalize(&self, pedigree: &Pedigree) -> Result<PedigreePosterior> {
        if pedigree.len() != self.totals.len() {
            return Err(Error::InvalidAssignment(format!(
                "accumulator covers {} people, pedigree has {}",
                self.totals.len(),
                pedigree.len()
            )));
        }

        let mut people = Vec::with_capacity(self.totals.len());
        for (index, person) in pedigree.people().iter().enumerate() {
            let degenerate = |variable: &'static str, cause: hd_math::NormalizeError| {
                warn!(person = %person.id(), variable, %cause, "degenerate evidence");
                Error::DegenerateEvidence {
                    person: person.id().to_string(),
                    variable,
                }
            };

            let mut gene = self.gene_totals(index).unwrap_or_default();
            normalize_array(&mut gene).map_err(|e| degenerate("gene", e))?;
            let mut trait_ = self.trait_totals(index).unwrap_or_default();
            normalize_array(&mut trait_).map_err(|e| degenerate("trait", e))?;

            people.push(PersonPosterior {
                id: person.id().clone(),
                gene: GeneDistribution::from_array(gene),
                trait_: TraitDistribution {
                    present: trait_[0],
                    absent: trait_[1],
                },
            });
        }
        Ok(PedigreePosterior::new(people))
    }
}

fn trait_slot(has_trait: bool) -> usize {
    if has_trait {
        0
    } else {
        1
    }
}
