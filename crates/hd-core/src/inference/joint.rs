//! Joint probability of one complete assignment.
//!
//! Each person contributes P(gene | parents' genes) × P(trait | gene), where
//! founders use the unconditional gene prior. The joint probability is the
//! product over everyone.

use hd_common::Result;
use hd_config::ModelParams;

use super::assignment::Assignment;
use crate::pedigree::Pedigree;

/// Probability that `assignment` holds for the whole of `pedigree`.
///
/// # Errors
/// [`hd_common::Error::InvalidAssignment`] if the assignment does not cover
/// every person.
pub fn joint_probability(
    pedigree: &Pedigree,
    model: &ModelParams,
    assignment: &Assignment,
) -> Result<f64> {
    assignment.check_covers(pedigree)?;
    let genes = assignment.genes();
    let traits = assignment.traits();

    let mut probability = 1.0;
    for (i, person) in pedigree.people().iter().enumerate() {
        let gene = genes[i];
        let gene_probability = match person.parents() {
            Some(parents) => model.inheritance(genes[parents.mother], genes[parents.father], gene),
            None => model.gene_prior(gene),
        };
        probability *= gene_probability * model.penetrance(gene, traits[i]);
    }
    Ok(probability)
}
