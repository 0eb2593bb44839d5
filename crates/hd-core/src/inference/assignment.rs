//! Full joint assignments of gene counts and trait values.

use std::collections::HashSet;

use hd_common::{Error, GeneCount, Result};

use crate::pedigree::Pedigree;

/// A gene count and trait value for every person, indexed like the pedigree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    genes: Vec<GeneCount>,
    traits: Vec<bool>,
}

impl Assignment {
    pub fn new(genes: Vec<GeneCount>, traits: Vec<bool>) -> Self {
        Self { genes, traits }
    }

    /// Build from bit masks over the first `n` people.
    ///
    /// Bit `i` of `two` / `one` / `have_trait` refers to person `i`. A bit set
    /// in both `two` and `one` resolves to two copies.
    pub fn from_masks(n: usize, two: u64, one: u64, have_trait: u64) -> Self {
        let bit = |mask: u64, i: usize| (mask >> i) & 1 == 1;
        let genes = (0..n)
            .map(|i| {
                if bit(two, i) {
                    GeneCount::Two
                } else if bit(one, i) {
                    GeneCount::One
                } else {
                    GeneCount::Zero
                }
            })
            .collect();
        let traits = (0..n).map(|i| bit(have_trait, i)).collect();
        Self { genes, traits }
    }

    /// Build from identifier sets: who has one copy, who has two copies, and
    /// who exhibits the trait. Everyone else has zero copies / no trait.
    ///
    /// # Errors
    /// [`Error::InvalidAssignment`] if an identifier is unknown or a person is
    /// listed in both gene sets.
    pub fn from_sets<'a, A, B, C>(
        pedigree: &Pedigree,
        one_gene: A,
        two_genes: B,
        have_trait: C,
    ) -> Result<Self>
    where
        A: IntoIterator<Item = &'a str>,
        B: IntoIterator<Item = &'a str>,
        C: IntoIterator<Item = &'a str>,
    {
        let one = resolve_set(pedigree, one_gene, "one_gene")?;
        let two = resolve_set(pedigree, two_genes, "two_genes")?;
        let with_trait = resolve_set(pedigree, have_trait, "have_trait")?;

        if let Some(&both) = one.intersection(&two).next() {
            return Err(Error::InvalidAssignment(format!(
                "'{}' is in both one_gene and two_genes",
                pedigree.person(both).id()
            )));
        }

        let n = pedigree.len();
        let genes = (0..n)
            .map(|i| {
                if two.contains(&i) {
                    GeneCount::Two
                } else if one.contains(&i) {
                    GeneCount::One
                } else {
                    GeneCount::Zero
                }
            })
            .collect();
        let traits = (0..n).map(|i| with_trait.contains(&i)).collect();
        Ok(Self { genes, traits })
    }

    pub fn genes(&self) -> &[GeneCount] {
        &self.genes
    }

    pub fn traits(&self) -> &[bool] {
        &self.traits
    }

    pub fn gene(&self, index: usize) -> Option<GeneCount> {
        self.genes.get(index).copied()
    }

    pub fn has_trait(&self, index: usize) -> Option<bool> {
        self.traits.get(index).copied()
    }

    /// Fail unless the assignment covers exactly the people of `pedigree`.
    pub fn check_covers(&self, pedigree: &Pedigree) -> Result<()> {
        let n = pedigree.len();
        if self.genes.len() != n || self.traits.len() != n {
            return Err(Error::InvalidAssignment(format!(
                "assignment covers {} gene and {} trait values for a pedigree of {}",
                self.genes.len(),
                self.traits.len(),
                n
            )));
        }
        Ok(())
    }

    /// Whether the assignment covers `pedigree` and every observed trait
    /// matches it.
    pub fn respects_evidence(&self, pedigree: &Pedigree) -> bool {
        self.check_covers(pedigree).is_ok()
            && pedigree
                .people()
                .iter()
                .zip(&self.traits)
                .all(|(person, &has_trait)| person.evidence().admits(has_trait))
    }
}

fn resolve_set<'a, I>(pedigree: &Pedigree, ids: I, set: &str) -> Result<HashSet<usize>>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .map(|id| {
            pedigree.index_of(id).ok_or_else(|| {
                Error::InvalidAssignment(format!("{} names unknown person '{}'", set, id))
            })
        })
        .collect()
}
