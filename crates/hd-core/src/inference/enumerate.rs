//! Assignment enumeration.
//!
//! Every strategy yields each assignment consistent with the pedigree's trait
//! evidence exactly once, as a lazy iterator that can be restarted by asking
//! for a fresh one. People are addressed by bit position in a `u64`, so a
//! pedigree may hold at most [`MASK_LIMIT`] people.
//!
//! Gene counts are enumerated by choosing the two-copy subset, then the
//! one-copy subset of the remainder; everyone left has zero copies. That is
//! 3^n gene partitions per trait subset.

use clap::ValueEnum;
use hd_common::{Error, Result};
use serde::{Deserialize, Serialize};

use super::assignment::Assignment;
use crate::pedigree::{Pedigree, TraitEvidence};

/// Largest pedigree the bit-mask enumerators can address.
pub const MASK_LIMIT: usize = 63;

/// Boxed assignment stream.
pub type Assignments<'a> = Box<dyn Iterator<Item = Assignment> + 'a>;

/// A source of evidence-consistent assignments.
pub trait Enumerator {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Start a fresh pass over every assignment consistent with evidence.
    fn assignments<'a>(&'a self, pedigree: &'a Pedigree) -> Result<Assignments<'a>>;
}

/// Selectable enumeration strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumerationStrategy {
    /// Every trait subset, filtered against evidence
    #[default]
    Exhaustive,
    /// Only trait subsets of people without observed evidence
    Constrained,
}

impl EnumerationStrategy {
    pub fn enumerator(self) -> Box<dyn Enumerator> {
        match self {
            EnumerationStrategy::Exhaustive => Box::new(ExhaustiveEnumerator),
            EnumerationStrategy::Constrained => Box::new(ConstrainedEnumerator),
        }
    }
}

/// Reference strategy: walk the full powerset of trait subsets and drop
/// those that contradict evidence.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveEnumerator;

impl Enumerator for ExhaustiveEnumerator {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn assignments<'a>(&'a self, pedigree: &'a Pedigree) -> Result<Assignments<'a>> {
        let masks = EvidenceMasks::new(pedigree)?;
        let trait_subsets = (0..=masks.full).filter(move |&t| masks.admits(t));
        Ok(Box::new(with_gene_partitions(masks, trait_subsets)))
    }
}

/// Pruned strategy: fix observed traits and only vary the unknown ones.
/// Yields the same assignments as [`ExhaustiveEnumerator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstrainedEnumerator;

impl Enumerator for ConstrainedEnumerator {
    fn name(&self) -> &'static str {
        "constrained"
    }

    fn assignments<'a>(&'a self, pedigree: &'a Pedigree) -> Result<Assignments<'a>> {
        let masks = EvidenceMasks::new(pedigree)?;
        let free = masks.full & !(masks.present | masks.absent);
        let trait_subsets = Submasks::new(free).map(move |t| t | masks.present);
        Ok(Box::new(with_gene_partitions(masks, trait_subsets)))
    }
}

/// Number of assignments consistent with evidence: 3^n × 2^unknown.
pub fn consistent_assignment_count(pedigree: &Pedigree) -> u128 {
    let unknown = pedigree.len() - pedigree.observed_count();
    3u128.saturating_pow(pedigree.len() as u32)
        .saturating_mul(2u128.saturating_pow(unknown as u32))
}

/// Observed-trait constraints as bit masks.
#[derive(Debug, Clone, Copy)]
struct EvidenceMasks {
    n: usize,
    full: u64,
    present: u64,
    absent: u64,
}

impl EvidenceMasks {
    fn new(pedigree: &Pedigree) -> Result<Self> {
        let n = pedigree.len();
        if n > MASK_LIMIT {
            return Err(Error::PopulationTooLarge {
                size: n,
                max: MASK_LIMIT,
            });
        }
        let mut present = 0u64;
        let mut absent = 0u64;
        for (i, person) in pedigree.people().iter().enumerate() {
            match person.evidence() {
                TraitEvidence::Present => present |= 1 << i,
                TraitEvidence::Absent => absent |= 1 << i,
                TraitEvidence::Unknown => {}
            }
        }
        Ok(Self {
            n,
            full: (1u64 << n) - 1,
            present,
            absent,
        })
    }

    fn admits(&self, have_trait: u64) -> bool {
        have_trait & self.present == self.present && have_trait & self.absent == 0
    }
}

/// Pair every trait subset with every gene partition.
fn with_gene_partitions<I>(masks: EvidenceMasks, trait_subsets: I) -> impl Iterator<Item = Assignment>
where
    I: Iterator<Item = u64>,
{
    let EvidenceMasks { n, full, .. } = masks;
    trait_subsets.flat_map(move |have_trait| {
        Submasks::new(full).flat_map(move |two| {
            Submasks::new(full & !two)
                .map(move |one| Assignment::from_masks(n, two, one, have_trait))
        })
    })
}

/// Every subset of `mask`, from `mask` itself down to the empty set.
#[derive(Debug, Clone)]
pub struct Submasks {
    mask: u64,
    next: Option<u64>,
}

impl Submasks {
    pub fn new(mask: u64) -> Self {
        Self {
            mask,
            next: Some(mask),
        }
    }
}

impl Iterator for Submasks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = if current == 0 {
            None
        } else {
            Some((current - 1) & self.mask)
        };
        Some(current)
    }
}
