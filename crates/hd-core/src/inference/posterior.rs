//! Normalized per-person posterior distributions.

use hd_common::{GeneCount, PersonId};
use serde::{Deserialize, Serialize};

/// Distribution over gene-copy counts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneDistribution {
    pub zero: f64,
    pub one: f64,
    pub two: f64,
}

impl GeneDistribution {
    pub fn from_array(p: [f64; 3]) -> Self {
        Self {
            zero: p[0],
            one: p[1],
            two: p[2],
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }

    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }
}

/// Distribution over trait presence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitDistribution {
    pub present: f64,
    pub absent: f64,
}

impl TraitDistribution {
    pub fn get(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }
}

/// Posterior for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonPosterior {
    pub id: PersonId,
    pub gene: GeneDistribution,
    #[serde(rename = "trait")]
    pub trait_: TraitDistribution,
}

/// Posteriors for every person, in pedigree order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PedigreePosterior {
    people: Vec<PersonPosterior>,
}

impl PedigreePosterior {
    pub fn new(people: Vec<PersonPosterior>) -> Self {
        Self { people }
    }

    pub fn people(&self) -> &[PersonPosterior] {
        &self.people
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PersonPosterior> {
        self.people.iter().find(|p| p.id.as_str() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PersonPosterior> {
        self.people.iter()
    }
}

impl<'a> IntoIterator for &'a PedigreePosterior {
    type Item = &'a PersonPosterior;
    type IntoIter = std::slice::Iter<'a, PersonPosterior>;

    fn into_iter(self) -> Self::IntoIter {
        self.people.iter()
    }
}
