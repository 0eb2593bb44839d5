//! Pedigree model: people, parent links, and observed trait evidence.
//!
//! People are mapped to contiguous 0-based indices in input order. The
//! inference core works exclusively on those indices; identifiers are only
//! used at the boundary (construction, lookups, reporting).
//!
//! A pedigree is immutable once built. Construction rejects dangling parent
//! references, half-specified parents, duplicate identifiers, and cycles.

pub mod load;

use std::collections::HashMap;

use hd_common::{Error, PersonId, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use load::{load_csv, read_csv};

/// Observed trait status for one person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraitEvidence {
    Present,
    Absent,
    #[default]
    Unknown,
}

impl TraitEvidence {
    /// The observed value, if any.
    pub fn observed(self) -> Option<bool> {
        match self {
            TraitEvidence::Present => Some(true),
            TraitEvidence::Absent => Some(false),
            TraitEvidence::Unknown => None,
        }
    }

    /// Whether assigning `has_trait` to this person is consistent with the evidence.
    pub fn admits(self, has_trait: bool) -> bool {
        self.observed().map_or(true, |seen| seen == has_trait)
    }
}

impl From<Option<bool>> for TraitEvidence {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => TraitEvidence::Present,
            Some(false) => TraitEvidence::Absent,
            None => TraitEvidence::Unknown,
        }
    }
}

/// A person as supplied by a loader, before parent references are resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub id: PersonId,
    #[serde(default)]
    pub mother: Option<PersonId>,
    #[serde(default)]
    pub father: Option<PersonId>,
    #[serde(default)]
    pub evidence: TraitEvidence,
}

impl PersonRecord {
    pub fn new(id: impl Into<PersonId>) -> Self {
        Self {
            id: id.into(),
            mother: None,
            father: None,
            evidence: TraitEvidence::Unknown,
        }
    }

    pub fn with_parents(mut self, mother: impl Into<PersonId>, father: impl Into<PersonId>) -> Self {
        self.mother = Some(mother.into());
        self.father = Some(father.into());
        self
    }

    pub fn with_evidence(mut self, evidence: TraitEvidence) -> Self {
        self.evidence = evidence;
        self
    }
}

/// Resolved parent indices. Both parents are always known together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parents {
    pub mother: usize,
    pub father: usize,
}

/// A person inside a validated pedigree.
#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    parents: Option<Parents>,
    evidence: TraitEvidence,
}

impl Person {
    pub fn id(&self) -> &PersonId {
        &self.id
    }

    /// Parent indices, or `None` for a founder.
    pub fn parents(&self) -> Option<Parents> {
        self.parents
    }

    pub fn evidence(&self) -> TraitEvidence {
        self.evidence
    }

    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// Validated family graph.
#[derive(Debug, Clone)]
pub struct Pedigree {
    /// People in input order.
    people: Vec<Person>,
    /// Mapping from identifier to its 0-based index.
    id_to_index: HashMap<PersonId, usize>,
}

impl Pedigree {
    /// Build a pedigree from loader records.
    ///
    /// # Errors
    /// Returns [`Error::MalformedPedigree`] on duplicate identifiers, a
    /// parent that is not itself in the records, exactly one recorded parent,
    /// a person listed as their own parent, or a cycle in the parent relation.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = PersonRecord>,
    {
        let records: Vec<PersonRecord> = records.into_iter().collect();
        let mut id_to_index = HashMap::with_capacity(records.len());

        // First pass: register everyone so parents may appear after children.
        for (index, record) in records.iter().enumerate() {
            if id_to_index.insert(record.id.clone(), index).is_some() {
                return Err(Error::MalformedPedigree(format!(
                    "duplicate person '{}'",
                    record.id
                )));
            }
        }

        // Second pass: resolve parent references.
        let mut people = Vec::with_capacity(records.len());
        for record in records {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => {
                    let mother = resolve_parent(&id_to_index, &record.id, mother, "mother")?;
                    let father = resolve_parent(&id_to_index, &record.id, father, "father")?;
                    Some(Parents { mother, father })
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(Error::MalformedPedigree(format!(
                        "'{}' has only one recorded parent; mother and father must both be present or both absent",
                        record.id
                    )));
                }
            };
            people.push(Person {
                id: record.id,
                parents,
                evidence: record.evidence,
            });
        }

        let pedigree = Self {
            people,
            id_to_index,
        };
        pedigree.check_acyclic()?;

        debug!(
            people = pedigree.len(),
            founders = pedigree.founder_count(),
            observed = pedigree.observed_count(),
            "pedigree built"
        );
        Ok(pedigree)
    }

    /// Number of people.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in input order; position equals the person's index.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Identifiers in input order.
    pub fn ids(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.people.iter().map(|p| &p.id)
    }

    /// Person at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }

    /// Index of `id`, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.id_to_index.get(id).copied()
    }

    /// Look up a person by identifier.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.index_of(id).map(|i| &self.people[i])
    }

    /// Mother's identifier, if `id` exists and has recorded parents.
    pub fn mother(&self, id: &str) -> Option<&PersonId> {
        self.get(id)?.parents.map(|p| &self.people[p.mother].id)
    }

    /// Father's identifier, if `id` exists and has recorded parents.
    pub fn father(&self, id: &str) -> Option<&PersonId> {
        self.get(id)?.parents.map(|p| &self.people[p.father].id)
    }

    /// Observed trait evidence for `id`, if the person exists.
    pub fn evidence(&self, id: &str) -> Option<TraitEvidence> {
        self.get(id).map(Person::evidence)
    }

    pub fn founder_count(&self) -> usize {
        self.people.iter().filter(|p| p.is_founder()).count()
    }

    /// Number of people whose trait has been observed.
    pub fn observed_count(&self) -> usize {
        self.people
            .iter()
            .filter(|p| p.evidence.observed().is_some())
            .count()
    }

    /// Cycle detection via Kahn's algorithm over parent -> child edges.
    fn check_acyclic(&self) -> Result<()> {
        let n = self.people.len();
        let mut children_of: Vec<Vec<usize>> = vec![Vec::new(); n];
        let mut in_degree = vec![0u32; n];

        for (i, person) in self.people.iter().enumerate() {
            if let Some(parents) = person.parents {
                for parent in [parents.mother, parents.father] {
                    if parent == i {
                        return Err(Error::MalformedPedigree(format!(
                            "'{}' is listed as their own parent",
                            person.id
                        )));
                    }
                    children_of[parent].push(i);
                    in_degree[i] += 1;
                }
            }
        }

        let mut queue: Vec<usize> = (0..n).filter(|&i| in_degree[i] == 0).collect();
        let mut visited = 0usize;

        while let Some(node) = queue.pop() {
            visited += 1;
            for &child in &children_of[node] {
                in_degree[child] -= 1;
                if in_degree[child] == 0 {
                    queue.push(child);
                }
            }
        }

        if visited != n {
            let stuck: Vec<&str> = (0..n)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| self.people[i].id.as_str())
                .collect();
            return Err(Error::MalformedPedigree(format!(
                "parent relation contains a cycle through {}",
                stuck.join(", ")
            )));
        }

        Ok(())
    }
}

fn resolve_parent(
    id_to_index: &HashMap<PersonId, usize>,
    child: &PersonId,
    parent: &PersonId,
    role: &str,
) -> Result<usize> {
    id_to_index.get(parent).copied().ok_or_else(|| {
        Error::MalformedPedigree(format!(
            "'{}' references unknown {} '{}'",
            child, role, parent
        ))
    })
}
