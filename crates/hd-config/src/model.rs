//! Hereditary model parameter types.
//!
//! These types describe the single-locus model used by the inference
//! engine: an unconditional prior over gene-copy counts, the trait
//! penetrance for each count, and the per-transmission mutation rate.

use hd_common::GeneCount;
use serde::{Deserialize, Serialize};

use crate::validate::{check_probability, check_sums_to_one, ValidationError, ValidationResult};

/// Tolerance used when checking that probability tables sum to 1.
pub const SUM_TOLERANCE: f64 = 1e-9;

/// Complete model configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelParams {
    pub schema_version: String,

    #[serde(default)]
    pub description: Option<String>,

    pub gene_prior: GenePrior,

    pub penetrance: PenetranceTable,

    pub mutation_rate: f64,
}

/// Unconditional gene-count distribution for a person without recorded parents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenePrior {
    pub zero: f64,
    pub one: f64,
    pub two: f64,

    #[serde(rename = "_comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl GenePrior {
    pub fn new(zero: f64, one: f64, two: f64) -> Self {
        Self {
            zero,
            one,
            two,
            comment: None,
        }
    }

    pub fn get(&self, count: GeneCount) -> f64 {
        match count {
            GeneCount::Zero => self.zero,
            GeneCount::One => self.one,
            GeneCount::Two => self.two,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.zero, self.one, self.two]
    }
}

/// Probability of the trait being present or absent for one gene count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Penetrance {
    pub present: f64,
    pub absent: f64,
}

impl Penetrance {
    pub fn new(present: f64, absent: f64) -> Self {
        Self { present, absent }
    }

    /// Complementary pair: `present` and `1 - present`.
    pub fn with_present(present: f64) -> Self {
        Self::new(present, 1.0 - present)
    }

    pub fn probability(&self, has_trait: bool) -> f64 {
        if has_trait {
            self.present
        } else {
            self.absent
        }
    }
}

/// Trait penetrance for each gene count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenetranceTable {
    pub zero: Penetrance,
    pub one: Penetrance,
    pub two: Penetrance,
}

impl PenetranceTable {
    pub fn get(&self, count: GeneCount) -> &Penetrance {
        match count {
            GeneCount::Zero => &self.zero,
            GeneCount::One => &self.one,
            GeneCount::Two => &self.two,
        }
    }
}

impl ModelParams {
    /// Load model parameters from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ValidationError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ValidationError::IoError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::parse_json(&content)
    }

    /// Parse model parameters from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ValidationError> {
        serde_json::from_str(json)
            .map_err(|e| ValidationError::ParseError(format!("Invalid JSON: {}", e)))
    }

    /// Return a copy with a different mutation rate.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Unconditional probability of `count` for a person without parents.
    pub fn gene_prior(&self, count: GeneCount) -> f64 {
        self.gene_prior.get(count)
    }

    /// Probability that a parent with `parent` copies passes the allele on.
    pub fn transmission(&self, parent: GeneCount) -> f64 {
        match parent {
            GeneCount::Two => 1.0 - self.mutation_rate,
            GeneCount::One => 0.5,
            GeneCount::Zero => self.mutation_rate,
        }
    }

    /// Probability that a child of `mother` and `father` carries `child` copies.
    ///
    /// Each parent transmits independently; the child's count is the number
    /// of parents that transmit.
    pub fn inheritance(&self, mother: GeneCount, father: GeneCount, child: GeneCount) -> f64 {
        let from_mother = self.transmission(mother);
        let from_father = self.transmission(father);
        match child {
            GeneCount::Two => from_mother * from_father,
            GeneCount::One => {
                from_mother * (1.0 - from_father) + from_father * (1.0 - from_mother)
            }
            GeneCount::Zero => (1.0 - from_mother) * (1.0 - from_father),
        }
    }

    /// Probability of the trait being `has_trait` given `count` copies.
    pub fn penetrance(&self, count: GeneCount, has_trait: bool) -> f64 {
        self.penetrance.get(count).probability(has_trait)
    }

    /// Validate ranges, table normalization and schema compatibility.
    pub fn validate(&self) -> ValidationResult {
        if !hd_common::schema::is_compatible(&self.schema_version) {
            return Err(ValidationError::SchemaVersion {
                found: self.schema_version.clone(),
                expected: hd_common::SCHEMA_VERSION.to_string(),
            });
        }

        for count in GeneCount::ALL {
            check_probability(&format!("gene_prior.{}", count), self.gene_prior(count))?;
        }
        check_sums_to_one("gene_prior", &self.gene_prior.as_array(), SUM_TOLERANCE)?;

        for count in GeneCount::ALL {
            let p = self.penetrance.get(count);
            let field = format!("penetrance.{}", count);
            check_probability(&format!("{field}.present"), p.present)?;
            check_probability(&format!("{field}.absent"), p.absent)?;
            check_sums_to_one(&field, &[p.present, p.absent], SUM_TOLERANCE)?;
        }

        check_probability("mutation_rate", self.mutation_rate)
    }
}

/// Embedded default model JSON for fallback.
const DEFAULT_MODEL_JSON: &str = include_str!("schemas/model.default.json");

impl Default for ModelParams {
    fn default() -> Self {
        // Parse the embedded default model JSON
        // This should never fail since the JSON is embedded at compile time
        Self::parse_json(DEFAULT_MODEL_JSON).expect("Embedded default model JSON is invalid")
    }
}
