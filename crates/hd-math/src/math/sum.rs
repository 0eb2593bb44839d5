//! Compensated summation.
//!
//! Marginal totals are built from many products of small probabilities.
//! Neumaier's variant of Kahan summation tracks the low-order bits lost in
//! each addition so the final total does not depend on enumeration order
//! beyond the last few ulps.

/// Running Neumaier-compensated sum.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NeumaierSum {
    sum: f64,
    compensation: f64,
}

impl NeumaierSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term to the running total.
    pub fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    /// Fold another running sum into this one.
    pub fn merge(&mut self, other: &NeumaierSum) {
        self.add(other.sum);
        self.add(other.compensation);
    }

    /// Current compensated total.
    pub fn value(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl FromIterator<f64> for NeumaierSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut acc = NeumaierSum::new();
        for v in iter {
            acc.add(v);
        }
        acc
    }
}

/// Compensated sum of a slice.
pub fn stable_sum(values: &[f64]) -> f64 {
    values.iter().copied().collect::<NeumaierSum>().value()
}
