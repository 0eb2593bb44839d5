//! Gene-copy count of the risk allele.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of copies of the risk allele a person carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum GeneCount {
    Zero = 0,
    One = 1,
    Two = 2,
}

impl GeneCount {
    /// All counts in ascending order.
    pub const ALL: [GeneCount; 3] = [GeneCount::Zero, GeneCount::One, GeneCount::Two];

    pub fn copies(self) -> u8 {
        self as u8
    }

    /// Dense index for table lookups (equal to the copy count).
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for GeneCount {
    type Error = String;

    fn try_from(copies: u8) -> Result<Self, Self::Error> {
        match copies {
            0 => Ok(GeneCount::Zero),
            1 => Ok(GeneCount::One),
            2 => Ok(GeneCount::Two),
            other => Err(format!("gene count must be 0, 1 or 2, got {other}")),
        }
    }
}

impl From<GeneCount> for u8 {
    fn from(count: GeneCount) -> Self {
        count.copies()
    }
}

impl fmt::Display for GeneCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.copies())
    }
}
