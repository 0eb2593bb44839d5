//! Person identity type.
//!
//! Identifiers are opaque, case-sensitive strings taken verbatim (after
//! trimming) from the input records.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Person identifier with display formatting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    /// Parse an identifier, rejecting blank strings.
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PersonId(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        PersonId(s)
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets `HashMap<PersonId, _>` be queried with `&str`.
impl Borrow<str> for PersonId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        assert_eq!(PersonId::parse("  Harry "), Some(PersonId::from("Harry")));
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(PersonId::parse(""), None);
        assert_eq!(PersonId::parse("   "), None);
    }

    #[test]
    fn test_serde_transparent() {
        let id = PersonId::from("Lily");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Lily\"");
    }
}
