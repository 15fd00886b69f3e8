//! Stable rule identities.

use serde::{Deserialize, Serialize};

/// Stable identity of an entry in a [`StableList`](crate::list::StableList).
///
/// Ids are assigned at insertion from a counter that only grows, so within
/// one list's lifetime an id is never reused -- even after its entry is
/// deleted. Position in the list is a separate, independent address: the id
/// answers "which rule is this", the index answers "where does it sit now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RuleId(u64);

impl RuleId {
    /// Wrap a raw id value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Return the raw id value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for RuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RuleId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<RuleId> for u64 {
    fn from(id: RuleId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_and_conversions_round_trip() {
        let id = RuleId::new(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!(u64::from(id), 7);
        assert_eq!(RuleId::from(7), id);
        assert_eq!(id.into_inner(), 7);
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let id = RuleId::new(3);
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let back: RuleId = serde_json::from_str("3").unwrap();
        assert_eq!(back, id);
    }
}
