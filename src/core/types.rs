//! Identifier types shared by the roster and squad modules

use std::fmt;

use serde::{Deserialize, Serialize};

/// Roster-unique member identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MemberId(pub u32);

impl MemberId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Squad identifier: member ids concatenated in combination order
///
/// Two squads with the same members listed in a different order get different
/// ids. The enumerator always lists members in roster order, so ids are stable
/// for as long as the roster order is.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SquadId(pub String);

impl SquadId {
    pub fn from_members(ids: &[MemberId]) -> Self {
        Self(ids.iter().map(|id| id.to_string()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SquadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_id_equality() {
        let a = MemberId(1);
        let b = MemberId(1);
        let c = MemberId(2);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_squad_id_keeps_combination_order() {
        let forward = SquadId::from_members(&[MemberId(3), MemberId(1), MemberId(4), MemberId(2)]);
        let sorted = SquadId::from_members(&[MemberId(1), MemberId(2), MemberId(3), MemberId(4)]);
        assert_eq!(forward.as_str(), "3142");
        assert_ne!(forward, sorted);
    }

    #[test]
    fn test_squad_id_multi_digit_ids() {
        let id = SquadId::from_members(&[MemberId(10), MemberId(2), MemberId(33), MemberId(4)]);
        assert_eq!(id.to_string(), "102334");
    }
}
