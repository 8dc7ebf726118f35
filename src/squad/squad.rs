use std::sync::Arc;

use crate::core::config::SQUAD_SIZE;
use crate::core::{Attributes, MemberId, Result, SquadId, SquadronError};
use crate::roster::Member;

/// Four distinct members with their combined attributes
///
/// `attr` and `aggregate` are computed once from the members and never
/// change afterwards.
#[derive(Debug, Clone)]
pub struct Squad {
    id: SquadId,
    members: [Arc<Member>; SQUAD_SIZE],
    attr: Attributes,
    aggregate: i32,
}

impl Squad {
    /// Build a squad from exactly four distinct members, keeping their order
    pub fn new(selection: &[Arc<Member>]) -> Result<Self> {
        let members: [Arc<Member>; SQUAD_SIZE] = selection
            .to_vec()
            .try_into()
            .map_err(|_| SquadronError::InvalidSquadSize(selection.len()))?;

        let ids: Vec<MemberId> = members.iter().map(|m| m.id()).collect();
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                return Err(SquadronError::DuplicateMember(*id));
            }
        }

        let attr: Attributes = members.iter().map(|m| m.attr()).sum();
        Ok(Self {
            id: SquadId::from_members(&ids),
            members,
            attr,
            aggregate: attr.aggregate(),
        })
    }

    pub fn id(&self) -> &SquadId {
        &self.id
    }

    pub fn members(&self) -> &[Arc<Member>; SQUAD_SIZE] {
        &self.members
    }

    pub fn attr(&self) -> Attributes {
        self.attr
    }

    pub fn aggregate(&self) -> i32 {
        self.aggregate
    }

    /// True if the squad plus `bonus` clears `requirements`
    pub fn clears_with(&self, bonus: &Attributes, requirements: &Attributes) -> bool {
        (self.attr + *bonus).clears(requirements)
    }
}

/// Same id, same members in the same order, same combined attributes
impl PartialEq for Squad {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.attr == other.attr
            && self
                .members
                .iter()
                .zip(other.members.iter())
                .all(|(a, b)| a.id() == b.id() && a.attr() == b.attr())
    }
}

impl Eq for Squad {}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: u32, phy: i32, men: i32, tac: i32) -> Arc<Member> {
        Arc::new(Member::new(
            MemberId(id),
            format!("M{}", id),
            "Soldier",
            1,
            Attributes::new(phy, men, tac),
        ))
    }

    #[test]
    fn test_squad_sums_members() {
        let members = vec![
            member(1, 10, 20, 30),
            member(2, 1, 2, 3),
            member(3, 100, 0, 0),
            member(4, 0, 0, 7),
        ];
        let squad = Squad::new(&members).unwrap();
        assert_eq!(squad.attr(), Attributes::new(111, 22, 40));
        assert_eq!(squad.aggregate(), 173);
        assert_eq!(squad.id().as_str(), "1234");
    }

    #[test]
    fn test_wrong_size_rejected() {
        let members = vec![member(1, 0, 0, 0), member(2, 0, 0, 0), member(3, 0, 0, 0)];
        assert!(matches!(
            Squad::new(&members),
            Err(SquadronError::InvalidSquadSize(3))
        ));

        let five: Vec<_> = (1..=5).map(|i| member(i, 0, 0, 0)).collect();
        assert!(matches!(
            Squad::new(&five),
            Err(SquadronError::InvalidSquadSize(5))
        ));
    }

    #[test]
    fn test_repeated_member_rejected() {
        let m = member(1, 0, 0, 0);
        let members = vec![m.clone(), member(2, 0, 0, 0), m, member(3, 0, 0, 0)];
        assert!(matches!(
            Squad::new(&members),
            Err(SquadronError::DuplicateMember(MemberId(1)))
        ));
    }

    #[test]
    fn test_equality_is_structural() {
        let first: Vec<_> = (1..=4).map(|i| member(i, 10, 10, 10)).collect();
        let same: Vec<_> = (1..=4).map(|i| member(i, 10, 10, 10)).collect();
        assert_eq!(Squad::new(&first).unwrap(), Squad::new(&same).unwrap());

        // Same ids from another roster with a stronger member 4
        let mut other: Vec<_> = (1..=3).map(|i| member(i, 10, 10, 10)).collect();
        other.push(member(4, 90, 10, 10));
        let a = Squad::new(&first).unwrap();
        let b = Squad::new(&other).unwrap();
        assert_eq!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_clears_with_bonus() {
        let members: Vec<_> = (1..=4).map(|i| member(i, 50, 50, 50)).collect();
        let squad = Squad::new(&members).unwrap();
        let requirements = Attributes::new(220, 200, 200);
        assert!(!squad.clears_with(&Attributes::ZERO, &requirements));
        assert!(squad.clears_with(&Attributes::new(20, 0, 0), &requirements));
    }
}
