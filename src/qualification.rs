//! Mission qualification queries
//!
//! A squad qualifies for a mission when its attributes plus a bonus clear the
//! mission requirements. All queries are lazy iterators: they read squads and
//! mission availability at iteration time and stop as soon as the caller
//! stops pulling.

use crate::core::Attributes;
use crate::roster::Mission;
use crate::squad::{Squad, SquadIndex};

/// Squads from `squads` that clear `mission` with `bonus`, in input order
///
/// Pass [`SquadIndex::by_asc_aggregate`] to see the weakest qualifying squads
/// first.
pub fn qualifying_squads<'a, I>(
    mission: &'a Mission,
    bonus: Attributes,
    squads: I,
) -> impl Iterator<Item = &'a Squad> + 'a
where
    I: IntoIterator<Item = &'a Squad>,
    I::IntoIter: 'a,
{
    let requirements = mission.requirements();
    squads
        .into_iter()
        .filter(move |squad| squad.clears_with(&bonus, &requirements))
}

/// Qualifying squad with the lowest aggregate; ties go to the earlier squad in
/// enumeration order
pub fn lowest_qualifying_squad<'a>(
    index: &'a SquadIndex,
    mission: &'a Mission,
    bonus: Attributes,
) -> Option<&'a Squad> {
    qualifying_squads(mission, bonus, index.by_asc_aggregate()).next()
}

/// Missions currently flagged available
pub fn available_missions(missions: &[Mission]) -> impl Iterator<Item = &Mission> + Clone {
    missions.iter().filter(|mission| mission.is_available())
}

/// True if any squad clears `mission` with `bonus`
pub fn mission_is_doable(index: &SquadIndex, mission: &Mission, bonus: Attributes) -> bool {
    let requirements = mission.requirements();
    index
        .squads()
        .iter()
        .any(|squad| squad.clears_with(&bonus, &requirements))
}

/// Available missions that some squad can complete with `bonus`
pub fn doable_missions<'a>(
    index: &'a SquadIndex,
    missions: &'a [Mission],
    bonus: Attributes,
) -> impl Iterator<Item = &'a Mission> + 'a {
    available_missions(missions).filter(move |mission| mission_is_doable(index, mission, bonus))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MemberId;
    use crate::roster::Member;
    use std::sync::Arc;

    fn index() -> SquadIndex {
        let attrs = [
            (60, 20, 20),
            (20, 60, 20),
            (20, 20, 60),
            (40, 40, 40),
            (10, 10, 10),
            (80, 0, 0),
        ];
        let members: Vec<_> = attrs
            .iter()
            .enumerate()
            .map(|(i, &(p, m, t))| {
                Arc::new(Member::new(
                    MemberId(i as u32 + 1),
                    format!("M{}", i + 1),
                    "Soldier",
                    1,
                    Attributes::new(p, m, t),
                ))
            })
            .collect();
        SquadIndex::build(&members).unwrap()
    }

    #[test]
    fn test_qualifying_squads_follow_input_order() {
        let index = index();
        let mission = Mission::new("Sweep", 1, 10, Attributes::new(100, 60, 60));
        let unsorted: Vec<_> = qualifying_squads(&mission, Attributes::ZERO, index.squads())
            .map(|s| s.id().clone())
            .collect();
        let expected: Vec<_> = index
            .squads()
            .iter()
            .filter(|s| s.attr().clears(&mission.requirements()))
            .map(|s| s.id().clone())
            .collect();
        assert!(!unsorted.is_empty());
        assert_eq!(unsorted, expected);
    }

    #[test]
    fn test_lowest_matches_min_by_aggregate() {
        let index = index();
        let mission = Mission::new("Sweep", 1, 10, Attributes::new(120, 90, 90));
        let bonus = Attributes::new(10, 0, 0);
        let lowest = lowest_qualifying_squad(&index, &mission, bonus).unwrap();
        // min_by_key keeps the first of equal elements
        let expected = qualifying_squads(&mission, bonus, index.squads())
            .min_by_key(|s| s.aggregate())
            .unwrap();
        assert_eq!(lowest.id(), expected.id());
    }

    #[test]
    fn test_lowest_none_when_out_of_reach() {
        let index = index();
        let mission = Mission::new("Impossible", 1, 10, Attributes::new(999, 0, 0));
        assert!(lowest_qualifying_squad(&index, &mission, Attributes::ZERO).is_none());
        assert!(!mission_is_doable(&index, &mission, Attributes::ZERO));
    }

    #[test]
    fn test_bonus_unlocks_mission() {
        let index = index();
        // Best phy squad: 60 + 40 + 80 + 20 = 200
        let mission = Mission::new("Siege", 1, 10, Attributes::new(230, 0, 0));
        assert!(!mission_is_doable(&index, &mission, Attributes::ZERO));
        assert!(mission_is_doable(&index, &mission, Attributes::new(40, 0, 0)));
    }

    #[test]
    fn test_available_missions_reads_current_flag() {
        let mut missions = vec![
            Mission::new("A", 1, 10, Attributes::ZERO),
            Mission::new("B", 1, 10, Attributes::ZERO).with_availability(false),
        ];
        assert_eq!(available_missions(&missions).count(), 1);
        missions[1].set_available(true);
        assert_eq!(available_missions(&missions).count(), 2);
    }

    #[test]
    fn test_doable_missions_skip_unavailable() {
        let index = index();
        let missions = vec![
            Mission::new("Easy", 1, 10, Attributes::new(10, 10, 10)),
            Mission::new("Closed", 1, 10, Attributes::new(10, 10, 10)).with_availability(false),
            Mission::new("Hard", 1, 10, Attributes::new(500, 0, 0)),
        ];
        let names: Vec<_> = doable_missions(&index, &missions, Attributes::ZERO)
            .map(|m| m.name())
            .collect();
        assert_eq!(names, vec!["Easy"]);
    }
}
