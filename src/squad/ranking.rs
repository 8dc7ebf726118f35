//! Squad ranking index
//!
//! Eight orderings are computed once when the index is built: ascending and
//! descending by aggregate, and by each attribute with aggregate as the
//! tie-break. Descending orderings reverse the primary key and the tie-break
//! together. All sorts are stable, so squads tied on every key keep their
//! enumeration order.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::core::Result;
use crate::roster::Member;
use crate::squad::{enumerate_squads, Squad};

/// Primary sort key of an ordering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankKey {
    Aggregate,
    Phy,
    Men,
    Tac,
}

impl RankKey {
    pub const ALL: [RankKey; 4] = [RankKey::Aggregate, RankKey::Phy, RankKey::Men, RankKey::Tac];

    fn key(&self, squad: &Squad) -> (i32, i32) {
        let attr = squad.attr();
        let aggregate = squad.aggregate();
        match self {
            RankKey::Aggregate => (aggregate, 0),
            RankKey::Phy => (attr.phy, aggregate),
            RankKey::Men => (attr.men, aggregate),
            RankKey::Tac => (attr.tac, aggregate),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

/// One of the eight precomputed orderings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquadOrder {
    pub key: RankKey,
    pub direction: Direction,
}

impl SquadOrder {
    pub const ASC_AGGREGATE: SquadOrder = SquadOrder::asc(RankKey::Aggregate);
    pub const DESC_AGGREGATE: SquadOrder = SquadOrder::desc(RankKey::Aggregate);

    pub const fn asc(key: RankKey) -> Self {
        Self {
            key,
            direction: Direction::Ascending,
        }
    }

    pub const fn desc(key: RankKey) -> Self {
        Self {
            key,
            direction: Direction::Descending,
        }
    }

    /// All eight orderings, ascending first
    pub fn all() -> impl Iterator<Item = SquadOrder> {
        [Direction::Ascending, Direction::Descending]
            .into_iter()
            .flat_map(|direction| RankKey::ALL.into_iter().map(move |key| SquadOrder { key, direction }))
    }

    fn slot(&self) -> usize {
        let key = match self.key {
            RankKey::Aggregate => 0,
            RankKey::Phy => 1,
            RankKey::Men => 2,
            RankKey::Tac => 3,
        };
        match self.direction {
            Direction::Ascending => key,
            Direction::Descending => key + 4,
        }
    }

    fn compare(&self, a: &Squad, b: &Squad) -> Ordering {
        let ordering = self.key.key(a).cmp(&self.key.key(b));
        match self.direction {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

/// Immutable, fully built set of squads with their rankings
#[derive(Debug, Clone, Default)]
pub struct SquadIndex {
    squads: Vec<Squad>,
    /// Positions into `squads`, one vector per [`SquadOrder`] slot
    orderings: [Vec<usize>; 8],
}

impl SquadIndex {
    /// Enumerate every squad of `members` and rank them
    pub fn build(members: &[Arc<Member>]) -> Result<Self> {
        Ok(Self::from_squads(enumerate_squads(members)?))
    }

    /// Rank an already enumerated squad list, keeping its order as the base order
    pub fn from_squads(squads: Vec<Squad>) -> Self {
        let mut orderings: [Vec<usize>; 8] = Default::default();
        for order in SquadOrder::all() {
            let mut positions: Vec<usize> = (0..squads.len()).collect();
            positions.sort_by(|&a, &b| order.compare(&squads[a], &squads[b]));
            orderings[order.slot()] = positions;
        }

        tracing::debug!("Built squad index over {} squads", squads.len());
        Self { squads, orderings }
    }

    /// Squads in enumeration order
    pub fn squads(&self) -> &[Squad] {
        &self.squads
    }

    pub fn len(&self) -> usize {
        self.squads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squads.is_empty()
    }

    /// Squads in the requested order
    pub fn ordered(&self, order: SquadOrder) -> impl Iterator<Item = &Squad> + Clone + '_ {
        self.orderings[order.slot()].iter().map(move |&i| &self.squads[i])
    }

    pub fn by_asc_aggregate(&self) -> impl Iterator<Item = &Squad> + Clone + '_ {
        self.ordered(SquadOrder::ASC_AGGREGATE)
    }

    pub fn by_desc_aggregate(&self) -> impl Iterator<Item = &Squad> + Clone + '_ {
        self.ordered(SquadOrder::DESC_AGGREGATE)
    }
}
