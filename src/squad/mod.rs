//! Squad enumeration and ranking
//!
//! Every 4-member combination of the roster becomes a [`Squad`]. The
//! [`SquadIndex`] owns the enumerated squads together with eight precomputed
//! orderings used by mission qualification queries.

pub mod enumerate;
pub mod ranking;
pub mod squad;

pub use enumerate::enumerate_squads;
pub use ranking::{Direction, RankKey, SquadIndex, SquadOrder};
pub use squad::Squad;
