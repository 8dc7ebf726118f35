//! Exhaustive squad enumeration
//!
//! Combinations come out in lexicographic order over roster positions:
//! (m0,m1,m2,m3), (m0,m1,m2,m4), ... so the output is fully determined by the
//! roster order.

use std::sync::Arc;

use itertools::Itertools;

use crate::core::config::SQUAD_SIZE;
use crate::core::Result;
use crate::roster::Member;
use crate::squad::Squad;

/// Build one squad per 4-combination of `members`
///
/// Fewer than four members yields no squads. A repeated member id fails the
/// whole enumeration.
pub fn enumerate_squads(members: &[Arc<Member>]) -> Result<Vec<Squad>> {
    let squads = members
        .iter()
        .cloned()
        .combinations(SQUAD_SIZE)
        .map(|selection| Squad::new(&selection))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!("Enumerated {} squads from {} members", squads.len(), members.len());
    Ok(squads)
}
