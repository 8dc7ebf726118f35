//! Attribute vector: the (Physical, Mental, Tactical) triple
//!
//! Used for member strength, mission requirements, squad totals and the
//! training bonus. Values are plain integers; intermediate results may be
//! negative while candidate training deltas are being evaluated. Arithmetic is
//! unchecked: inputs are expected within `[0, MAX_ATTRIBUTE]`, which the roster
//! loader enforces.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Immutable attribute triple
///
/// Ordering is lexicographic over (phy, men, tac) so vectors can serve as a
/// deterministic tie-break key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub phy: i32,
    pub men: i32,
    pub tac: i32,
}

impl Attributes {
    pub const ZERO: Attributes = Attributes { phy: 0, men: 0, tac: 0 };

    pub const fn new(phy: i32, men: i32, tac: i32) -> Self {
        Self { phy, men, tac }
    }

    /// Sum of the three components
    pub fn aggregate(&self) -> i32 {
        self.phy + self.men + self.tac
    }

    /// True if every component meets or exceeds the requirement's component
    pub fn clears(&self, requirements: &Attributes) -> bool {
        self.phy >= requirements.phy && self.men >= requirements.men && self.tac >= requirements.tac
    }

    /// True if `self + delta` keeps every component within `[0, cap]` and the
    /// resulting aggregate at or below `cap`
    pub fn has_room_for_delta(&self, delta: &Attributes, cap: i32) -> bool {
        let next = *self + *delta;
        let in_range = |v: i32| (0..=cap).contains(&v);
        in_range(next.phy) && in_range(next.men) && in_range(next.tac) && next.aggregate() <= cap
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:3} / {:3} / {:3})", self.phy, self.men, self.tac)
    }
}

impl Add for Attributes {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            phy: self.phy + rhs.phy,
            men: self.men + rhs.men,
            tac: self.tac + rhs.tac,
        }
    }
}

impl Sub for Attributes {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            phy: self.phy - rhs.phy,
            men: self.men - rhs.men,
            tac: self.tac - rhs.tac,
        }
    }
}

impl Sum for Attributes {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Attributes> for Attributes {
    fn sum<I: Iterator<Item = &'a Attributes>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
