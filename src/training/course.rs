//! Courses and their delta cascades

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{Attributes, SquadronError};

/// One training action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Course {
    Phy,
    Men,
    Tac,
    PhyMen,
    PhyTac,
    MenTac,
}

const fn d(phy: i32, men: i32, tac: i32) -> Attributes {
    Attributes::new(phy, men, tac)
}

// Candidate deltas in priority order: intended gain, the same gain with the
// total held constant, then 20-point fallbacks.

const PHY_DELTAS: &[Attributes] = &[
    d(40, 0, 0),
    d(40, -20, -20),
    d(20, 0, 0),
    d(20, -20, 0),
    d(20, 0, -20),
];

const MEN_DELTAS: &[Attributes] = &[
    d(0, 40, 0),
    d(-20, 40, -20),
    d(0, 20, 0),
    d(-20, 20, 0),
    d(0, 20, -20),
];

const TAC_DELTAS: &[Attributes] = &[
    d(0, 0, 40),
    d(-20, -20, 40),
    d(0, 0, 20),
    d(-20, 0, 20),
    d(0, -20, 20),
];

const PHY_MEN_DELTAS: &[Attributes] = &[
    d(20, 20, 0),
    d(20, 20, -40),
    d(20, 0, 0),
    d(0, 20, 0),
    d(20, 0, -20),
    d(0, 20, -20),
    d(20, -20, 0),
    d(-20, 20, 0),
];

const PHY_TAC_DELTAS: &[Attributes] = &[
    d(20, 0, 20),
    d(20, -40, 20),
    d(20, 0, 0),
    d(0, 0, 20),
    d(20, -20, 0),
    d(0, -20, 20),
    d(20, 0, -20),
    d(-20, 0, 20),
];

const MEN_TAC_DELTAS: &[Attributes] = &[
    d(0, 20, 20),
    d(-40, 20, 20),
    d(0, 20, 0),
    d(0, 0, 20),
    d(-20, 20, 0),
    d(-20, 0, 20),
    d(0, 20, -20),
    d(0, -20, 20),
];

impl Course {
    pub const ALL: [Course; 6] = [
        Course::Phy,
        Course::Men,
        Course::Tac,
        Course::PhyMen,
        Course::PhyTac,
        Course::MenTac,
    ];

    /// Candidate deltas, highest priority first
    pub fn deltas(&self) -> &'static [Attributes] {
        match self {
            Course::Phy => PHY_DELTAS,
            Course::Men => MEN_DELTAS,
            Course::Tac => TAC_DELTAS,
            Course::PhyMen => PHY_MEN_DELTAS,
            Course::PhyTac => PHY_TAC_DELTAS,
            Course::MenTac => MEN_TAC_DELTAS,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Course::Phy => "PHY",
            Course::Men => "MEN",
            Course::Tac => "TAC",
            Course::PhyMen => "PHY_MEN",
            Course::PhyTac => "PHY_TAC",
            Course::MenTac => "MEN_TAC",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Course {
    type Err = SquadronError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace(['-', '+'], "_");
        Course::ALL
            .into_iter()
            .find(|course| course.tag() == normalized)
            .ok_or_else(|| SquadronError::UnknownCourse(s.to_string()))
    }
}

/// Result of resolving one course against a training vector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseOutcome {
    pub course: Course,
    /// Training vector after the course
    pub attr: Attributes,
    /// Delta that was applied, `None` when every candidate failed
    pub delta: Option<Attributes>,
}

impl CourseOutcome {
    pub fn is_redundant(&self) -> bool {
        self.delta.is_none()
    }
}

/// Resolve `course` against `base`: the first candidate delta that leaves room
/// under `cap` is applied, otherwise `base` comes back unchanged
pub fn apply_course(base: Attributes, course: Course, cap: i32) -> CourseOutcome {
    let delta = course
        .deltas()
        .iter()
        .copied()
        .find(|delta| base.has_room_for_delta(delta, cap));

    CourseOutcome {
        course,
        attr: delta.map_or(base, |delta| base + delta),
        delta,
    }
}
