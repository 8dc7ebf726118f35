//! Squadron Planner - squad enumeration, mission qualification and training simulation

pub mod core;
pub mod qualification;
pub mod roster;
pub mod squad;
pub mod squadron;
pub mod training;

pub use crate::core::{Attributes, MemberId, PlannerConfig, Result, SquadId, SquadronError};
pub use crate::roster::{Member, Mission};
pub use crate::squad::{Squad, SquadIndex, SquadOrder};
pub use crate::squadron::{ProgramReport, Squadron};
pub use crate::training::{Course, TrainingProgram};
