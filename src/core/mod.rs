pub mod attributes;
pub mod config;
pub mod error;
pub mod types;

pub use attributes::Attributes;
pub use config::{config, set_config, PlannerConfig};
pub use error::{Result, SquadronError};
pub use types::{MemberId, SquadId};
