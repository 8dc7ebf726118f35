use thiserror::Error;

use crate::core::types::MemberId;

#[derive(Error, Debug)]
pub enum SquadronError {
    #[error("A squad needs exactly 4 members, got {0}")]
    InvalidSquadSize(usize),

    #[error("Member {0} appears more than once")]
    DuplicateMember(MemberId),

    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    #[error("Program of {requested} courses exceeds the {remaining} remaining daily courses")]
    ProgramTooLong { requested: usize, remaining: usize },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Roster error: {0}")]
    RosterLoad(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SquadronError>;
