//! Load a squadron roster from a TOML file
//!
//! The file carries the squadron's training state, planner settings, members
//! and missions. Everything is validated here so the rest of the crate can
//! trust the records it receives.

use std::path::Path;

use ahash::AHashSet;
use serde::Deserialize;

use crate::core::config::{PlannerConfig, MAX_ATTRIBUTE, SQUAD_SIZE};
use crate::core::{Attributes, MemberId, Result, SquadronError};
use crate::roster::{Member, Mission};

/// A validated roster, ready to become a [`crate::Squadron`]
#[derive(Debug, Clone)]
pub struct RosterFile {
    pub name: String,
    pub training_attr: Attributes,
    pub config: PlannerConfig,
    pub members: Vec<Member>,
    pub missions: Vec<Mission>,
}

/// Read and parse a roster file
pub fn load_roster(path: &Path) -> Result<RosterFile> {
    let content = std::fs::read_to_string(path)?;
    parse_roster(&content)
}

/// Parse roster TOML content
pub fn parse_roster(content: &str) -> Result<RosterFile> {
    let raw: TomlRoster = toml::from_str(content)?;
    raw.planner.validate()?;

    let mut seen = AHashSet::new();
    let mut members = Vec::with_capacity(raw.members.len());
    for member in raw.members {
        let id = MemberId::new(member.id);
        if !seen.insert(id) {
            return Err(SquadronError::DuplicateMember(id));
        }
        let attr = member.attributes.into_attributes(&member.name)?;
        members.push(Member::new(id, member.name, member.job, member.level, attr));
    }

    let missions = raw
        .missions
        .into_iter()
        .map(|mission| {
            let requirements = mission.attributes.into_attributes(&mission.name)?;
            Ok(Mission::new(mission.name, mission.level, mission.xp_reward, requirements)
                .with_availability(mission.available))
        })
        .collect::<Result<Vec<_>>>()?;

    let training_attr = raw.squadron.training.into_attributes("training")?;
    if !training_attr.has_room_for_delta(&Attributes::ZERO, raw.planner.max_training_attr) {
        return Err(SquadronError::RosterLoad(format!(
            "training attributes {} exceed the cap of {}",
            training_attr, raw.planner.max_training_attr
        )));
    }

    if members.len() < SQUAD_SIZE {
        tracing::warn!(
            "Roster '{}' has {} members; no squad of {} can be formed",
            raw.squadron.name,
            members.len(),
            SQUAD_SIZE
        );
    }

    tracing::debug!(
        "Loaded roster '{}': {} members, {} missions",
        raw.squadron.name,
        members.len(),
        missions.len()
    );

    Ok(RosterFile {
        name: raw.squadron.name,
        training_attr,
        config: raw.planner,
        members,
        missions,
    })
}

/// TOML representation of a roster file
#[derive(Debug, Deserialize)]
struct TomlRoster {
    squadron: TomlSquadron,
    #[serde(default)]
    planner: PlannerConfig,
    #[serde(default)]
    members: Vec<TomlMember>,
    #[serde(default)]
    missions: Vec<TomlMission>,
}

#[derive(Debug, Deserialize)]
struct TomlSquadron {
    name: String,
    #[serde(default)]
    training: TomlAttributes,
}

#[derive(Debug, Deserialize)]
struct TomlMember {
    id: u32,
    name: String,
    #[serde(default)]
    job: String,
    #[serde(default)]
    level: u32,
    #[serde(flatten)]
    attributes: TomlAttributes,
}

#[derive(Debug, Deserialize)]
struct TomlMission {
    name: String,
    #[serde(default)]
    level: u32,
    #[serde(default)]
    xp_reward: u32,
    #[serde(default = "default_available")]
    available: bool,
    #[serde(flatten)]
    attributes: TomlAttributes,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
struct TomlAttributes {
    #[serde(default)]
    phy: i32,
    #[serde(default)]
    men: i32,
    #[serde(default)]
    tac: i32,
}

impl TomlAttributes {
    fn into_attributes(self, owner: &str) -> Result<Attributes> {
        let attr = Attributes::new(self.phy, self.men, self.tac);
        if attr.phy < 0 || attr.men < 0 || attr.tac < 0 {
            return Err(SquadronError::RosterLoad(format!(
                "{}: negative attributes {}",
                owner, attr
            )));
        }
        if attr.phy > MAX_ATTRIBUTE || attr.men > MAX_ATTRIBUTE || attr.tac > MAX_ATTRIBUTE {
            return Err(SquadronError::RosterLoad(format!(
                "{}: attributes {} exceed {}",
                owner, attr, MAX_ATTRIBUTE
            )));
        }
        Ok(attr)
    }
}
