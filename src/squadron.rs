//! The squadron: roster, missions, training state and the squad index
//!
//! Squad enumeration runs at most once per squadron. A changed roster needs a
//! new `Squadron`.

use std::path::Path;
use std::sync::Arc;

use ahash::AHashSet;
use serde::Serialize;

use crate::core::{Attributes, Result, SquadronError};
use crate::qualification;
use crate::roster::{load_roster, parse_roster, Member, Mission, RosterFile};
use crate::squad::{Squad, SquadIndex};
use crate::training::{search_programs, Course, ProgramSummary, TrainingProgram};

/// One reported program from [`Squadron::search_programs`]
#[derive(Debug, Clone, Serialize)]
pub struct ProgramReport {
    pub program: ProgramSummary,
    /// Names of available missions doable with the program's bonus
    pub doable: Vec<String>,
    /// Doable missions that are not doable with the current training bonus
    pub newly_unlocked: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Squadron {
    name: String,
    members: Vec<Arc<Member>>,
    missions: Vec<Mission>,
    training_attr: Attributes,
    max_training_attr: i32,
    remaining_daily_courses: usize,
    index: SquadIndex,
    enumerated: bool,
}

impl Squadron {
    pub fn new(
        name: impl Into<String>,
        members: Vec<Member>,
        missions: Vec<Mission>,
        training_attr: Attributes,
        max_training_attr: i32,
        remaining_daily_courses: usize,
    ) -> Result<Self> {
        let mut seen = AHashSet::new();
        if let Some(member) = members.iter().find(|m| !seen.insert(m.id())) {
            return Err(SquadronError::DuplicateMember(member.id()));
        }

        Ok(Self {
            name: name.into(),
            members: members.into_iter().map(Arc::new).collect(),
            missions,
            training_attr,
            max_training_attr,
            remaining_daily_courses,
            index: SquadIndex::default(),
            enumerated: false,
        })
    }

    /// Build a squadron from a loaded roster and enumerate its squads
    pub fn from_roster(roster: RosterFile) -> Result<Self> {
        let mut squadron = Self::new(
            roster.name,
            roster.members,
            roster.missions,
            roster.training_attr,
            roster.config.max_training_attr,
            roster.config.daily_courses,
        )?;
        squadron.enumerate_squads()?;
        Ok(squadron)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_roster(parse_roster(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_roster(load_roster(path)?)
    }

    /// Enumerate and rank every squad; later calls do nothing
    pub fn enumerate_squads(&mut self) -> Result<&SquadIndex> {
        if self.enumerated {
            tracing::debug!("Squads for '{}' already enumerated", self.name);
        } else {
            self.index = SquadIndex::build(&self.members)?;
            self.enumerated = true;
        }
        Ok(&self.index)
    }

    pub fn is_enumerated(&self) -> bool {
        self.enumerated
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Arc<Member>] {
        &self.members
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn mission(&self, name: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.name() == name)
    }

    pub fn training_attr(&self) -> Attributes {
        self.training_attr
    }

    pub fn max_training_attr(&self) -> i32 {
        self.max_training_attr
    }

    pub fn remaining_daily_courses(&self) -> usize {
        self.remaining_daily_courses
    }

    /// Index built by [`Self::enumerate_squads`]; empty until then
    pub fn index(&self) -> &SquadIndex {
        &self.index
    }

    /// Squads in enumeration order
    pub fn squads(&self) -> &[Squad] {
        self.index.squads()
    }

    /// Flip a mission's availability; returns false if no mission has that name
    pub fn set_mission_available(&mut self, name: &str, is_available: bool) -> bool {
        match self.missions.iter_mut().find(|m| m.name() == name) {
            Some(mission) => {
                mission.set_available(is_available);
                true
            }
            None => false,
        }
    }

    // === MISSION QUALIFICATION ===

    /// Squads clearing `mission` with `bonus`, in enumeration order
    pub fn qualifying_squads<'a>(
        &'a self,
        mission: &'a Mission,
        bonus: Attributes,
    ) -> impl Iterator<Item = &'a Squad> + 'a {
        qualification::qualifying_squads(mission, bonus, self.squads())
    }

    pub fn lowest_qualifying_squad<'a>(
        &'a self,
        mission: &'a Mission,
        bonus: Attributes,
    ) -> Option<&'a Squad> {
        qualification::lowest_qualifying_squad(&self.index, mission, bonus)
    }

    pub fn available_missions(&self) -> impl Iterator<Item = &Mission> + Clone {
        qualification::available_missions(&self.missions)
    }

    pub fn mission_is_doable(&self, mission: &Mission, bonus: Attributes) -> bool {
        qualification::mission_is_doable(&self.index, mission, bonus)
    }

    pub fn doable_missions(&self, bonus: Attributes) -> impl Iterator<Item = &Mission> + '_ {
        qualification::doable_missions(&self.index, &self.missions, bonus)
    }

    // === TRAINING ===

    /// Resolve `courses` against the current training bonus
    pub fn program(&self, courses: &[Course]) -> Result<TrainingProgram> {
        if courses.len() > self.remaining_daily_courses {
            return Err(SquadronError::ProgramTooLong {
                requested: courses.len(),
                remaining: self.remaining_daily_courses,
            });
        }
        let program = TrainingProgram::new(
            self.training_attr,
            self.max_training_attr,
            courses.iter().copied(),
        );
        tracing::debug!(
            "Program {} -> {} (redundant: {})",
            program.label(),
            program.attr(),
            program.is_redundant()
        );
        Ok(program)
    }

    /// Every non-redundant program of `length` courses doing more than
    /// `threshold` missions, in product order
    pub fn search_programs(&self, length: usize, threshold: usize) -> Result<Vec<ProgramReport>> {
        if length > self.remaining_daily_courses {
            return Err(SquadronError::ProgramTooLong {
                requested: length,
                remaining: self.remaining_daily_courses,
            });
        }

        let current: Vec<&str> = self
            .doable_missions(self.training_attr)
            .map(|m| m.name())
            .collect();

        let matches = search_programs(
            self.training_attr,
            self.max_training_attr,
            length,
            threshold,
            |bonus| self.doable_missions(*bonus).map(|m| m.name()).collect::<Vec<_>>(),
        );

        Ok(matches
            .into_iter()
            .map(|found| ProgramReport {
                program: ProgramSummary::from(&found.program),
                newly_unlocked: found
                    .doable
                    .iter()
                    .filter(|name| !current.contains(*name))
                    .map(|name| name.to_string())
                    .collect(),
                doable: found.doable.iter().map(|name| name.to_string()).collect(),
            })
            .collect())
    }
}
