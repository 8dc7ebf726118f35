//! Planner configuration with documented constants
//!
//! Values here bound the training simulation and the program search. The
//! squad size is not configurable; see [`SQUAD_SIZE`].

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SquadronError};

/// Number of members in every squad
pub const SQUAD_SIZE: usize = 4;

/// Largest attribute value a roster may declare
///
/// Keeps every squad total and training sum far inside `i32`.
pub const MAX_ATTRIBUTE: i32 = 100_000;

/// Longest training program a single day can hold
pub const MAX_DAILY_COURSES: usize = 3;

/// Configuration for training and program search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Cap on every training attribute and on their aggregate
    ///
    /// The training bonus always stays inside this budget; once it is reached,
    /// courses can only move points between attributes.
    pub max_training_attr: i32,

    /// Courses that can still be taken today
    ///
    /// Programs longer than this are rejected, and the exhaustive search
    /// only looks at lengths up to this value.
    pub daily_courses: usize,

    /// Minimum doable-mission count a program must exceed to be reported
    pub report_threshold: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_training_attr: 280,
            daily_courses: MAX_DAILY_COURSES,
            report_threshold: 0,
        }
    }
}

impl PlannerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.max_training_attr <= 0 {
            return Err(SquadronError::InvalidConfig(format!(
                "max_training_attr ({}) must be positive",
                self.max_training_attr
            )));
        }

        if self.daily_courses == 0 || self.daily_courses > MAX_DAILY_COURSES {
            return Err(SquadronError::InvalidConfig(format!(
                "daily_courses ({}) must be between 1 and {}",
                self.daily_courses, MAX_DAILY_COURSES
            )));
        }

        Ok(())
    }
}

// === GLOBAL CONFIG ACCESS ===

use std::sync::OnceLock;

static CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Get the global planner config (initializes with defaults if not set)
pub fn config() -> &'static PlannerConfig {
    CONFIG.get_or_init(PlannerConfig::default)
}

/// Set the global planner config (can only be called once)
///
/// Returns Err if config was already set.
pub fn set_config(config: PlannerConfig) -> std::result::Result<(), PlannerConfig> {
    CONFIG.set(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = PlannerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_training_attr, 280);
        assert_eq!(config.daily_courses, 3);
    }

    #[test]
    fn test_rejects_zero_cap() {
        let config = PlannerConfig {
            max_training_attr: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SquadronError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_out_of_range_daily_courses() {
        for daily_courses in [0, 4] {
            let config = PlannerConfig {
                daily_courses,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: PlannerConfig = toml::from_str("report_threshold = 5").unwrap();
        assert_eq!(config.report_threshold, 5);
        assert_eq!(config.max_training_attr, 280);
    }

    #[test]
    fn test_global_config_defaults() {
        assert!(config().validate().is_ok());
    }
}
