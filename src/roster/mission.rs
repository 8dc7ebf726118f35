use serde::{Deserialize, Serialize};

use crate::core::Attributes;

/// A mission with an attribute threshold
///
/// Everything except availability is fixed at construction. Availability is
/// owned by whoever tracks game state and may change between queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    name: String,
    level: u32,
    xp_reward: u32,
    requirements: Attributes,
    is_available: bool,
}

impl Mission {
    pub fn new(name: impl Into<String>, level: u32, xp_reward: u32, requirements: Attributes) -> Self {
        Self {
            name: name.into(),
            level,
            xp_reward,
            requirements,
            is_available: true,
        }
    }

    /// Builder: set initial availability
    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    pub fn requirements(&self) -> Attributes {
        self.requirements
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    pub fn set_available(&mut self, is_available: bool) {
        self.is_available = is_available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mission_is_available() {
        let mission = Mission::new("Patrol", 10, 150, Attributes::new(100, 100, 100));
        assert!(mission.is_available());
        assert_eq!(mission.requirements().aggregate(), 300);
    }

    #[test]
    fn test_toggle_availability() {
        let mut mission = Mission::new("Patrol", 10, 150, Attributes::ZERO).with_availability(false);
        assert!(!mission.is_available());
        mission.set_available(true);
        assert!(mission.is_available());
    }
}
