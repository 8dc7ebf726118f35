use serde::{Deserialize, Serialize};

use crate::core::{Attributes, MemberId};

/// A squadron member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    id: MemberId,
    name: String,
    job: String,
    level: u32,
    attr: Attributes,
}

impl Member {
    pub fn new(
        id: MemberId,
        name: impl Into<String>,
        job: impl Into<String>,
        level: u32,
        attr: Attributes,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            job: job.into(),
            level,
            attr,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn job(&self) -> &str {
        &self.job
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn attr(&self) -> Attributes {
        self.attr
    }
}
