//! Names of the list sources exposed by the backend.

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::domain::types::GroupId;

/// A list source. Each entity maps to one backend collection path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Words,
    Groups,
    /// Words that belong to a single group.
    GroupWords(GroupId),
    StudyActivities,
    StudySessions,
}

/// Backend writes that make cached pages of some entities outdated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    StudySessionCreated,
    ReviewLogged,
}

impl Entity {
    /// Path of the collection relative to the backend base URL.
    pub fn path(&self) -> String {
        self.to_string()
    }

    /// Whether pages of this entity may change after `mutation`.
    pub fn is_affected_by(&self, mutation: Mutation) -> bool {
        match mutation {
            Mutation::StudySessionCreated => matches!(self, Entity::StudySessions),
            // Reviews change the correct/wrong counters of words and the
            // review counts of sessions.
            Mutation::ReviewLogged => matches!(
                self,
                Entity::Words | Entity::GroupWords(_) | Entity::StudySessions
            ),
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Entity::Words => write!(f, "words"),
            Entity::Groups => write!(f, "groups"),
            Entity::GroupWords(id) => write!(f, "groups/{id}"),
            Entity::StudyActivities => write!(f, "study_activities"),
            Entity::StudySessions => write!(f, "study_sessions"),
        }
    }
}
