use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;
use crate::domain::types::{GroupId, StudyActivityId, StudySessionId, WordId, WordReviewId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudySession {
    pub id: StudySessionId,
    pub group_id: GroupId,
    #[serde(alias = "activity_id")]
    pub study_activity_id: StudyActivityId,
    #[serde(default)]
    pub group_name: Option<String>,
    #[serde(default)]
    pub activity_name: Option<String>,
    #[serde(default, alias = "start_time")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub review_items_count: u32,
}

impl Searchable for StudySession {
    fn search_fields(&self) -> Vec<&str> {
        [self.activity_name.as_deref(), self.group_name.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// Payload sent to the backend to open a study session.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewStudySession {
    pub group_id: GroupId,
    pub study_activity_id: StudyActivityId,
}

/// A single answer recorded during a study session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WordReview {
    pub id: WordReviewId,
    pub word_id: WordId,
    pub study_session_id: StudySessionId,
    pub correct: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payload sent to the backend to record an answer.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NewWordReview {
    pub word_id: WordId,
    pub correct: bool,
}
