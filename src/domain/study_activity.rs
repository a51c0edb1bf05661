use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;
use crate::domain::types::{NonEmptyString, StudyActivityId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StudyActivity {
    pub id: StudyActivityId,
    pub name: NonEmptyString,
    /// Launch URL of the activity.
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl Searchable for StudyActivity {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}
