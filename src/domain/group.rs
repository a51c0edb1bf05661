use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;
use crate::domain::types::{GroupId, NonEmptyString};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Group {
    pub id: GroupId,
    pub name: NonEmptyString,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "wordCount")]
    pub words_count: u32,
}

impl Searchable for Group {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }
}
