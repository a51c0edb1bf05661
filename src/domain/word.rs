use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;
use crate::domain::types::{NonEmptyString, WordId};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Word {
    pub id: WordId,
    pub german: NonEmptyString,
    pub english: NonEmptyString,
    /// Grammatical class such as noun or verb, when the backend tracks it.
    #[serde(default, rename = "class", skip_serializing_if = "Option::is_none")]
    pub word_class: Option<String>,
    #[serde(default, alias = "correctCount")]
    pub correct_count: u32,
    #[serde(default, alias = "wrongCount")]
    pub wrong_count: u32,
}

impl Word {
    /// Total number of reviews recorded for the word.
    pub fn review_count(&self) -> u32 {
        self.correct_count.saturating_add(self.wrong_count)
    }
}

impl Searchable for Word {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.german.as_str(), self.english.as_str()]
    }
}
