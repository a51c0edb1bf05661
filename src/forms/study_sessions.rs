//! Forms for starting study sessions and recording answers.

use serde::Deserialize;
use validator::Validate;

use crate::domain::study_session::{NewStudySession, NewWordReview};
use crate::domain::types::{GroupId, StudyActivityId, WordId};
use crate::forms::FormError;

/// Form submitted when launching a study activity for a group.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudySessionForm {
    #[validate(range(min = 1))]
    pub group_id: i32,
    #[validate(range(min = 1))]
    pub study_activity_id: i32,
}

impl TryFrom<CreateStudySessionForm> for NewStudySession {
    type Error = FormError;

    fn try_from(form: CreateStudySessionForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            group_id: GroupId::new(form.group_id).map_err(|_| FormError::InvalidGroupId)?,
            study_activity_id: StudyActivityId::new(form.study_activity_id)
                .map_err(|_| FormError::InvalidStudyActivityId)?,
        })
    }
}

/// Form submitted for a single answer inside a study session.
#[derive(Debug, Deserialize, Validate)]
pub struct ReviewForm {
    #[validate(range(min = 1))]
    pub word_id: i32,
    #[serde(default)]
    pub correct: bool,
}

impl TryFrom<ReviewForm> for NewWordReview {
    type Error = FormError;

    fn try_from(form: ReviewForm) -> Result<Self, Self::Error> {
        form.validate()?;

        Ok(Self {
            word_id: WordId::new(form.word_id).map_err(|_| FormError::InvalidWordId)?,
            correct: form.correct,
        })
    }
}
