use serde::{Deserialize, Serialize};

use crate::model::student::StudentDraft;

/// Request payload for `POST /students`.
/// Carries the client-allocated id next to the draft fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub id: String,
    #[serde(flatten)]
    pub fields: StudentDraft,
}

impl CreateStudentRequest {
    pub fn new(id: impl Into<String>, fields: StudentDraft) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}
