use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Subject entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    #[serde(rename = "SubjectName")]
    pub subject_name: String,
}

/// Payload for creating a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSubjectDto {
    #[serde(rename = "SubjectName")]
    pub subject_name: String,
}

/// Payload for updating a subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateSubjectDto {
    #[serde(rename = "SubjectName")]
    pub subject_name: String,
}

impl From<entity::subject::Model> for SubjectDto {
    fn from(model: entity::subject::Model) -> Self {
        Self {
            id: model.id,
            subject_name: model.name,
        }
    }
}
