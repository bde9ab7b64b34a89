use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Academic entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AcademicDto {
    pub id: i32,
    #[serde(rename = "AcademicName")]
    pub academic_name: String,
}

/// Payload for creating an academic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateAcademicDto {
    #[serde(rename = "AcademicName")]
    pub academic_name: String,
}

/// Payload for updating an academic.
///
/// The record ID comes from the request path; an `id` key in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateAcademicDto {
    #[serde(rename = "AcademicName")]
    pub academic_name: String,
}

impl From<entity::academic::Model> for AcademicDto {
    fn from(model: entity::academic::Model) -> Self {
        Self {
            id: model.id,
            academic_name: model.name,
        }
    }
}
