use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Petition entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PetitionDto {
    pub id: i32,
    #[serde(rename = "PetitionName")]
    pub petition_name: String,
}

/// Payload for creating a petition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatePetitionDto {
    #[serde(rename = "PetitionName")]
    pub petition_name: String,
}

/// Payload for updating a petition.
///
/// The record ID comes from the request path; an `id` key in the body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePetitionDto {
    #[serde(rename = "PetitionName")]
    pub petition_name: String,
}

impl From<entity::petition::Model> for PetitionDto {
    fn from(model: entity::petition::Model) -> Self {
        Self {
            id: model.id,
            petition_name: model.name,
        }
    }
}
