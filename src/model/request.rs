use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request entity as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RequestDto {
    pub id: i32,
    #[serde(rename = "RequestName")]
    pub request_name: String,
}

/// Payload for creating a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRequestDto {
    #[serde(rename = "RequestName")]
    pub request_name: String,
}

/// Payload for updating a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateRequestDto {
    #[serde(rename = "RequestName")]
    pub request_name: String,
}

impl From<entity::request::Model> for RequestDto {
    fn from(model: entity::request::Model) -> Self {
        Self {
            id: model.id,
            request_name: model.name,
        }
    }
}
