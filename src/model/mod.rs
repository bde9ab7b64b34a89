//! Wire-format DTOs for the HTTP API.
//!
//! Request and response bodies are bound to these types rather than to the
//! entity models directly, keeping the JSON field names (`AcademicName`,
//! `PetitionName`, ...) decoupled from the storage schema.

pub mod academic;
pub mod api;
pub mod petition;
pub mod request;
pub mod subject;
