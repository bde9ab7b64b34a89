//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! entity in the application. Repositories use SeaORM entity models internally and are the
//! only place where queries, inserts, updates, and deletes are performed.

pub mod academic;
pub mod petition;
pub mod request;
pub mod subject;
