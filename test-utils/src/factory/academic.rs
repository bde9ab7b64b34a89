//! Academic factory for creating test academic entities.
//!
//! This module provides factory methods for creating academic entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test academics with customizable fields.
///
/// Provides a builder pattern for creating academic entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::academic::AcademicFactory;
///
/// let academic = AcademicFactory::new(&db)
///     .name("Software Engineering")
///     .build()
///     .await?;
/// ```
pub struct AcademicFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> AcademicFactory<'a> {
    /// Creates a new AcademicFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Academic {id}"` where id is auto-incremented
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AcademicFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Academic {}", id),
        }
    }

    /// Sets the name for the academic.
    ///
    /// # Arguments
    /// - `name` - Display name for the academic
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the academic entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::academic::Model)` - Created academic entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::academic::Model, DbErr> {
        entity::academic::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an academic with default values.
///
/// Shorthand for `AcademicFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::academic::Model)` - Created academic entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_academic(db: &DatabaseConnection) -> Result<entity::academic::Model, DbErr> {
    AcademicFactory::new(db).build().await
}

/// Creates an academic with a specific name.
///
/// Shorthand for `AcademicFactory::new(db).name(name).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Name for the academic
///
/// # Returns
/// - `Ok(entity::academic::Model)` - Created academic entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_academic_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::academic::Model, DbErr> {
    AcademicFactory::new(db).name(name).build().await
}

/// Creates `count` academics with default values.
///
/// Useful for pagination tests that need a known number of rows. The returned
/// models are in insertion order, which matches their assigned IDs.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of academics to create
///
/// # Returns
/// - `Ok(Vec<entity::academic::Model>)` - Created academic entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_academics(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::academic::Model>, DbErr> {
    let mut academics = Vec::with_capacity(count);
    for _ in 0..count {
        academics.push(create_academic(db).await?);
    }
    Ok(academics)
}
