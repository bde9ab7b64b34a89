//! Petition factory for creating test petition entities.
//!
//! Petition names carry a unique constraint, so the factory defaults are
//! generated from the shared counter to stay collision-free across a test.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test petitions with customizable fields.
pub struct PetitionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> PetitionFactory<'a> {
    /// Creates a new PetitionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Petition {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Petition {}", id),
        }
    }

    /// Sets the name for the petition.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the petition entity into the database.
    pub async fn build(self) -> Result<entity::petition::Model, DbErr> {
        entity::petition::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a petition with default values.
pub async fn create_petition(db: &DatabaseConnection) -> Result<entity::petition::Model, DbErr> {
    PetitionFactory::new(db).build().await
}

/// Creates a petition with a specific name.
pub async fn create_petition_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::petition::Model, DbErr> {
    PetitionFactory::new(db).name(name).build().await
}

/// Creates `count` petitions with default values, in insertion order.
pub async fn create_petitions(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::petition::Model>, DbErr> {
    let mut petitions = Vec::with_capacity(count);
    for _ in 0..count {
        petitions.push(create_petition(db).await?);
    }
    Ok(petitions)
}
