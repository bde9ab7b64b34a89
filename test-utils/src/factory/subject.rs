//! Subject factory for creating test subject entities.
//!
//! Subject names carry a unique constraint, so the factory defaults are
//! generated from the shared counter to stay collision-free across a test.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subjects with customizable fields.
pub struct SubjectFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SubjectFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Subject {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subject with default values.
pub async fn create_subject(db: &DatabaseConnection) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).build().await
}

/// Creates a subject with a specific name.
pub async fn create_subject_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::subject::Model, DbErr> {
    SubjectFactory::new(db).name(name).build().await
}

/// Creates `count` subjects with default values, in insertion order.
pub async fn create_subjects(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::subject::Model>, DbErr> {
    let mut subjects = Vec::with_capacity(count);
    for _ in 0..count {
        subjects.push(create_subject(db).await?);
    }
    Ok(subjects)
}
