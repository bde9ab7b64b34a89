//! Request factory for creating test request entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test requests with customizable fields.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> RequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Request {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a request with default values.
pub async fn create_request(db: &DatabaseConnection) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db).build().await
}

/// Creates a request with a specific name.
pub async fn create_request_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db).name(name).build().await
}

/// Creates `count` requests with default values, in insertion order.
pub async fn create_requests(
    db: &DatabaseConnection,
    count: usize,
) -> Result<Vec<entity::request::Model>, DbErr> {
    let mut requests = Vec::with_capacity(count);
    for _ in 0..count {
        requests.push(create_request(db).await?);
    }
    Ok(requests)
}
