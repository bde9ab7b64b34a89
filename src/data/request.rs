use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct RequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new request and returns the persisted record.
    pub async fn create(&self, name: String) -> Result<entity::request::Model, DbErr> {
        entity::request::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a request by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::request::Model>, DbErr> {
        entity::prelude::Request::find_by_id(id).one(self.db).await
    }

    /// Gets a window of requests in primary-key order.
    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<entity::request::Model>, DbErr> {
        entity::prelude::Request::find()
            .order_by_asc(entity::request::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Updates a request's name and returns the updated record.
    ///
    /// Returns `None` when no request exists with the given ID.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::request::Model>, DbErr> {
        let request = entity::prelude::Request::find_by_id(id).one(self.db).await?;

        match request {
            Some(model) => {
                let mut active_model: entity::request::ActiveModel = model.into();
                active_model.name = ActiveValue::Set(name);

                let updated = active_model.update(self.db).await?;

                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Deletes a request, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Request::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
