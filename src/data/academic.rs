use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct AcademicRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new academic and returns the persisted record.
    pub async fn create(&self, name: String) -> Result<entity::academic::Model, DbErr> {
        entity::academic::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets an academic by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::academic::Model>, DbErr> {
        entity::prelude::Academic::find_by_id(id).one(self.db).await
    }

    /// Gets a window of academics in primary-key order.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    /// - `offset` - Number of rows to skip from the start of the collection
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::academic::Model>, DbErr> {
        entity::prelude::Academic::find()
            .order_by_asc(entity::academic::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Updates an academic's name and returns the updated record.
    ///
    /// Returns `None` when no academic exists with the given ID.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::academic::Model>, DbErr> {
        let academic = entity::prelude::Academic::find_by_id(id).one(self.db).await?;

        match academic {
            Some(model) => {
                let mut active_model: entity::academic::ActiveModel = model.into();
                active_model.name = ActiveValue::Set(name);

                let updated = active_model.update(self.db).await?;

                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Deletes an academic, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Academic::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
