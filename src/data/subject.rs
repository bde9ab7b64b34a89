use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct SubjectRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubjectRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new subject and returns the persisted record.
    ///
    /// Subject names are unique; inserting a duplicate fails with a
    /// constraint violation from the storage layer.
    pub async fn create(&self, name: String) -> Result<entity::subject::Model, DbErr> {
        entity::subject::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a subject by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find_by_id(id).one(self.db).await
    }

    /// Gets a window of subjects in primary-key order.
    pub async fn list(&self, limit: u64, offset: u64) -> Result<Vec<entity::subject::Model>, DbErr> {
        entity::prelude::Subject::find()
            .order_by_asc(entity::subject::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Updates a subject's name and returns the updated record.
    ///
    /// Returns `None` when no subject exists with the given ID.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::subject::Model>, DbErr> {
        let subject = entity::prelude::Subject::find_by_id(id).one(self.db).await?;

        match subject {
            Some(model) => {
                let mut active_model: entity::subject::ActiveModel = model.into();
                active_model.name = ActiveValue::Set(name);

                let updated = active_model.update(self.db).await?;

                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Deletes a subject, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subject::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
