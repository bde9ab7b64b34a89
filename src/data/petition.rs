use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect,
};

pub struct PetitionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PetitionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new petition and returns the persisted record.
    ///
    /// Petition names are unique; inserting a duplicate fails with a
    /// constraint violation from the storage layer.
    pub async fn create(&self, name: String) -> Result<entity::petition::Model, DbErr> {
        entity::petition::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a petition by ID.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::petition::Model>, DbErr> {
        entity::prelude::Petition::find_by_id(id).one(self.db).await
    }

    /// Gets a window of petitions in primary-key order.
    pub async fn list(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<entity::petition::Model>, DbErr> {
        entity::prelude::Petition::find()
            .order_by_asc(entity::petition::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Updates a petition's name and returns the updated record.
    ///
    /// Returns `None` when no petition exists with the given ID.
    pub async fn update(
        &self,
        id: i32,
        name: String,
    ) -> Result<Option<entity::petition::Model>, DbErr> {
        let petition = entity::prelude::Petition::find_by_id(id).one(self.db).await?;

        match petition {
            Some(model) => {
                let mut active_model: entity::petition::ActiveModel = model.into();
                active_model.name = ActiveValue::Set(name);

                let updated = active_model.update(self.db).await?;

                Ok(Some(updated))
            }
            None => Ok(None),
        }
    }

    /// Deletes a petition, returning whether a row was removed.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Petition::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
