use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Petition::Table)
                    .if_not_exists()
                    .col(pk_auto(Petition::Id))
                    .col(string_uniq(Petition::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Petition::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Petition {
    Table,
    Id,
    Name,
}
