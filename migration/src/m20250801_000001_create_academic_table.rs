use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Academic::Table)
                    .if_not_exists()
                    .col(pk_auto(Academic::Id))
                    .col(string(Academic::Name))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Academic::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Academic {
    Table,
    Id,
    Name,
}
