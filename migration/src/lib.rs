pub use sea_orm_migration::prelude::*;

mod m20250801_000001_create_academic_table;
mod m20250801_000002_create_petition_table;
mod m20250801_000003_create_request_table;
mod m20250801_000004_create_subject_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_academic_table::Migration),
            Box::new(m20250801_000002_create_petition_table::Migration),
            Box::new(m20250801_000003_create_request_table::Migration),
            Box::new(m20250801_000004_create_subject_table::Migration),
        ]
    }
}
