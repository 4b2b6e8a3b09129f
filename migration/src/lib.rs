pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users_table;
mod m20250101_000002_create_user_otps_table;
mod m20250101_000003_create_classes_and_lessons_tables;
mod m20250101_000004_create_sets_table;
mod m20250101_000005_create_questions_table;
mod m20250101_000006_create_answers_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users_table::Migration),
            Box::new(m20250101_000002_create_user_otps_table::Migration),
            Box::new(m20250101_000003_create_classes_and_lessons_tables::Migration),
            Box::new(m20250101_000004_create_sets_table::Migration),
            Box::new(m20250101_000005_create_questions_table::Migration),
            Box::new(m20250101_000006_create_answers_table::Migration),
        ]
    }
}
