pub use sea_orm_migration::prelude::*;

mod m20240115_000001_create_users_table;
mod m20240115_000002_create_posts_table;
mod m20240115_000003_create_projects_table;
mod m20240115_000004_seed_demo_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240115_000001_create_users_table::Migration),
            Box::new(m20240115_000002_create_posts_table::Migration),
            Box::new(m20240115_000003_create_projects_table::Migration),
            Box::new(m20240115_000004_seed_demo_data::Migration),
        ]
    }
}
