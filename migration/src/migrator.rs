use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202502100001_create_users::Migration),
            Box::new(migrations::m202502100002_create_admin_roles::Migration),
            Box::new(migrations::m202502100003_create_students::Migration),
            Box::new(migrations::m202502100004_create_marks::Migration),
            Box::new(migrations::m202502100005_create_report_tasks::Migration),
        ]
    }
}
