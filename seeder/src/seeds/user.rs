use crate::seed::Seeder;
use db::models::{admin_role::Capability, user::Model};
use fake::{
    Fake,
    faker::{internet::en::SafeEmail, name::en::Name},
};
use sea_orm::{DatabaseConnection, DbErr};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        // Fixed administrator, allowed to generate term reports
        let admin = Model::create(db, "School Administrator", "admin@kcb.school").await?;
        Model::grant_capability(db, admin.id, Capability::ReportAdmin).await?;
        Model::grant_capability(db, admin.id, Capability::StudentAdmin).await?;

        // Fixed teacher without capabilities
        Model::create(db, "Class Teacher", "teacher@kcb.school").await?;

        // Random teachers
        for _ in 0..4 {
            let name: String = Name().fake();
            let email: String = SafeEmail().fake();
            Model::create(db, &name, &email).await?;
        }

        Ok(())
    }
}
