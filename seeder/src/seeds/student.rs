use crate::seed::Seeder;
use db::models::student::Model;
use fake::{Fake, faker::name::en::Name};
use sea_orm::{DatabaseConnection, DbErr};

/// More than the default per-run limit, so the cap is visible.
const STUDENT_COUNT: u32 = 150;

pub struct StudentSeeder;

#[async_trait::async_trait]
impl Seeder for StudentSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        for n in 1..=STUDENT_COUNT {
            let name: String = Name().fake();
            Model::create(db, &name, &format!("KCB-{n:04}")).await?;
        }
        Ok(())
    }
}
