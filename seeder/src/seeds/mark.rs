use crate::seed::Seeder;
use db::models::{
    mark::Model as MarkModel, student::Entity as StudentEntity, user::Entity as UserEntity,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

const SUBJECTS: [&str; 7] = [
    "Mathematics",
    "English",
    "Kiswahili",
    "Biology",
    "Chemistry",
    "Physics",
    "History",
];

pub struct MarkSeeder;

#[async_trait::async_trait]
impl Seeder for MarkSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), DbErr> {
        let teacher_ids: Vec<i64> = UserEntity::find()
            .all(db)
            .await?
            .into_iter()
            .map(|u| u.id)
            .collect();
        let students = StudentEntity::find().all(db).await?;

        for student in students {
            // Some students have no marks yet.
            if fastrand::u8(..10) == 0 {
                continue;
            }

            for subject in SUBJECTS {
                if fastrand::bool() && fastrand::bool() {
                    continue;
                }
                let score = fastrand::u32(1_000..=10_000) as f64 / 100.0;
                let teacher_id = (!teacher_ids.is_empty())
                    .then(|| teacher_ids[fastrand::usize(..teacher_ids.len())]);
                MarkModel::create(db, student.id, teacher_id, subject, score).await?;
            }
        }

        Ok(())
    }
}
