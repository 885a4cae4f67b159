use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, QuerySelect};
use serde::{Deserialize, Serialize};

use crate::models::mark;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub name: String,

    /// School-issued identifier, unique across the school.
    #[sea_orm(unique)]
    pub student_number: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::mark::Entity")]
    Marks,
}

impl Related<super::mark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(db: &DbConn, name: &str, student_number: &str) -> Result<Model, DbErr> {
        let now = Utc::now();
        ActiveModel {
            name: Set(name.to_owned()),
            student_number: Set(student_number.to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Updates the given fields. `None` leaves a field untouched.
    pub async fn update(
        db: &DbConn,
        id: i64,
        name: Option<&str>,
        student_number: Option<&str>,
    ) -> Result<Model, DbErr> {
        let mut student = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };

        if let Some(name) = name {
            student.name = Set(name.to_owned());
        }
        if let Some(number) = student_number {
            student.student_number = Set(number.to_owned());
        }

        student.update(db).await
    }

    pub async fn delete(db: &DbConn, id: i64) -> Result<u64, DbErr> {
        let result = Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Loads the first `limit` students (oldest first) together with their marks.
    ///
    /// Students are ordered by `created_at` then `id`; each student's marks keep
    /// insertion order (`created_at` then `id`). Report summaries depend on that
    /// order for tie-breaking, so it must stay stable.
    pub async fn find_eligible_with_marks(
        db: &DbConn,
        limit: u64,
    ) -> Result<Vec<(Model, Vec<mark::Model>)>, DbErr> {
        let students = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .limit(limit)
            .all(db)
            .await?;

        if students.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = students.iter().map(|s| s.id).collect();
        let marks = mark::Entity::find()
            .filter(mark::Column::StudentId.is_in(ids))
            .order_by_asc(mark::Column::CreatedAt)
            .order_by_asc(mark::Column::Id)
            .all(db)
            .await?;

        let mut by_student: HashMap<i64, Vec<mark::Model>> = HashMap::new();
        for m in marks {
            by_student.entry(m.student_id).or_default().push(m);
        }

        Ok(students
            .into_iter()
            .map(|s| {
                let marks = by_student.remove(&s.id).unwrap_or_default();
                (s, marks)
            })
            .collect())
    }
}
