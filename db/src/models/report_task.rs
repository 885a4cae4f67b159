use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{JoinType, QueryOrder, QuerySelect, TransactionTrait};
use serde::{Deserialize, Serialize};

use crate::models::{mark, report_task_mark};

/// A persisted report. `metadata` is opaque JSON owned by whoever created the report.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "report_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub title: String,
    pub description: Option<String>,

    /// User who created (or generated) the report.
    pub created_by: i64,

    pub metadata: Json,

    /// Identifier of the batch generation run that produced this report, if any.
    pub generation_run: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedBy",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    CreatedBy,

    #[sea_orm(has_many = "super::report_task_mark::Entity")]
    ReportTaskMarks,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl Related<super::report_task_mark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportTaskMarks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Everything needed to insert a report and link it to its marks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReportTask {
    pub title: String,
    pub description: Option<String>,
    pub created_by: i64,
    pub metadata: Json,
    pub mark_ids: Vec<i64>,
    pub generation_run: Option<String>,
}

impl Model {
    /// Inserts the report row and its mark links in a single transaction.
    pub async fn create_with_marks(db: &DbConn, report: NewReportTask) -> Result<Model, DbErr> {
        let txn = db.begin().await?;
        let now = Utc::now();

        let created = ActiveModel {
            title: Set(report.title),
            description: Set(report.description),
            created_by: Set(report.created_by),
            metadata: Set(report.metadata),
            generation_run: Set(report.generation_run),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !report.mark_ids.is_empty() {
            let links = report
                .mark_ids
                .into_iter()
                .map(|mark_id| report_task_mark::ActiveModel {
                    report_task_id: Set(created.id),
                    mark_id: Set(mark_id),
                });
            report_task_mark::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;
        Ok(created)
    }

    /// Marks linked to a report, in insertion order.
    pub async fn linked_marks(db: &DbConn, report_id: i64) -> Result<Vec<mark::Model>, DbErr> {
        mark::Entity::find()
            .join_rev(JoinType::InnerJoin, report_task_mark::Relation::Mark.def())
            .filter(report_task_mark::Column::ReportTaskId.eq(report_id))
            .order_by_asc(mark::Column::CreatedAt)
            .order_by_asc(mark::Column::Id)
            .all(db)
            .await
    }

    /// Reports produced by one generation run, oldest first.
    pub async fn find_by_run(db: &DbConn, run_id: &str) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::GenerationRun.eq(run_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }
}
