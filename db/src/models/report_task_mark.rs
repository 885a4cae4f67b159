use sea_orm::entity::prelude::*;

/// Links a report to the marks it summarises.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "report_task_marks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub report_task_id: i64,

    #[sea_orm(primary_key, auto_increment = false)]
    pub mark_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::report_task::Entity",
        from = "Column::ReportTaskId",
        to = "super::report_task::Column::Id",
        on_delete = "Cascade"
    )]
    ReportTask,

    #[sea_orm(
        belongs_to = "super::mark::Entity",
        from = "Column::MarkId",
        to = "super::mark::Column::Id",
        on_delete = "Cascade"
    )]
    Mark,
}

impl Related<super::report_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ReportTask.def()
    }
}

impl Related<super::mark::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mark.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
