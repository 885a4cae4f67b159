use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202502100005_create_report_tasks"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Alias::new("report_tasks"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("id")).integer().not_null().auto_increment().primary_key())
                    .col(ColumnDef::new(Alias::new("title")).string().not_null())
                    .col(ColumnDef::new(Alias::new("description")).text().null())
                    .col(ColumnDef::new(Alias::new("created_by")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("metadata")).json().not_null())
                    .col(ColumnDef::new(Alias::new("generation_run")).string().null())
                    .col(ColumnDef::new(Alias::new("created_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .col(ColumnDef::new(Alias::new("updated_at")).timestamp().not_null().default(Expr::cust("CURRENT_TIMESTAMP")))
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("report_tasks"), Alias::new("created_by"))
                            .to(Alias::new("users"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_report_tasks_generation_run")
                    .if_not_exists()
                    .table(Alias::new("report_tasks"))
                    .col(Alias::new("generation_run"))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Alias::new("report_task_marks"))
                    .if_not_exists()
                    .col(ColumnDef::new(Alias::new("report_task_id")).integer().not_null())
                    .col(ColumnDef::new(Alias::new("mark_id")).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Alias::new("report_task_id"))
                            .col(Alias::new("mark_id")),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("report_task_marks"), Alias::new("report_task_id"))
                            .to(Alias::new("report_tasks"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Alias::new("report_task_marks"), Alias::new("mark_id"))
                            .to(Alias::new("marks"), Alias::new("id"))
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Alias::new("report_task_marks")).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Alias::new("report_tasks")).to_owned())
            .await
    }
}
