//! Persistence seams used by the report generator.
//!
//! The generator only talks to the datastore through [`CapabilityCheck`] and
//! [`ReportStore`]; [`SeaOrmReportStore`] implements both on top of the `db`
//! models.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use db::models::{
    mark,
    report_task::{self, NewReportTask},
    student,
    user::Model as UserModel,
};

pub use db::models::admin_role::Capability;

/// A mark as seen by the report generator.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkEntry {
    pub id: i64,
    pub subject: String,
    pub score: f64,
    pub teacher_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl From<mark::Model> for MarkEntry {
    fn from(mark: mark::Model) -> Self {
        Self {
            id: mark.id,
            subject: mark.subject,
            score: mark.score,
            teacher_id: mark.teacher_id,
            created_at: mark.created_at,
        }
    }
}

/// A student together with their marks in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub marks: Vec<MarkEntry>,
}

impl From<(student::Model, Vec<mark::Model>)> for StudentRecord {
    fn from((student, marks): (student::Model, Vec<mark::Model>)) -> Self {
        Self {
            id: student.id,
            name: student.name,
            created_at: student.created_at,
            marks: marks.into_iter().map(MarkEntry::from).collect(),
        }
    }
}

#[async_trait]
pub trait CapabilityCheck: Send + Sync {
    async fn has_capability(&self, user_id: i64, capability: Capability) -> Result<bool, DbErr>;
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// First `limit` students by creation time, each with their marks.
    async fn eligible_students(&self, limit: u64) -> Result<Vec<StudentRecord>, DbErr>;

    /// Persists one report and links it to the given marks.
    async fn create_report(&self, report: NewReportTask) -> Result<report_task::Model, DbErr>;
}

/// SeaORM-backed implementation of the generator's persistence seams.
#[derive(Clone)]
pub struct SeaOrmReportStore {
    db: DatabaseConnection,
}

impl SeaOrmReportStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CapabilityCheck for SeaOrmReportStore {
    async fn has_capability(&self, user_id: i64, capability: Capability) -> Result<bool, DbErr> {
        UserModel::has_capability(&self.db, user_id, capability).await
    }
}

#[async_trait]
impl ReportStore for SeaOrmReportStore {
    async fn eligible_students(&self, limit: u64) -> Result<Vec<StudentRecord>, DbErr> {
        let rows = student::Model::find_eligible_with_marks(&self.db, limit).await?;
        Ok(rows.into_iter().map(StudentRecord::from).collect())
    }

    async fn create_report(&self, report: NewReportTask) -> Result<report_task::Model, DbErr> {
        report_task::Model::create_with_marks(&self.db, report).await
    }
}
