//! Batch term-report generation.
//!
//! A run picks up the oldest students (bounded by `student_limit`), computes a
//! [`ReportSummary`] for each and persists one report per student. Students are
//! processed in chunks: reports inside a chunk are created concurrently, chunks
//! run one after another with a throttle pause in between. A failure aborts the
//! run once its chunk has settled: every other student of that chunk is still
//! written, earlier chunks stay in place, and all of them carry the run id.

use std::time::Duration;

use futures::future::join_all;
use sea_orm::DbErr;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use db::models::report_task::{self, NewReportTask};
use util::config;

use crate::report_store::{Capability, CapabilityCheck, ReportStore, StudentRecord};
use crate::report_summary::ReportSummary;

/// Tunables for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportBatchConfig {
    /// Maximum number of students included in one run.
    pub student_limit: u64,
    /// Reports created concurrently per chunk. Zero is treated as one.
    pub chunk_size: usize,
    /// Pause after each chunk except the last.
    pub throttle: Duration,
}

impl Default for ReportBatchConfig {
    fn default() -> Self {
        Self {
            student_limit: 120,
            chunk_size: 20,
            throttle: Duration::from_millis(500),
        }
    }
}

impl ReportBatchConfig {
    /// Reads the batch settings from the global application config.
    pub fn from_app_config() -> Self {
        Self {
            student_limit: config::report_student_limit(),
            chunk_size: config::report_chunk_size(),
            throttle: Duration::from_millis(config::report_throttle_ms()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("No students found")]
    NoStudents,

    #[error("Failed to serialize report summary: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("{0}")]
    Persistence(#[from] DbErr),
}

/// A persisted report together with the summary stored in its metadata.
#[derive(Debug, Clone)]
pub struct GeneratedReport {
    pub report: report_task::Model,
    pub summary: ReportSummary,
}

#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// Identifier stamped on every report of this run.
    pub run_id: String,
    /// Reports in chunk order; inside a chunk, in student order.
    pub reports: Vec<GeneratedReport>,
    /// Number of reports created per chunk.
    pub chunk_sizes: Vec<usize>,
}

impl GenerationOutcome {
    pub fn count(&self) -> usize {
        self.reports.len()
    }

    pub fn first_report(&self) -> Option<&GeneratedReport> {
        self.reports.first()
    }
}

pub struct ReportGenerator<S> {
    store: S,
    config: ReportBatchConfig,
}

impl<S> ReportGenerator<S>
where
    S: ReportStore + CapabilityCheck,
{
    pub fn new(store: S, config: ReportBatchConfig) -> Self {
        Self { store, config }
    }

    /// Generates one term report per eligible student on behalf of `caller_id`.
    ///
    /// # Errors
    /// - [`ReportError::Unauthorized`] if the caller lacks `REPORT_ADMIN`; nothing is read or written.
    /// - [`ReportError::NoStudents`] if there is no student to report on.
    /// - [`ReportError::Persistence`] on the first datastore failure, in student
    ///   order. The failing chunk is allowed to finish, so the other students of
    ///   that chunk and all earlier chunks keep their reports; later chunks never start.
    pub async fn generate(&self, caller_id: i64) -> Result<GenerationOutcome, ReportError> {
        if !self
            .store
            .has_capability(caller_id, Capability::ReportAdmin)
            .await?
        {
            warn!(caller_id, "Report generation refused: caller lacks REPORT_ADMIN");
            return Err(ReportError::Unauthorized);
        }

        let students = self
            .store
            .eligible_students(self.config.student_limit)
            .await?;
        if students.is_empty() {
            return Err(ReportError::NoStudents);
        }

        let run_id = Uuid::new_v4().to_string();
        let chunk_size = self.config.chunk_size.max(1);
        let total_chunks = students.len().div_ceil(chunk_size);

        info!(
            caller_id,
            %run_id,
            students = students.len(),
            chunk_size,
            total_chunks,
            "Generating term reports"
        );

        let mut reports = Vec::with_capacity(students.len());
        let mut chunk_sizes = Vec::with_capacity(total_chunks);

        for (index, chunk) in students.chunks(chunk_size).enumerate() {
            // Every student of the chunk runs to completion, even after a sibling failed.
            let results = join_all(
                chunk
                    .iter()
                    .map(|student| self.generate_for_student(caller_id, student, &run_id)),
            )
            .await;

            let mut first_error = None;
            let mut created = 0;
            for result in results {
                match result {
                    Ok(report) => {
                        reports.push(report);
                        created += 1;
                    }
                    Err(e) => {
                        first_error.get_or_insert(e);
                    }
                }
            }

            if let Some(e) = first_error {
                error!(
                    %run_id,
                    chunk = index + 1,
                    persisted = reports.len(),
                    error = %e,
                    "Report generation aborted"
                );
                return Err(e);
            }

            debug!(%run_id, chunk = index + 1, total_chunks, created, "Report chunk persisted");
            chunk_sizes.push(created);

            if index + 1 < total_chunks && !self.config.throttle.is_zero() {
                tokio::time::sleep(self.config.throttle).await;
            }
        }

        info!(%run_id, count = reports.len(), "Term reports generated");

        Ok(GenerationOutcome {
            run_id,
            reports,
            chunk_sizes,
        })
    }

    async fn generate_for_student(
        &self,
        caller_id: i64,
        student: &StudentRecord,
        run_id: &str,
    ) -> Result<GeneratedReport, ReportError> {
        let summary = ReportSummary::from_marks(&student.marks);

        let report = self
            .store
            .create_report(NewReportTask {
                title: format!("Term Report - {}", student.name),
                description: Some(format!(
                    "Comprehensive performance report for {}",
                    student.name
                )),
                created_by: caller_id,
                metadata: serde_json::to_value(&summary)?,
                mark_ids: student.marks.iter().map(|m| m.id).collect(),
                generation_run: Some(run_id.to_owned()),
            })
            .await?;

        Ok(GeneratedReport { report, summary })
    }
}
