use crate::db::models::{AttendanceTotals, DbAttendance};
use crate::db::sqlite::SqlitePool;
use crate::domain::{AttendanceEntry, AttendanceStatus};
use crate::error::PortalError;
use chrono::NaiveDate;
use sqlx::Row;
use std::collections::HashMap;

#[derive(Clone)]
pub struct AttendanceStorage {
    pool: SqlitePool,
}

impl AttendanceStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Upsert one status per student for `day` in a single transaction.
    /// Ids that match no student are skipped. Returns how many entries were recorded.
    pub async fn record_day(
        &self,
        day: NaiveDate,
        entries: &[AttendanceEntry],
    ) -> Result<usize, PortalError> {
        let mut tx = self.pool.begin().await?;
        let mut recorded = 0;

        for entry in entries {
            let done = sqlx::query(
                r#"
                INSERT INTO attendance (student_id, status, marked_at)
                SELECT ?, ?, ? WHERE EXISTS (SELECT 1 FROM students WHERE id = ?)
                ON CONFLICT(student_id, marked_at) DO UPDATE SET status = excluded.status
                "#,
            )
            .bind(entry.student_id)
            .bind(entry.status.as_str())
            .bind(day)
            .bind(entry.student_id)
            .execute(&mut *tx)
            .await?;
            if done.rows_affected() > 0 {
                recorded += 1;
            }
        }

        tx.commit().await?;
        Ok(recorded)
    }

    /// Student count plus present/absent counts for `day`.
    pub async fn totals_on(&self, day: NaiveDate) -> Result<AttendanceTotals, PortalError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM students) AS total,
                (SELECT COUNT(*) FROM attendance WHERE marked_at = ? AND status = 'present') AS present,
                (SELECT COUNT(*) FROM attendance WHERE marked_at = ? AND status = 'absent') AS absent
            "#,
        )
        .bind(day)
        .bind(day)
        .fetch_one(&self.pool)
        .await?;

        Ok(AttendanceTotals {
            total: row.try_get("total")?,
            present: row.try_get("present")?,
            absent: row.try_get("absent")?,
        })
    }

    /// Statuses already recorded on `day`, keyed by student id.
    pub async fn statuses_on(
        &self,
        day: NaiveDate,
    ) -> Result<HashMap<i64, AttendanceStatus>, PortalError> {
        let rows = self.list_on(day).await?;
        Ok(rows.into_iter().map(|r| (r.student_id, r.status)).collect())
    }

    pub async fn list_on(&self, day: NaiveDate) -> Result<Vec<DbAttendance>, PortalError> {
        let rows = sqlx::query_as::<_, DbAttendance>(
            "SELECT id, student_id, status, marked_at FROM attendance WHERE marked_at = ? ORDER BY student_id",
        )
        .bind(day)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<DbAttendance>, PortalError> {
        let rows = sqlx::query_as::<_, DbAttendance>(
            "SELECT id, student_id, status, marked_at FROM attendance WHERE student_id = ? ORDER BY marked_at",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
