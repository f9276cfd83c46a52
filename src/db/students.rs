use crate::db::models::DbStudent;
use crate::db::sqlite::{ConflictField, SqlitePool, WriteOutcome, is_unique_violation};
use crate::domain::NewStudent;
use crate::error::PortalError;

const STUDENT_COLUMNS: &str = "id, reg_no, name, email, department, created_at";

#[derive(Clone)]
pub struct StudentStorage {
    pool: SqlitePool,
}

impl StudentStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a student. A duplicate `reg_no` yields `Conflict(RegNo)` and writes nothing.
    pub async fn create(&self, student: &NewStudent) -> Result<WriteOutcome<i64>, PortalError> {
        let res = sqlx::query(
            "INSERT INTO students (name, email, reg_no, department) VALUES (?, ?, ?, ?)",
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.reg_no)
        .bind(&student.department)
        .execute(&self.pool)
        .await;
        match res {
            Ok(done) => Ok(WriteOutcome::Written(done.last_insert_rowid())),
            Err(e) if is_unique_violation(&e) => Ok(WriteOutcome::Conflict(ConflictField::RegNo)),
            Err(e) => Err(e.into()),
        }
    }

    /// Update by id. `Written(false)` means no such student.
    pub async fn update(
        &self,
        id: i64,
        student: &NewStudent,
    ) -> Result<WriteOutcome<bool>, PortalError> {
        let res = sqlx::query(
            "UPDATE students SET name = ?, email = ?, reg_no = ?, department = ? WHERE id = ?",
        )
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.reg_no)
        .bind(&student.department)
        .bind(id)
        .execute(&self.pool)
        .await;
        match res {
            Ok(done) => Ok(WriteOutcome::Written(done.rows_affected() > 0)),
            Err(e) if is_unique_violation(&e) => Ok(WriteOutcome::Conflict(ConflictField::RegNo)),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete by id; marks and attendance go with it. Returns whether a row existed.
    pub async fn delete(&self, id: i64) -> Result<bool, PortalError> {
        let done = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected() > 0)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbStudent>, PortalError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students WHERE id = ?");
        let student = sqlx::query_as::<_, DbStudent>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    pub async fn list_by_id(&self) -> Result<Vec<DbStudent>, PortalError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY id ASC");
        let rows = sqlx::query_as::<_, DbStudent>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_by_name(&self) -> Result<Vec<DbStudent>, PortalError> {
        let sql = format!("SELECT {STUDENT_COLUMNS} FROM students ORDER BY name ASC, id ASC");
        let rows = sqlx::query_as::<_, DbStudent>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, PortalError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
