use crate::db::models::{DbMarks, MarksSummaryRow};
use crate::db::sqlite::{SqlitePool, is_foreign_key_violation};
use crate::domain::Marksheet;
use crate::error::PortalError;

#[derive(Clone)]
pub struct MarksStorage {
    pool: SqlitePool,
}

impl MarksStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append one marks row. Earlier rows for the student are kept.
    /// Returns `None` when the student does not exist.
    pub async fn append(
        &self,
        student_id: i64,
        sheet: &Marksheet,
    ) -> Result<Option<i64>, PortalError> {
        let s = sheet.scores;
        let res = sqlx::query(
            r#"
            INSERT INTO marks (
                student_id, tamil, english, maths, science, social_science,
                total, grade, pass
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(student_id)
        .bind(i64::from(s.tamil))
        .bind(i64::from(s.english))
        .bind(i64::from(s.maths))
        .bind(i64::from(s.science))
        .bind(i64::from(s.social_science))
        .bind(sheet.total)
        .bind(sheet.grade.as_str())
        .bind(sheet.pass)
        .execute(&self.pool)
        .await;
        match res {
            Ok(done) => Ok(Some(done.last_insert_rowid())),
            Err(e) if is_foreign_key_violation(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list_for_student(&self, student_id: i64) -> Result<Vec<DbMarks>, PortalError> {
        let rows = sqlx::query_as::<_, DbMarks>(
            r#"SELECT id, student_id, tamil, english, maths, science, social_science,
               total, grade, pass, created_at
               FROM marks WHERE student_id = ? ORDER BY id"#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Every marks row with its student, newest first.
    pub async fn summary(&self) -> Result<Vec<MarksSummaryRow>, PortalError> {
        let rows = sqlx::query_as::<_, MarksSummaryRow>(
            r#"SELECT m.id, s.reg_no, s.name,
               m.tamil, m.english, m.maths, m.science, m.social_science,
               m.total, m.grade, m.pass
               FROM marks m
               JOIN students s ON s.id = m.student_id
               ORDER BY m.id DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
