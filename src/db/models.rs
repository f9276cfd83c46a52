use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::domain::attendance::AttendanceStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbUser {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbStudent {
    pub id: i64,
    pub reg_no: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbMarks {
    pub id: i64,
    pub student_id: i64,
    pub tamil: i64,
    pub english: i64,
    pub maths: i64,
    pub science: i64,
    pub social_science: i64,
    pub total: i64,
    pub grade: String,
    pub pass: bool,
    pub created_at: NaiveDateTime,
}

/// One line of the marks summary: a marks row joined with its student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct MarksSummaryRow {
    pub id: i64,
    pub reg_no: String,
    pub name: String,
    pub tamil: i64,
    pub english: i64,
    pub maths: i64,
    pub science: i64,
    pub social_science: i64,
    pub total: i64,
    pub grade: String,
    pub pass: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbAttendance {
    pub id: i64,
    pub student_id: i64,
    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,
    pub marked_at: NaiveDate,
}

/// Same-day aggregate shown after an attendance submission.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceTotals {
    pub total: i64,
    pub present: i64,
    pub absent: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbSession {
    pub token: String,
    pub user_id: i64,
    pub user_email: String,
    pub expires_at: String,
}
