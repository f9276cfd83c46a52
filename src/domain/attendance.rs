//! Normalisation of a submitted attendance roster.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;
use tracing::warn;

/// Prefix of every roster field, followed by the student id.
pub const STUDENT_KEY_PREFIX: &str = "student_";

/// Attendance is always recorded against the server's current day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Only the literal `present` token counts as present.
    pub fn from_form_value(value: &str) -> Self {
        if value == "present" {
            AttendanceStatus::Present
        } else {
            AttendanceStatus::Absent
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, ThisError)]
#[error("unknown attendance status: {0}")]
pub struct UnknownStatus(pub String);

impl TryFrom<String> for AttendanceStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            _ => Err(UnknownStatus(value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceEntry {
    pub student_id: i64,
    pub status: AttendanceStatus,
}

/// Parsed roster. Malformed keys are skipped and counted, never fatal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceBatch {
    pub entries: Vec<AttendanceEntry>,
    pub skipped: usize,
}

impl AttendanceBatch {
    pub fn from_form(fields: &[(String, String)]) -> Self {
        let mut batch = AttendanceBatch::default();
        for (key, value) in fields {
            let Some(raw_id) = key.strip_prefix(STUDENT_KEY_PREFIX) else {
                continue;
            };
            match raw_id.parse::<i64>() {
                Ok(student_id) => batch.entries.push(AttendanceEntry {
                    student_id,
                    status: AttendanceStatus::from_form_value(value),
                }),
                Err(_) => {
                    warn!(key = %key, "skipping malformed attendance key");
                    batch.skipped += 1;
                }
            }
        }
        batch
    }
}
