use crate::db::models::DbSession;
use crate::db::sqlite::SqlitePool;
use crate::error::PortalError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width UTC timestamps so that text comparison orders correctly.
fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[derive(Clone)]
pub struct SessionStorage {
    pool: SqlitePool,
}

impl SessionStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        token: &str,
        user_id: i64,
        user_email: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), PortalError> {
        sqlx::query(
            "INSERT INTO sessions (token, user_id, user_email, expires_at) VALUES (?, ?, ?, ?)",
        )
        .bind(token)
        .bind(user_id)
        .bind(user_email)
        .bind(stamp(expires_at))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Live session for `token`; expired rows are treated as absent.
    pub async fn find_live(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<DbSession>, PortalError> {
        let session = sqlx::query_as::<_, DbSession>(
            r#"SELECT token, user_id, user_email, expires_at
               FROM sessions WHERE token = ? AND expires_at > ?"#,
        )
        .bind(token)
        .bind(stamp(now))
        .fetch_optional(&self.pool)
        .await?;
        Ok(session)
    }

    pub async fn delete(&self, token: &str) -> Result<(), PortalError> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Remove every session expired at `now`. Returns the number removed.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> Result<u64, PortalError> {
        let done = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(stamp(now))
            .execute(&self.pool)
            .await?;
        Ok(done.rows_affected())
    }
}
