use crate::db::models::DbUser;
use crate::db::sqlite::{ConflictField, SqlitePool, WriteOutcome, is_unique_violation};
use crate::error::PortalError;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user; a taken email is a conflict, not an error.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
    ) -> Result<WriteOutcome<i64>, PortalError> {
        let res = sqlx::query("INSERT INTO users (email, password_hash) VALUES (?, ?)")
            .bind(email)
            .bind(password_hash)
            .execute(&self.pool)
            .await;
        match res {
            Ok(done) => Ok(WriteOutcome::Written(done.last_insert_rowid())),
            Err(e) if is_unique_violation(&e) => Ok(WriteOutcome::Conflict(ConflictField::Email)),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<DbUser>, PortalError> {
        let user = sqlx::query_as::<_, DbUser>(
            "SELECT id, email, password_hash, created_at FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn count(&self) -> Result<i64, PortalError> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(n)
    }
}
