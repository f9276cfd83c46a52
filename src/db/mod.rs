//! Database module: models, schema and per-table storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite-first)
//! - `sqlite.rs`: pool bootstrap and constraint classification
//! - one storage type per table family

pub mod attendance;
pub mod marks;
pub mod models;
pub mod schema;
pub mod sessions;
pub mod sqlite;
pub mod students;
pub mod users;

pub use attendance::AttendanceStorage;
pub use marks::MarksStorage;
pub use models::{
    AttendanceTotals, DbAttendance, DbMarks, DbSession, DbStudent, DbUser, MarksSummaryRow,
};
pub use schema::SQLITE_INIT;
pub use sessions::SessionStorage;
pub use sqlite::{ConflictField, SqlitePool, WriteOutcome, connect, init_schema};
pub use students::StudentStorage;
pub use users::UserStorage;
