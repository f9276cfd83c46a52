//! Staff authentication: argon2 password hashes, database-backed sessions
//! carried in an encrypted cookie, and the gate in front of record routes.

pub mod middleware;
pub mod password;
pub mod session;

pub use middleware::{CurrentUser, require_auth};
