pub mod auth;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod router;
pub mod views;

pub use error::PortalError;
pub use router::{AppState, SessionSettings, portal_router};
