use axum::{
    Router,
    extract::FromRef,
    middleware,
    response::Redirect,
    routing::{get, post},
};
use axum_extra::extract::cookie::Key;

use crate::auth::require_auth;
use crate::db::{
    AttendanceStorage, MarksStorage, SessionStorage, SqlitePool, StudentStorage, UserStorage,
};
use crate::handlers::{attendance, auth, dashboard, marks, students};

#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub ttl: chrono::Duration,
    pub secure_cookie: bool,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl: chrono::Duration::hours(8),
            secure_cookie: true,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub users: UserStorage,
    pub students: StudentStorage,
    pub marks: MarksStorage,
    pub attendance: AttendanceStorage,
    pub sessions: SessionStorage,
    pub session_settings: SessionSettings,
    cookie_key: Key,
}

impl AppState {
    pub fn new(pool: SqlitePool, cookie_key: Key, session_settings: SessionSettings) -> Self {
        Self {
            users: UserStorage::new(pool.clone()),
            students: StudentStorage::new(pool.clone()),
            marks: MarksStorage::new(pool.clone()),
            attendance: AttendanceStorage::new(pool.clone()),
            sessions: SessionStorage::new(pool),
            session_settings,
            cookie_key,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

pub fn portal_router(state: AppState) -> Router {
    let records = Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .route("/students", get(students::index).post(students::create))
        .route("/students/new", get(students::new_form))
        .route("/students/{id}/edit", get(students::edit_form))
        .route("/students/{id}", post(students::update))
        .route("/students/{id}/delete", post(students::delete))
        .route("/marks", get(marks::index))
        .route("/marks/summary", get(marks::summary))
        .route("/marks/{student_id}", get(marks::form).post(marks::submit))
        .route(
            "/attendance",
            get(attendance::roster).post(attendance::submit),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/", get(|| async { Redirect::to("/signin") }))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/signin", get(auth::signin_form).post(auth::signin))
        .route("/signout", post(auth::signout))
        .merge(records)
        .with_state(state)
}
