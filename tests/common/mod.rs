#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, StatusCode, header},
};
use axum_extra::extract::cookie::Key;
use std::{
    fs,
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

use sms_portal::db::{self, SqlitePool};
use sms_portal::{AppState, SessionSettings, portal_router};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
    pub pool: SqlitePool,
    path: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

pub async fn spawn_app() -> TestApp {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "sms-portal-test-{}-{}-{}.sqlite",
        std::process::id(),
        nanos,
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    let database_url = format!("sqlite://{}", path.display());
    let pool = db::connect(&database_url, 5)
        .await
        .expect("failed to open test database");
    db::init_schema(&pool).await.expect("schema init failed");

    let settings = SessionSettings {
        secure_cookie: false,
        ..SessionSettings::default()
    };
    let state = AppState::new(pool.clone(), Key::generate(), settings);
    let app = portal_router(state.clone());

    TestApp {
        app,
        state,
        pool,
        path,
    }
}

/// Percent-encode a form body.
pub fn form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

impl TestApp {
    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder().method("GET").uri(uri);
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.app
            .clone()
            .oneshot(req.body(Body::empty()).expect("failed to build request"))
            .await
            .expect("request failed")
    }

    pub async fn post(&self, uri: &str, body: String, cookie: Option<&str>) -> Response<Body> {
        let mut req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(c) = cookie {
            req = req.header(header::COOKIE, c);
        }
        self.app
            .clone()
            .oneshot(req.body(Body::from(body)).expect("failed to build request"))
            .await
            .expect("request failed")
    }

    /// Create a staff account, sign in, and return the session cookie pair.
    pub async fn signed_in(&self) -> String {
        let resp = self
            .post(
                "/signup",
                form(&[
                    ("name", "Staff"),
                    ("email", "staff@school.edu"),
                    ("password", "correct horse"),
                    ("confirm_password", "correct horse"),
                ]),
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let resp = self
            .post(
                "/signin",
                form(&[("email", "staff@school.edu"), ("password", "correct horse")]),
                None,
            )
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&resp), "/dashboard");
        session_cookie(&resp).expect("signin did not set a session cookie")
    }

    pub async fn create_student(&self, cookie: &str, reg_no: &str, name: &str) -> i64 {
        let resp = self
            .post(
                "/students",
                form(&[
                    ("name", name),
                    ("email", format!("{}@school.edu", reg_no.to_lowercase()).as_str()),
                    ("reg_no", reg_no),
                    ("department", "Science"),
                ]),
                Some(cookie),
            )
            .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        let (id,): (i64,) = sqlx::query_as("SELECT id FROM students WHERE reg_no = ?")
            .bind(reg_no)
            .fetch_one(&self.pool)
            .await
            .expect("student row missing");
        id
    }
}

pub fn location(resp: &Response<Body>) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// `name=value` of the session cookie set by the response, if any.
pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("sms_session="))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
