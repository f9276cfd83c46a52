mod common;

use axum::http::StatusCode;
use common::{body_text, form, location, session_cookie, spawn_app};

#[tokio::test]
async fn record_routes_redirect_to_signin_without_session() {
    let t = spawn_app().await;
    for uri in [
        "/dashboard",
        "/students",
        "/students/new",
        "/marks",
        "/marks/summary",
        "/marks/1",
        "/attendance",
    ] {
        let resp = t.get(uri, None).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER, "{uri}");
        assert_eq!(location(&resp), "/signin", "{uri}");
    }

    let resp = t
        .post("/students", form(&[("name", "x")]), Some("sms_session=forged"))
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");
    assert_eq!(t.state.students.count().await.unwrap(), 0);
}

#[tokio::test]
async fn root_redirects_to_signin() {
    let t = spawn_app().await;
    let resp = t.get("/", None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");
}

#[tokio::test]
async fn signup_with_mismatched_passwords_persists_nothing() {
    let t = spawn_app().await;
    let resp = t
        .post(
            "/signup",
            form(&[
                ("name", "Staff"),
                ("email", "staff@school.edu"),
                ("password", "one"),
                ("confirm_password", "two"),
            ]),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Passwords do not match"));
    assert_eq!(t.state.users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn signup_with_missing_field_is_rejected() {
    let t = spawn_app().await;
    let resp = t
        .post(
            "/signup",
            form(&[("email", "staff@school.edu"), ("password", "pw")]),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("All fields are required"));
    assert_eq!(t.state.users.count().await.unwrap(), 0);
}

#[tokio::test]
async fn signup_rejects_email_registered_in_another_case() {
    let t = spawn_app().await;
    t.signed_in().await;

    let resp = t
        .post(
            "/signup",
            form(&[
                ("name", "Other"),
                ("email", "  STAFF@School.edu "),
                ("password", "pw"),
                ("confirm_password", "pw"),
            ]),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_text(resp).await.contains("Email already registered"));
    assert_eq!(t.state.users.count().await.unwrap(), 1);

    // the original account is untouched and still signs in
    let resp = t
        .post(
            "/signin",
            form(&[("email", "staff@school.edu"), ("password", "correct horse")]),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/dashboard");
}

#[tokio::test]
async fn stored_password_is_hashed() {
    let t = spawn_app().await;
    t.signed_in().await;
    let user = t
        .state
        .users
        .find_by_email("staff@school.edu")
        .await
        .unwrap()
        .expect("user exists");
    assert_ne!(user.password_hash, "correct horse");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_the_same() {
    let t = spawn_app().await;
    t.signed_in().await;

    let wrong_password = t
        .post(
            "/signin",
            form(&[("email", "staff@school.edu"), ("password", "nope")]),
            None,
        )
        .await;
    let unknown_email = t
        .post(
            "/signin",
            form(&[("email", "ghost@school.edu"), ("password", "nope")]),
            None,
        )
        .await;

    assert_eq!(wrong_password.status(), StatusCode::BAD_REQUEST);
    assert_eq!(unknown_email.status(), StatusCode::BAD_REQUEST);
    assert!(session_cookie(&wrong_password).is_none());
    assert!(session_cookie(&unknown_email).is_none());

    let a = body_text(wrong_password).await;
    let b = body_text(unknown_email).await;
    assert!(a.contains("Invalid credentials"));
    assert_eq!(a, b);
}

#[tokio::test]
async fn signin_email_is_case_insensitive() {
    let t = spawn_app().await;
    t.signed_in().await;
    let resp = t
        .post(
            "/signin",
            form(&[("email", "Staff@SCHOOL.edu"), ("password", "correct horse")]),
            None,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert!(session_cookie(&resp).is_some());
}

#[tokio::test]
async fn session_grants_access_until_signout() {
    let t = spawn_app().await;
    let cookie = t.signed_in().await;

    let resp = t.get("/dashboard", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("staff@school.edu"));

    let resp = t.post("/signout", String::new(), Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");

    // the old cookie no longer maps to a stored session
    let resp = t.get("/dashboard", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");
}

#[tokio::test]
async fn signout_without_session_still_redirects() {
    let t = spawn_app().await;
    let resp = t.post("/signout", String::new(), None).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");
}

#[tokio::test]
async fn expired_session_is_refused() {
    let t = spawn_app().await;
    let cookie = t.signed_in().await;

    sqlx::query("UPDATE sessions SET expires_at = '2000-01-01T00:00:00Z'")
        .execute(&t.pool)
        .await
        .unwrap();

    let resp = t.get("/dashboard", Some(&cookie)).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/signin");
}
