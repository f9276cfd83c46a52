use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::PrivateCookieJar;
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::auth::session::{clear_session_cookie, new_token, session_token, store_session_cookie};
use crate::db::WriteOutcome;
use crate::domain::{FormError, SigninForm, SignupForm};
use crate::error::PortalError;
use crate::router::AppState;
use crate::views;

/// GET /signup
pub async fn signup_form() -> Html<String> {
    views::auth::signup(None)
}

/// POST /signup -> creates the staff account, then sends the browser to /signin.
pub async fn signup(
    State(state): State<AppState>,
    Form(form): Form<SignupForm>,
) -> Result<Response, PortalError> {
    let account = match form.validate() {
        Ok(account) => account,
        Err(err) => return Ok(signup_error(err)),
    };

    if state.users.find_by_email(&account.email).await?.is_some() {
        return Ok(signup_error(FormError::EmailTaken));
    }

    let password_hash = hash_password_blocking(account.password).await?;
    match state.users.create(&account.email, &password_hash).await? {
        WriteOutcome::Written(user_id) => {
            info!(user_id, "staff account created");
            Ok(Redirect::to("/signin").into_response())
        }
        // lost a race with a concurrent signup for the same email
        WriteOutcome::Conflict(_) => Ok(signup_error(FormError::EmailTaken)),
    }
}

/// GET /signin
pub async fn signin_form() -> Html<String> {
    views::auth::signin(None)
}

/// POST /signin -> binds a fresh session to the user and redirects to /dashboard.
pub async fn signin(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
    Form(form): Form<SigninForm>,
) -> Result<Response, PortalError> {
    let (email, password) = match form.validate() {
        Ok(creds) => creds,
        Err(err) => return Ok(signin_error(err)),
    };

    let user = state.users.find_by_email(&email).await?;
    let stored = user.as_ref().map(|u| u.password_hash.clone());
    let verified = verify_password_blocking(password.to_string(), stored).await?;
    let Some(user) = user.filter(|_| verified) else {
        return Ok(signin_error(FormError::InvalidCredentials));
    };

    let now = Utc::now();
    if let Err(e) = state.sessions.purge_expired(now).await {
        warn!(error = %e, "failed to purge expired sessions");
    }

    let settings = &state.session_settings;
    let token = new_token();
    state
        .sessions
        .create(&token, user.id, &user.email, now + settings.ttl)
        .await?;
    let jar = store_session_cookie(jar, token, settings.ttl, settings.secure_cookie);

    info!(user_id = user.id, "staff signed in");
    Ok((jar, Redirect::to("/dashboard")).into_response())
}

/// POST /signout -> drops the stored session and the cookie.
pub async fn signout(
    State(state): State<AppState>,
    jar: PrivateCookieJar,
) -> Result<Response, PortalError> {
    if let Some(token) = session_token(&jar) {
        state.sessions.delete(&token).await?;
    }
    let jar = clear_session_cookie(jar);
    Ok((jar, Redirect::to("/signin")).into_response())
}

fn signup_error(err: FormError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        views::auth::signup(Some(&err.to_string())),
    )
        .into_response()
}

fn signin_error(err: FormError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        views::auth::signin(Some(&err.to_string())),
    )
        .into_response()
}
