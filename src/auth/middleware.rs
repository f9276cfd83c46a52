use axum::RequestExt;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::{Key, PrivateCookieJar};
use chrono::Utc;
use tracing::debug;

use crate::auth::session::session_token;
use crate::router::AppState;

/// The signed-in staff member behind the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
    pub email: String,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // already resolved by `require_auth`
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }

        let jar = match PrivateCookieJar::<Key>::from_request_parts(parts, state).await {
            Ok(jar) => jar,
            Err(never) => match never {},
        };
        let Some(token) = session_token(&jar) else {
            return Err(Redirect::to("/signin").into_response());
        };

        match state.sessions.find_live(&token, Utc::now()).await {
            Ok(Some(session)) => Ok(CurrentUser {
                user_id: session.user_id,
                email: session.user_email,
            }),
            Ok(None) => {
                debug!("session cookie has no live session");
                Err(Redirect::to("/signin").into_response())
            }
            Err(e) => Err(e.into_response()),
        }
    }
}

/// Gate for every record-management route: resolve the session or send the
/// browser to `/signin`.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    match req.extract_parts_with_state::<CurrentUser, _>(&state).await {
        Ok(user) => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        Err(rejection) => rejection,
    }
}
