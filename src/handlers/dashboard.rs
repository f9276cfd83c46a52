use axum::{extract::State, response::Html};

use crate::auth::CurrentUser;
use crate::domain::attendance::today;
use crate::error::PortalError;
use crate::router::AppState;
use crate::views;

/// GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Html<String>, PortalError> {
    let staff = state.users.count().await?;
    let students = state.students.count().await?;
    let totals = state.attendance.totals_on(today()).await?;
    Ok(views::dashboard::dashboard(&user.email, staff, students, &totals))
}
