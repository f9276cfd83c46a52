use axum::{Form, extract::State, response::Html};
use tracing::info;

use crate::domain::AttendanceBatch;
use crate::domain::attendance::today;
use crate::error::PortalError;
use crate::router::AppState;
use crate::views;

/// GET /attendance -> today's roster with any statuses already recorded.
pub async fn roster(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let day = today();
    let students = state.students.list_by_name().await?;
    let statuses = state.attendance.statuses_on(day).await?;
    Ok(views::attendance::roster(&students, &statuses, None))
}

/// POST /attendance -> upserts today's statuses and shows the day's totals.
pub async fn submit(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, PortalError> {
    let day = today();
    let batch = AttendanceBatch::from_form(&fields);
    let recorded = state.attendance.record_day(day, &batch.entries).await?;
    info!(
        %day,
        submitted = batch.entries.len(),
        recorded,
        skipped = batch.skipped,
        "attendance recorded"
    );

    let students = state.students.list_by_name().await?;
    let statuses = state.attendance.statuses_on(day).await?;
    let totals = state.attendance.totals_on(day).await?;
    Ok(views::attendance::roster(&students, &statuses, Some(&totals)))
}
