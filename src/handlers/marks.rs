use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::{error, info};

use crate::domain::{MarksForm, Marksheet, SubjectScores};
use crate::error::PortalError;
use crate::router::AppState;
use crate::views;

const MARKS: &str = "/marks";

/// GET /marks -> pick a student.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let students = state.students.list_by_name().await?;
    Ok(views::marks::index(&students))
}

/// GET /marks/summary -> every marks submission, newest first.
pub async fn summary(State(state): State<AppState>) -> Response {
    match state.marks.summary().await {
        Ok(entries) => {
            info!(count = entries.len(), "marks summary loaded");
            views::marks::summary(&entries, None).into_response()
        }
        Err(e) => {
            error!(error = %e, "failed to load marks summary");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                views::marks::summary(&[], Some("Failed to load marks summary")),
            )
                .into_response()
        }
    }
}

/// GET /marks/{student_id}
pub async fn form(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<Response, PortalError> {
    let Ok(student_id) = student_id.parse::<i64>() else {
        return Ok(Redirect::to(MARKS).into_response());
    };
    let Some(student) = state.students.get_by_id(student_id).await? else {
        return Ok(Redirect::to(MARKS).into_response());
    };
    let students = state.students.list_by_name().await?;
    let history = state.marks.list_for_student(student_id).await?;
    let attendance = state.attendance.list_for_student(student_id).await?;
    let heading = format!("{} ({})", student.name, student.reg_no);
    Ok(views::marks::form(
        &students,
        student_id,
        &heading,
        &history,
        &attendance,
        None,
    )
    .into_response())
}

/// POST /marks/{student_id} -> appends one derived marks row.
pub async fn submit(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Form(form): Form<MarksForm>,
) -> Response {
    let Ok(student_id) = student_id.parse::<i64>() else {
        return Redirect::to(MARKS).into_response();
    };

    let sheet = Marksheet::derive(SubjectScores::from_form(&form));
    match state.marks.append(student_id, &sheet).await {
        Ok(Some(marks_id)) => {
            info!(
                student_id,
                marks_id,
                total = sheet.total,
                grade = %sheet.grade,
                pass = sheet.pass,
                "marks recorded"
            );
            Redirect::to("/marks/summary").into_response()
        }
        Ok(None) => Redirect::to(MARKS).into_response(),
        Err(e) => {
            error!(student_id, error = %e, "failed to insert marks");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                views::marks::form(
                    &[],
                    student_id,
                    "Unknown",
                    &[],
                    &[],
                    Some("Failed to save marks. Please try again."),
                ),
            )
                .into_response()
        }
    }
}
