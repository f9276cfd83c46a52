use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use tracing::info;

use crate::db::WriteOutcome;
use crate::domain::{FormError, StudentForm};
use crate::error::PortalError;
use crate::router::AppState;
use crate::views;

const STUDENTS: &str = "/students";

/// GET /students
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PortalError> {
    let students = state.students.list_by_id().await?;
    Ok(views::students::index(&students))
}

/// GET /students/new
pub async fn new_form() -> Html<String> {
    views::students::form(None, &StudentForm::default(), None)
}

/// POST /students
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<StudentForm>,
) -> Result<Response, PortalError> {
    let student = match form.validate() {
        Ok(student) => student,
        Err(err) => return Ok(form_error(None, &form, err)),
    };

    match state.students.create(&student).await? {
        WriteOutcome::Written(id) => {
            info!(student_id = id, reg_no = %student.reg_no, "student created");
            Ok(Redirect::to(STUDENTS).into_response())
        }
        WriteOutcome::Conflict(_) => Ok(form_error(None, &form, FormError::RegNoTaken)),
    }
}

/// GET /students/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PortalError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Redirect::to(STUDENTS).into_response());
    };
    let Some(student) = state.students.get_by_id(id).await? else {
        return Ok(Redirect::to(STUDENTS).into_response());
    };

    let values = StudentForm {
        name: student.name,
        email: student.email,
        reg_no: student.reg_no,
        department: student.department,
    };
    Ok(views::students::form(Some(id), &values, None).into_response())
}

/// POST /students/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<StudentForm>,
) -> Result<Response, PortalError> {
    let Ok(id) = id.parse::<i64>() else {
        return Ok(Redirect::to(STUDENTS).into_response());
    };
    let student = match form.validate() {
        Ok(student) => student,
        Err(err) => return Ok(form_error(Some(id), &form, err)),
    };

    match state.students.update(id, &student).await? {
        WriteOutcome::Written(true) => {
            info!(student_id = id, "student updated");
            Ok(Redirect::to(STUDENTS).into_response())
        }
        WriteOutcome::Written(false) => Ok(Redirect::to(STUDENTS).into_response()),
        WriteOutcome::Conflict(_) => Ok(form_error(Some(id), &form, FormError::RegNoTaken)),
    }
}

/// POST /students/{id}/delete
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, PortalError> {
    if let Ok(id) = id.parse::<i64>()
        && state.students.delete(id).await?
    {
        info!(student_id = id, "student deleted with marks and attendance");
    }
    Ok(Redirect::to(STUDENTS).into_response())
}

fn form_error(id: Option<i64>, form: &StudentForm, err: FormError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        views::students::form(id, form, Some(&err.to_string())),
    )
        .into_response()
}
