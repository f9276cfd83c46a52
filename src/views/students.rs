use axum::response::Html;

use super::{error_banner, escape, layout};
use crate::db::DbStudent;
use crate::domain::StudentForm;

pub fn index(students: &[DbStudent]) -> Html<String> {
    let rows: String = students
        .iter()
        .map(|s| {
            format!(
                r#"<tr><td>{reg_no}</td><td>{name}</td><td>{email}</td><td>{department}</td>
<td><a href="/students/{id}/edit">Edit</a>
<form method="post" action="/students/{id}/delete"><button type="submit">Delete</button></form></td></tr>
"#,
                id = s.id,
                reg_no = escape(&s.reg_no),
                name = escape(&s.name),
                email = escape(&s.email),
                department = escape(&s.department),
            )
        })
        .collect();

    let body = format!(
        r#"<p><a href="/students/new">Add student</a></p>
<table>
<thead><tr><th>Reg. no.</th><th>Name</th><th>Email</th><th>Department</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
    );
    layout("Students", true, &body)
}

/// Create form when `id` is `None`, edit form otherwise.
pub fn form(id: Option<i64>, values: &StudentForm, error: Option<&str>) -> Html<String> {
    let (title, action) = match id {
        Some(id) => ("Edit student", format!("/students/{id}")),
        None => ("New student", "/students".to_string()),
    };
    let body = format!(
        r#"{banner}
<form method="post" action="{action}">
  <label>Name <input name="name" value="{name}" required></label>
  <label>Email <input name="email" type="email" value="{email}" required></label>
  <label>Reg. no. <input name="reg_no" value="{reg_no}" required></label>
  <label>Department <input name="department" value="{department}" required></label>
  <button type="submit">Save</button>
</form>"#,
        banner = error_banner(error),
        name = escape(&values.name),
        email = escape(&values.email),
        reg_no = escape(&values.reg_no),
        department = escape(&values.department),
    );
    layout(title, true, &body)
}
