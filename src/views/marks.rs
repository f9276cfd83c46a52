use axum::response::Html;

use super::{error_banner, escape, layout};
use crate::db::{DbAttendance, DbMarks, DbStudent, MarksSummaryRow};

fn student_links(students: &[DbStudent]) -> String {
    students
        .iter()
        .map(|s| {
            format!(
                r#"<li><a href="/marks/{id}">{name} ({reg_no})</a></li>
"#,
                id = s.id,
                name = escape(&s.name),
                reg_no = escape(&s.reg_no),
            )
        })
        .collect()
}

pub fn index(students: &[DbStudent]) -> Html<String> {
    let body = format!("<ul>\n{}</ul>", student_links(students));
    layout("Marksheet", true, &body)
}

pub fn form(
    students: &[DbStudent],
    student_id: i64,
    heading: &str,
    history: &[DbMarks],
    attendance: &[DbAttendance],
    error: Option<&str>,
) -> Html<String> {
    let fields: String = [
        ("tamil", "Tamil"),
        ("english", "English"),
        ("maths", "Maths"),
        ("science", "Science"),
        ("social_science", "Social science"),
    ]
    .iter()
    .map(|(name, label)| {
        format!(
            r#"  <label>{label} <input name="{name}" type="number" min="0"></label>
"#
        )
    })
    .collect();

    let body = format!(
        r#"{banner}
<h2>{heading}</h2>
<form method="post" action="/marks/{student_id}">
{fields}  <button type="submit">Save marks</button>
</form>
<h3>Previous marks</h3>
<table>
<thead><tr><th>Tamil</th><th>English</th><th>Maths</th><th>Science</th><th>Social science</th><th>Total</th><th>Grade</th><th>Result</th></tr></thead>
<tbody>
{previous}</tbody>
</table>
<h3>Attendance</h3>
<ul>
{days}</ul>
<h3>Other students</h3>
<ul>
{others}</ul>"#,
        banner = error_banner(error),
        heading = escape(heading),
        previous = history_rows(history),
        days = attendance_items(attendance),
        others = student_links(students),
    );
    layout("Enter marks", true, &body)
}

fn history_rows(history: &[DbMarks]) -> String {
    history
        .iter()
        .map(|m| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                m.tamil,
                m.english,
                m.maths,
                m.science,
                m.social_science,
                m.total,
                escape(&m.grade),
                if m.pass { "Pass" } else { "Fail" },
            )
        })
        .collect()
}

fn attendance_items(attendance: &[DbAttendance]) -> String {
    attendance
        .iter()
        .map(|a| format!("<li>{}: {}</li>\n", a.marked_at, a.status.as_str()))
        .collect()
}

pub fn summary(entries: &[MarksSummaryRow], error: Option<&str>) -> Html<String> {
    let rows: String = entries
        .iter()
        .map(|m| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                escape(&m.reg_no),
                escape(&m.name),
                m.tamil,
                m.english,
                m.maths,
                m.science,
                m.social_science,
                m.total,
                escape(&m.grade),
                if m.pass { "Pass" } else { "Fail" },
            )
        })
        .collect();

    let body = format!(
        r#"{banner}
<table>
<thead><tr><th>Reg. no.</th><th>Name</th><th>Tamil</th><th>English</th><th>Maths</th><th>Science</th><th>Social science</th><th>Total</th><th>Grade</th><th>Result</th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#,
        banner = error_banner(error),
    );
    layout("Marks summary", true, &body)
}
