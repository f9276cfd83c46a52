use axum::response::Html;
use std::collections::HashMap;

use super::{escape, layout};
use crate::db::{AttendanceTotals, DbStudent};
use crate::domain::AttendanceStatus;
use crate::domain::attendance::STUDENT_KEY_PREFIX;

pub fn roster(
    students: &[DbStudent],
    statuses: &HashMap<i64, AttendanceStatus>,
    totals: Option<&AttendanceTotals>,
) -> Html<String> {
    let rows: String = students
        .iter()
        .map(|s| {
            let present = statuses.get(&s.id) == Some(&AttendanceStatus::Present);
            let absent = statuses.get(&s.id) == Some(&AttendanceStatus::Absent);
            let checked = |on: bool| if on { " checked" } else { "" };
            format!(
                r#"<tr><td>{name}</td>
<td><label><input type="radio" name="{prefix}{id}" value="present"{p}> Present</label>
<label><input type="radio" name="{prefix}{id}" value="absent"{a}> Absent</label></td></tr>
"#,
                name = escape(&s.name),
                prefix = STUDENT_KEY_PREFIX,
                id = s.id,
                p = checked(present),
                a = checked(absent),
            )
        })
        .collect();

    let summary = totals
        .map(|t| {
            format!(
                r#"<p class="totals">Total: {} | Present: {} | Absent: {}</p>"#,
                t.total, t.present, t.absent
            )
        })
        .unwrap_or_default();

    let body = format!(
        r#"{summary}
<form method="post" action="/attendance">
<table>
<tbody>
{rows}</tbody>
</table>
<button type="submit">Save attendance</button>
</form>"#
    );
    layout("Attendance", true, &body)
}
