use axum::response::Html;

use super::{escape, layout};
use crate::db::AttendanceTotals;

pub fn dashboard(
    email: &str,
    staff: i64,
    students: i64,
    totals: &AttendanceTotals,
) -> Html<String> {
    let body = format!(
        r#"<p>Signed in as <strong>{email}</strong></p>
<ul>
  <li>Staff accounts: {staff}</li>
  <li>Students: {students}</li>
  <li>Present today: {present}</li>
  <li>Absent today: {absent}</li>
</ul>"#,
        email = escape(email),
        present = totals.present,
        absent = totals.absent,
    );
    layout("Dashboard", true, &body)
}
