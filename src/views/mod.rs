//! Server-rendered pages. Every value interpolated into markup goes through
//! [`escape`].

pub mod attendance;
pub mod auth;
pub mod dashboard;
pub mod marks;
pub mod students;

use axum::response::Html;

pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn error_banner(error: Option<&str>) -> String {
    error
        .map(|msg| format!(r#"<p class="error">{}</p>"#, escape(msg)))
        .unwrap_or_default()
}

const NAV: &str = r#"<nav>
  <a href="/dashboard">Dashboard</a>
  <a href="/students">Students</a>
  <a href="/marks">Marks</a>
  <a href="/marks/summary">Summary</a>
  <a href="/attendance">Attendance</a>
  <form method="post" action="/signout"><button type="submit">Sign out</button></form>
</nav>"#;

/// Full page. `signed_in` controls the navigation bar.
pub(crate) fn layout(title: &str, signed_in: bool, body: &str) -> Html<String> {
    let nav = if signed_in { NAV } else { "" };
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title} | Student Records</title>
</head>
<body>
{nav}
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>"#,
        title = escape(title),
    ))
}

pub fn error_page(message: &str) -> Html<String> {
    layout("Error", false, &error_banner(Some(message)))
}
