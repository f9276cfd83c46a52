use axum::response::Html;

use super::{error_banner, layout};

pub fn signup(error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"{banner}
<form method="post" action="/signup">
  <label>Name <input name="name" required></label>
  <label>Email <input name="email" type="email" required></label>
  <label>Password <input name="password" type="password" required></label>
  <label>Confirm password <input name="confirm_password" type="password" required></label>
  <button type="submit">Sign up</button>
</form>
<p>Already registered? <a href="/signin">Sign in</a></p>"#,
        banner = error_banner(error),
    );
    layout("Sign up", false, &body)
}

pub fn signin(error: Option<&str>) -> Html<String> {
    let body = format!(
        r#"{banner}
<form method="post" action="/signin">
  <label>Email <input name="email" type="email" required></label>
  <label>Password <input name="password" type="password" required></label>
  <button type="submit">Sign in</button>
</form>
<p>No account? <a href="/signup">Sign up</a></p>"#,
        banner = error_banner(error),
    );
    layout("Sign in", false, &body)
}
