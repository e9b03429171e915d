use std::fmt::Write;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use crate::error::ProbeError;
use crate::models::UserIdentity;
use crate::probes;

pub const USER_FILE: &str = "user.txt";
// owned by root in the container image
pub const ROOT_FILE: &str = "root.txt";
// readable by anyone unless an AppArmor profile denies it
pub const PROC_FILE: &str = "/proc/cpuinfo";

pub async fn hostname() -> String {

    render_hostname(probes::hostname())

}

pub async fn get_user() -> String {

    render_user(probes::current_user().await)

}

pub async fn user_file() -> Response {

    file_response(USER_FILE).await

}

pub async fn root_file() -> Response {

    file_response(ROOT_FILE).await

}

pub async fn proc_file() -> Response {

    file_response(PROC_FILE).await

}

async fn file_response(path: &str) -> Response {

    let body = render_file(probes::read_file(path).await);

    // file bytes are passed through untouched, so the type is set by hand
    ([(header::CONTENT_TYPE, "text/plain; charset=utf-8")], body).into_response()

}

// On failure the error line is written and the greeting still follows with
// an empty hostname.
pub fn render_hostname(result: Result<String, ProbeError>) -> String {

    let mut body = String::new();

    let host = result.unwrap_or_else(|e| {
        let _ = write!(body, "{}", e);
        String::new()
    });

    let _ = writeln!(body, "You are querying host {}", host);
    body

}

// There is no user record to print after a failed lookup, so only the error
// line is written.
pub fn render_user(result: Result<UserIdentity, ProbeError>) -> String {

    match result {
        Ok(user) => format!("User: {}\nUID: {}\nGID: {}\n", user.name, user.uid, user.gid),
        Err(e) => format!("{}\n", e)
    }

}

// Same continue-past-error shape as the hostname: error line, then the
// (empty) content and a newline.
pub fn render_file(result: Result<Vec<u8>, ProbeError>) -> Vec<u8> {

    let mut body = Vec::new();

    let content = result.unwrap_or_else(|e| {
        body.extend_from_slice(e.to_string().as_bytes());
        Vec::new()
    });

    body.extend_from_slice(&content);
    body.push(b'\n');
    body

}
