//! Shared helpers for the HTTP integration tests.
//!
//! The app is built with a fresh session key per test. Responses are driven through
//! `call!`, which carries the session cookie from one request to the next the way a
//! browser would. Declare the module with `#[macro_use]`.

#![allow(dead_code)]

use actix_web::HttpResponse;
use actix_web::cookie::Cookie;
use regex::Regex;

use outline_builder::session::COOKIE_NAME;

/// Initialise the full application as an actix test service.
macro_rules! test_app {
    () => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(
                    outline_builder::session::PresentationStore::new(),
                ))
                .wrap(outline_builder::session::middleware(
                    actix_web::cookie::Key::generate(),
                    false,
                ))
                .configure(outline_builder::routes::configure),
        )
        .await
    };
}

/// Send a `TestRequest` with the jar's session cookie and keep any cookie the
/// response sets.
macro_rules! call {
    ($app:expr, $jar:expr, $req:expr) => {{
        let mut req = $req;
        if let Some(cookie) = $jar.as_ref() {
            req = req.cookie(cookie.clone());
        }
        let resp = actix_web::test::call_service(&$app, req.to_request()).await;
        common::capture_cookie(&mut $jar, resp.response());
        resp
    }};
}

pub type Jar = Option<Cookie<'static>>;

pub fn capture_cookie<B>(jar: &mut Jar, resp: &HttpResponse<B>) {
    if let Some(cookie) = resp.cookies().find(|c| c.name() == COOKIE_NAME) {
        *jar = Some(cookie.into_owned());
    }
}

/// Pull the CSRF token out of a rendered page.
pub fn csrf_token(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}

/// Encode form pairs the way a browser would.
pub fn form(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

pub fn location<B>(resp: &HttpResponse<B>) -> String {
    resp.headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn header<B>(resp: &HttpResponse<B>, name: &str) -> String {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
