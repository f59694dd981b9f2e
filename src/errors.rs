use actix_web::{HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Template(askama::Error),
    Session(String),
    Form(String),
    Csrf,
    NotFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Session(e) => write!(f, "Session error: {e}"),
            AppError::Form(e) => write!(f, "Invalid form data: {e}"),
            AppError::Csrf => write!(f, "Invalid or missing CSRF token"),
            AppError::NotFound => write!(f, "Not found"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::NotFound => HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_PAGE),
            AppError::Csrf => {
                log::warn!("{self}");
                HttpResponse::Forbidden().body("Invalid or missing CSRF token")
            }
            AppError::Form(_) => {
                log::warn!("{self}");
                HttpResponse::BadRequest().body(self.to_string())
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().body("Internal Server Error")
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}

impl From<serde_urlencoded::de::Error> for AppError {
    fn from(e: serde_urlencoded::de::Error) -> Self {
        AppError::Form(e.to_string())
    }
}

pub const NOT_FOUND_PAGE: &str = include_str!("../templates/errors/404.html");

/// Shown in place of a view whose template failed to render.
pub const RENDER_ERROR_PAGE: &str = include_str!("../templates/errors/render.html");

/// Render a template into a 200 response.
pub fn render(tmpl: impl Template) -> Result<HttpResponse, AppError> {
    let body = tmpl.render()?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// Render a template, falling back to the static error page instead of failing the request.
pub fn render_or_placeholder(tmpl: impl Template, what: &str) -> HttpResponse {
    match tmpl.render() {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(e) => {
            log::error!("Failed to render {what}: {e}");
            HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(RENDER_ERROR_PAGE)
        }
    }
}
