//! Downloadable artifacts built from the session record.

use actix_session::Session;
use actix_web::{HttpResponse, web};
use actix_web::http::header::{self, HeaderValue};
use chrono::Local;

use crate::errors::render_or_placeholder;
use crate::models::outline::{build_outline, outline_text};
use crate::models::stories::{detail_export, summary_export};
use crate::session::PresentationStore;
use crate::session::state::load_presentation;
use crate::templates_structs::OutlinePrintTemplate;

pub const OUTLINE_FILENAME: &str = "Presentation-Outline.doc";
pub const STORIES_FILENAME: &str = "Your-Stories.doc";
pub const STORY_DETAILS_FILENAME: &str = "Complete-Story-Details.doc";

/// Plain text served as a Word document download.
fn word_attachment(filename: &str, body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/msword")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(body)
}

/// GET /export/outline.doc
pub async fn outline_doc(store: web::Data<PresentationStore>, session: Session) -> HttpResponse {
    let data = load_presentation(&session, &store);
    word_attachment(OUTLINE_FILENAME, outline_text(&data))
}

/// GET /export/outline/print
pub async fn outline_print(store: web::Data<PresentationStore>, session: Session) -> HttpResponse {
    let data = load_presentation(&session, &store);
    let tmpl = OutlinePrintTemplate {
        outline: build_outline(&data),
        generated: Local::now().format("%B %-d, %Y").to_string(),
    };
    let mut resp = render_or_placeholder(tmpl, "outline print view");
    resp.headers_mut()
        .insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("inline"));
    resp
}

/// GET /export/stories.doc
pub async fn stories_doc(store: web::Data<PresentationStore>, session: Session) -> HttpResponse {
    let data = load_presentation(&session, &store);
    word_attachment(STORIES_FILENAME, summary_export(&data.stories))
}

/// GET /export/story-details.doc
pub async fn story_details_doc(store: web::Data<PresentationStore>, session: Session) -> HttpResponse {
    let data = load_presentation(&session, &store);
    word_attachment(STORY_DETAILS_FILENAME, detail_export(&data.stories))
}
