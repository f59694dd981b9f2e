use actix_web::{HttpResponse, web};

use crate::errors::NOT_FOUND_PAGE;
use crate::handlers::{export, home, output, wizard};

/// Register every route. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(actix_files::Files::new("/static", "./static"))
        .route("/", web::get().to(home::index))
        .route("/start", web::post().to(home::start))
        // Wizard
        .route("/wizard/{step}", web::get().to(wizard::show))
        .route("/wizard/{step}", web::post().to(wizard::submit))
        .route("/output", web::get().to(output::show))
        // Exports
        .route("/export/outline.doc", web::get().to(export::outline_doc))
        .route("/export/outline/print", web::get().to(export::outline_print))
        .route("/export/stories.doc", web::get().to(export::stories_doc))
        .route("/export/story-details.doc", web::get().to(export::story_details_doc))
        // Default 404 handler (must be registered last)
        .default_service(web::to(|| async {
            HttpResponse::NotFound()
                .content_type("text/html; charset=utf-8")
                .body(NOT_FOUND_PAGE)
        }));
}
