use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, render};
use crate::handlers::forms::FormFields;
use crate::models::steps::Step;
use crate::session::{PresentationStore, csrf};
use crate::session::state::{has_presentation, reset_presentation};
use crate::templates_structs::{HomeTemplate, PageContext, StepCard};

/// GET /: the eleven steps at a glance.
pub async fn index(store: web::Data<PresentationStore>, session: Session) -> Result<HttpResponse, AppError> {
    let ctx = PageContext::build(&session);
    let steps = Step::ALL
        .iter()
        .map(|s| StepCard {
            number: s.index() + 1,
            title: s.title(),
            description: s.description(),
        })
        .collect();
    let tmpl = HomeTemplate {
        ctx,
        steps,
        in_progress: has_presentation(&session, &store),
    };
    render(tmpl)
}

/// POST /start: discard any record in the session and open step one.
pub async fn start(
    store: web::Data<PresentationStore>,
    session: Session,
    body: String,
) -> Result<HttpResponse, AppError> {
    let form = FormFields::parse(&body)?;
    csrf::validate_csrf(&session, form.get("csrf_token").unwrap_or(""))?;

    reset_presentation(&session, &store)?;
    log::info!("Started a new presentation");

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/wizard/0"))
        .finish())
}
