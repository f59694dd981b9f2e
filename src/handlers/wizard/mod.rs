pub mod actions;
pub mod apply;
pub mod views;

use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::errors::{AppError, RENDER_ERROR_PAGE};
use crate::handlers::forms::FormFields;
use crate::models::steps::Step;
use crate::session::{PresentationStore, csrf};
use crate::session::state::{load_presentation, save_presentation, set_flash};
use crate::templates_structs::PageContext;

use actions::{WizardAction, perform};

const BIG_IDEA_REQUIRED: &str =
    "You must define your Big Idea before proceeding. This is the foundation of your entire presentation.";

fn step_from_path(index: usize) -> Result<Step, AppError> {
    Step::from_index(index).ok_or(AppError::NotFound)
}

/// GET /wizard/{step}
pub async fn show(
    store: web::Data<PresentationStore>,
    session: Session,
    path: web::Path<usize>,
) -> Result<HttpResponse, AppError> {
    let step = step_from_path(path.into_inner())?;
    let mut data = load_presentation(&session, &store);

    if step == Step::Outline && !data.outline_reviewed {
        data.mark_outline_reviewed();
        save_presentation(&session, &store, &data)?;
    }

    let ctx = PageContext::build(&session);
    match views::render_step(step, ctx, &data) {
        Ok(body) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body)),
        Err(e) => {
            log::error!("Failed to render step {} ({}): {e}", step.index(), step.title());
            Ok(HttpResponse::InternalServerError()
                .content_type("text/html; charset=utf-8")
                .body(RENDER_ERROR_PAGE))
        }
    }
}

/// POST /wizard/{step}: save the step's fields, then perform the submitted action.
pub async fn submit(
    store: web::Data<PresentationStore>,
    session: Session,
    path: web::Path<usize>,
    body: String,
) -> Result<HttpResponse, AppError> {
    let step = step_from_path(path.into_inner())?;
    let form = FormFields::parse(&body)?;
    csrf::validate_csrf(&session, form.get("csrf_token").unwrap_or(""))?;

    let action = match form.get("action") {
        Some(raw) => raw.parse::<WizardAction>().map_err(AppError::Form)?,
        None => WizardAction::Save,
    };

    let mut data = load_presentation(&session, &store);
    apply::apply_step(step, &mut data, &form);
    let transition = perform(step, action, &mut data);
    save_presentation(&session, &store, &data)?;

    if transition.blocked {
        log::debug!("Blocked advance from step {}", step.index());
        set_flash(&session, BIG_IDEA_REQUIRED);
    }

    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", transition.destination.path()))
        .finish())
}
