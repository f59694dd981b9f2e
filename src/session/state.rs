//! The wizard record for the current browser session.
//!
//! The session cookie holds only a record id. The record lives in `PresentationStore`.

use actix_session::Session;

use crate::errors::AppError;
use crate::models::presentation::PresentationData;
use crate::session::csrf::generate_token;
use crate::session::store::PresentationStore;

const RECORD_ID_KEY: &str = "record_id";
const FLASH_KEY: &str = "flash";

fn record_id(session: &Session) -> Option<String> {
    match session.get::<String>(RECORD_ID_KEY) {
        Ok(id) => id,
        Err(e) => {
            log::warn!("Discarding unreadable record id in session: {e}");
            None
        }
    }
}

/// Current record, or a fresh one when the session has none or the store lost it.
pub fn load_presentation(session: &Session, store: &PresentationStore) -> PresentationData {
    record_id(session)
        .and_then(|id| store.get(&id))
        .unwrap_or_default()
}

pub fn has_presentation(session: &Session, store: &PresentationStore) -> bool {
    record_id(session).is_some_and(|id| store.contains(&id))
}

pub fn save_presentation(
    session: &Session,
    store: &PresentationStore,
    data: &PresentationData,
) -> Result<(), AppError> {
    let id = match record_id(session) {
        Some(id) => id,
        None => {
            let id = generate_token();
            session
                .insert(RECORD_ID_KEY, &id)
                .map_err(|e| AppError::Session(format!("Failed to store record id: {e}")))?;
            id
        }
    };
    store.put(&id, data.clone());
    Ok(())
}

/// Replace the record with an empty one.
pub fn reset_presentation(session: &Session, store: &PresentationStore) -> Result<(), AppError> {
    save_presentation(session, store, &PresentationData::default())
}

pub fn set_flash(session: &Session, message: &str) {
    if let Err(e) = session.insert(FLASH_KEY, message) {
        log::warn!("Could not store flash message: {e}");
    }
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}
