pub mod csrf;
pub mod state;
pub mod store;

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::Key;

pub use store::PresentationStore;

pub const COOKIE_NAME: &str = "outline_session";

/// Cookie-backed session middleware. The cookie carries the CSRF token, the record id
/// and the flash message; records themselves stay in `PresentationStore`.
pub fn middleware(key: Key, secure: bool) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name(COOKIE_NAME.to_string())
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_secure(secure)
        .cookie_http_only(true)
        .build()
}
