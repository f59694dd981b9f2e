use actix_web::cookie::Key;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const MIN_KEY_LEN: usize = 64;

/// Runtime settings read from the environment (and `.env`, if present).
pub struct AppConfig {
    pub bind_addr: String,
    pub session_key: Key,
    pub cookie_secure: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        if dotenvy::dotenv().is_ok() {
            log::info!("Loaded environment from .env");
        }

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let session_key = session_key_from(std::env::var("SESSION_KEY").ok());
        let cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|v| parse_flag(&v))
            .unwrap_or(false);

        Self { bind_addr, session_key, cookie_secure }
    }
}

/// Session encryption key. Wizard progress lives entirely in the cookie, so a
/// generated key means every session is lost on restart.
fn session_key_from(value: Option<String>) -> Key {
    match value {
        Some(val) if val.len() >= MIN_KEY_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need {MIN_KEY_LEN}+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn long_key_is_used_verbatim() {
        let raw = "k".repeat(64);
        let key = session_key_from(Some(raw.clone()));
        assert_eq!(key.master(), Key::from(raw.as_bytes()).master());
    }

    #[test]
    fn short_key_falls_back_to_generated() {
        let key = session_key_from(Some("short".into()));
        assert_eq!(key.master().len(), 64);
    }
}
