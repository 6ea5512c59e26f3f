// src/config.rs

use std::env;

use crate::error::{ApiError, Result};

/// Everything the five deployment variants differed on, collapsed into
/// one configuration surface.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,

    pub mongo_uri: String,
    pub mongo_db: String,

    /// Signs the admin token cookie.
    pub session_secret: String,
    pub admin_email: String,
    pub admin_pass: String,
    pub cookie_secure: bool,

    pub razorpay_key: String,
    pub razorpay_secret: String,

    pub email_enabled: bool,
    pub email_api_key: String,
    pub email_from: String,
    pub email_api_url: Option<String>,

    pub cors_origin: Option<String>,

    pub rate_limit_window_secs: u64,
    pub rate_limit_max: u32,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let get_env = |name: &str| {
            env::var(name)
                .map_err(|_| ApiError::Config(format!("missing environment variable '{name}'")))
        };

        let host = get_env("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = get_env("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|e| ApiError::Config(format!("invalid PORT: {e}")))?;

        let mongo_uri = get_env("MONGO_URI")?;
        let mongo_db = get_env("MONGO_DB").unwrap_or_else(|_| "avx".to_string());

        let session_secret = get_env("SESSION_SECRET")?;
        let admin_email = get_env("ADMIN_EMAIL")?;
        let admin_pass = get_env("ADMIN_PASS")?;
        let cookie_secure = parse_flag(get_env("COOKIE_SECURE"), false)?;

        let razorpay_key = get_env("RAZORPAY_KEY")?;
        let razorpay_secret = get_env("RAZORPAY_SECRET")?;

        let email_enabled = parse_flag(get_env("EMAIL_ENABLED"), true)?;
        let email_api_key = if email_enabled {
            get_env("EMAIL_API_KEY")?
        } else {
            get_env("EMAIL_API_KEY").unwrap_or_default()
        };
        let email_from = get_env("EMAIL_FROM").unwrap_or_else(|_| admin_email.clone());
        let email_api_url = get_env("EMAIL_API_URL").ok();

        let cors_origin = get_env("CORS_ORIGIN").ok();

        let rate_limit_window_secs = get_env("RATE_LIMIT_WINDOW_SECS")
            .unwrap_or_else(|_| "60".to_string())
            .parse::<u64>()
            .map_err(|e| ApiError::Config(format!("invalid RATE_LIMIT_WINDOW_SECS: {e}")))?;
        let rate_limit_max = get_env("RATE_LIMIT_MAX")
            .unwrap_or_else(|_| "20".to_string())
            .parse::<u32>()
            .map_err(|e| ApiError::Config(format!("invalid RATE_LIMIT_MAX: {e}")))?;

        Ok(Self {
            host,
            port,
            mongo_uri,
            mongo_db,
            session_secret,
            admin_email,
            admin_pass,
            cookie_secure,
            razorpay_key,
            razorpay_secret,
            email_enabled,
            email_api_key,
            email_from,
            email_api_url,
            cors_origin,
            rate_limit_window_secs,
            rate_limit_max,
        })
    }
}

fn parse_flag(raw: std::result::Result<String, ApiError>, default: bool) -> Result<bool> {
    match raw {
        Ok(value) => value
            .parse::<bool>()
            .map_err(|e| ApiError::Config(format!("invalid boolean flag: {e}"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_when_unset() {
        let missing: std::result::Result<String, ApiError> =
            Err(ApiError::Config("missing".into()));
        assert!(parse_flag(missing, true).expect("default true"));

        let explicit: std::result::Result<String, ApiError> = Ok("false".into());
        assert!(!parse_flag(explicit, true).expect("explicit false"));
    }

    #[test]
    fn malformed_flags_are_rejected() {
        let bad: std::result::Result<String, ApiError> = Ok("yes".into());
        assert!(parse_flag(bad, false).is_err());
    }
}
