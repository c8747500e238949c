use std::{fmt, str::FromStr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_STORAGE_BUCKET: &str = "chat-attachments";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_AI_PROFILE_USERNAME: &str = "NotFox AI";
const DEFAULT_EMAIL_REDIRECT_URL: &str = "http://localhost:8080/";
const DEFAULT_PORT: u16 = 5000;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct Config {
    pub database_url: String,
    pub port: u16,

    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub storage_bucket: String,
    pub email_redirect_url: String,

    pub gemini_api_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,

    pub ai_profile_username: String,
    pub ai_profile_id: Option<uuid::Uuid>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// `DATABASE_URL`, `SUPABASE_URL` and `SUPABASE_ANON_KEY` are required; every other
    /// variable falls back to a default.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(AppError::ConfigErr)` - Missing required variable or unparseable value
    pub fn from_env() -> Result<Self, AppError> {
        let port = parse_optional::<u16>("PORT", non_blank("PORT"))?.unwrap_or(DEFAULT_PORT);
        let ai_profile_id = parse_optional("AI_PROFILE_ID", non_blank("AI_PROFILE_ID"))?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            supabase_url: required("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            storage_bucket: optional("STORAGE_BUCKET", DEFAULT_STORAGE_BUCKET),
            email_redirect_url: optional("EMAIL_REDIRECT_URL", DEFAULT_EMAIL_REDIRECT_URL),
            gemini_api_url: GEMINI_API_URL.to_string(),
            gemini_api_key: non_blank("GEMINI_API_KEY"),
            gemini_model: optional("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
            ai_profile_username: optional("AI_PROFILE_USERNAME", DEFAULT_AI_PROFILE_USERNAME),
            ai_profile_id,
        })
    }
}

/// Reads a variable, treating an empty or whitespace-only value as unset.
fn non_blank(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

fn required(name: &str) -> Result<String, ConfigError> {
    non_blank(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    non_blank(name).unwrap_or_else(|| default.to_string())
}

/// Parses an optional variable value. Blank values count as unset.
///
/// # Arguments
/// - `name` - Variable name, used in the error
/// - `value` - Raw value, `None` when the variable is unset
///
/// # Returns
/// - `Ok(None)` - Unset or blank
/// - `Ok(Some(T))` - Parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - Value present but unparseable
fn parse_optional<T>(name: &str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                reason: e.to_string(),
            }),
    }
}
