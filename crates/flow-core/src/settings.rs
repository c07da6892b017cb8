//! Global settings loaded from TOML, following the same OnceLock pattern as the lexicon.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub sanitizer: SanitizerSettings,
    pub english: EnglishSettings,
    pub flowing: FlowingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SanitizerSettings {
    pub strip_chars: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnglishSettings {
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FlowingSettings {
    pub tense_markers: Vec<String>,
    pub pronoun_senses: usize,
}

impl FlowingSettings {
    /// Whether `gloss` is one of the configured tense markers (case-insensitive).
    pub fn is_tense_marker(&self, gloss: &str) -> bool {
        self.tense_markers
            .iter()
            .any(|m| m.eq_ignore_ascii_case(gloss))
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.sanitizer.strip_chars.chars().any(char::is_whitespace) {
        return Err(invalid(
            "sanitizer.strip_chars",
            "must not contain whitespace",
        ));
    }

    for suffix in &s.english.suffixes {
        if suffix.is_empty() {
            return Err(invalid("english.suffixes", "suffix must not be empty"));
        }
        if suffix.chars().any(|c| c.is_uppercase() || c.is_whitespace()) {
            return Err(SettingsError::InvalidValue {
                field: "english.suffixes".to_string(),
                reason: format!("suffix {suffix:?} must be a lowercase word fragment"),
            });
        }
    }

    if s.flowing.tense_markers.iter().any(|m| m.trim().is_empty()) {
        return Err(invalid(
            "flowing.tense_markers",
            "marker must not be empty",
        ));
    }
    if s.flowing.pronoun_senses == 0 {
        return Err(invalid("flowing.pronoun_senses", "must be positive"));
    }

    Ok(())
}
