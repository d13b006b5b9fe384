//! Inline message catalog
//!
//! Texts are looked up by the stable codes the core crate attaches to
//! advisories and errors. The catalog is embedded at compile time and can
//! be replaced at runtime by a file named in `CAMS_MESSAGES_PATH`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use cams_core::{Advisory, AuthError, DomainError, ImageryError, NavigationError};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../../i18n/messages.toml");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageCatalog {
    /// Texts keyed by error code
    #[serde(default)]
    pub messages: HashMap<String, String>,
    /// Shell prompts and confirmations
    #[serde(default)]
    pub shell: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn embedded() -> Result<Self, toml::de::Error> {
        Self::from_toml(EMBEDDED_CATALOG)
    }

    /// Text for `code`, or the code itself when the catalog has no entry
    pub fn message(&self, code: &str) -> String {
        self.messages
            .get(code)
            .cloned()
            .unwrap_or_else(|| code.to_string())
    }

    pub fn shell_text(&self, key: &str) -> String {
        self.shell
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

pub static MESSAGES: Lazy<MessageCatalog> = Lazy::new(load_catalog);

fn load_catalog() -> MessageCatalog {
    if let Ok(path) = std::env::var("CAMS_MESSAGES_PATH") {
        match read_catalog(Path::new(&path)) {
            Ok(catalog) => return catalog,
            Err(e) => tracing::warn!(path = %path, error = %e, "Ignoring message catalog override"),
        }
    }

    MessageCatalog::embedded().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Embedded message catalog is invalid");
        MessageCatalog::default()
    })
}

fn read_catalog(path: &Path) -> Result<MessageCatalog, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    Ok(MessageCatalog::from_toml(&content)?)
}

pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

pub fn advisory_text(advisory: &Advisory) -> String {
    MESSAGES.message(advisory.code())
}

pub fn auth_error_text(error: &AuthError) -> String {
    let template = MESSAGES.message(error.code());
    let mut params = HashMap::new();
    if let AuthError::ServiceUnavailable { message } = error {
        params.insert("message", message.clone());
    }
    format_message(&template, &params)
}

pub fn imagery_error_text(error: &ImageryError) -> String {
    let template = MESSAGES.message(error.code());
    let mut params = HashMap::new();
    match error {
        ImageryError::AreaTooSmall { points } => {
            params.insert("points", points.to_string());
        }
        ImageryError::InvalidDateRange { message } | ImageryError::ServiceUnavailable { message } => {
            params.insert("message", message.clone());
        }
        _ => {}
    }
    format_message(&template, &params)
}

/// Inline text for any failed flow action
pub fn error_text(error: &DomainError) -> String {
    match error {
        DomainError::Auth(e) => auth_error_text(e),
        DomainError::Imagery(e) => imagery_error_text(e),
        DomainError::DateRange(e) => advisory_text(&Advisory::DateRange(*e)),
        DomainError::Validation { .. } => MESSAGES.message(error.code()),
        DomainError::Navigation(NavigationError::GateClosed { .. }) => {
            MESSAGES.shell_text("gate_closed")
        }
        DomainError::Navigation(NavigationError::CannotPopRoot) => {
            MESSAGES.shell_text("cannot_go_back")
        }
        DomainError::Navigation(_) => MESSAGES.shell_text("wrong_screen"),
    }
}
