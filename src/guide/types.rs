// Core types for the guide pipeline

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tamil vowel letters that mark an input as Tamil
const TAMIL_VOWELS: &[char] = &['அ', 'ஆ', 'இ', 'ஈ', 'உ', 'எ', 'ஏ', 'ஒ', 'ஓ'];

/// Coarse category of a user request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Directions,
    Etiquette,
    Emergency,
    Translation,
    Fallback,
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::Directions => "directions",
            Intent::Etiquette => "etiquette",
            Intent::Emergency => "emergency",
            Intent::Translation => "translation",
            Intent::Fallback => "fallback",
        }
    }
}

/// Language the reply is translated into
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ta")]
    Tamil,
}

impl Language {
    /// Detect the user's language from raw input.
    ///
    /// Only Tamil script is recognised; everything else is treated as English.
    pub fn detect(input: &str) -> Self {
        if input.chars().any(|c| TAMIL_VOWELS.contains(&c)) {
            Language::Tamil
        } else {
            Language::English
        }
    }

    /// Two-letter code passed to the translation service
    pub fn code(&self) -> &str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
        }
    }
}

/// What a handler hands back to the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Reply {
    /// Text translated into the user's language before display
    pub response: String,
    /// Extra output shown as-is (directions steps, translated text)
    pub detail: Option<String>,
}

impl Reply {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            detail: None,
        }
    }

    /// Reply for a handler whose confirmation was declined
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// One interaction, from raw input to translated reply. Never retained.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub raw_input: String,
    pub language: Language,
    pub english_input: String,
    pub intent: Intent,
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub translated_response: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum GuideError {
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    #[error("No handler registered for intent: {0:?}")]
    HandlerNotFound(Intent),

    #[error("Prompt error: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_tamil_script() {
        assert_eq!(Language::detect("எனக்கு உதவி தேவை"), Language::Tamil);
        assert_eq!(Language::detect("எனக்கு உதவி தேவை").code(), "ta");
    }

    #[test]
    fn test_everything_else_is_english() {
        assert_eq!(Language::detect("I need help"), Language::English);
        assert_eq!(Language::detect("J'ai besoin d'aide").code(), "en");
        assert_eq!(Language::detect(""), Language::English);
    }

    #[test]
    fn test_language_serializes_as_code() {
        let json = serde_json::to_string(&Language::Tamil).unwrap();
        assert_eq!(json, "\"ta\"");
    }

    #[test]
    fn test_reply_builders() {
        let reply = Reply::text("hi").with_detail("steps");
        assert_eq!(reply.response, "hi");
        assert_eq!(reply.detail.as_deref(), Some("steps"));
        assert_eq!(Reply::empty().response, "");
    }
}
