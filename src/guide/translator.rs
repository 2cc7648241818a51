// Translator - sends text through an online translation service

use async_trait::async_trait;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Anything that can translate text into a target language
#[async_trait]
pub trait Translate: Send + Sync {
    /// Translate `text` into `target` (a language code such as "en" or "ta")
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}

/// Translate, falling back to the original text on any failure.
///
/// Never fails: a service error, an unsupported code or a rate limit all
/// return `text` unchanged.
pub async fn safe_translate(translator: &dyn Translate, text: &str, target: &str) -> String {
    match translator.translate(text, target).await {
        Ok(translated) => translated,
        Err(e) => {
            tracing::warn!("Translation to '{}' failed, keeping original: {}", target, e);
            text.to_string()
        }
    }
}

/// Client for the public Google Translate endpoint with automatic source detection
pub struct GoogleTranslator {
    client: reqwest::Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translate for GoogleTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        tracing::info!("Translating {} chars to '{}'", text.chars().count(), target);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslateError::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::ServiceError(format!(
                "Translation service returned {}",
                status
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranslateError::NetworkError(e.to_string()))?;

        parse_translation(&body)
    }
}

/// Join the translated segments found at `[0][*][0]` of a gtx response
fn parse_translation(body: &str) -> Result<String, TranslateError> {
    let json: serde_json::Value =
        serde_json::from_str(body).map_err(|e| TranslateError::ParseError(e.to_string()))?;

    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslateError::ParseError("missing segment array".to_string()))?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(TranslateError::ServiceError("Empty translation".to_string()));
    }

    Ok(translation)
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}
