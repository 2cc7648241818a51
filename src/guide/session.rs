// Session - runs one interaction from raw input to translated reply

use super::directions::{DirectionsClient, DirectionsProvider};
use super::handlers::HandlerRegistry;
use super::knowledge::KnowledgeBase;
use super::prompt::Prompt;
use super::router::Router;
use super::translator::{GoogleTranslator, Translate, safe_translate};
use super::types::{ConversationTurn, GuideError, Language};
use crate::config::GuideConfig;
use chrono::Utc;
use std::sync::Arc;

/// Trimmed user message, or `None` when there is nothing to answer
pub fn user_message(raw: &str) -> Option<&str> {
    let message = raw.trim();
    (!message.is_empty()).then_some(message)
}

/// Stateless pipeline: every call to `respond` starts from scratch.
pub struct Session {
    router: Router,
    registry: HandlerRegistry,
    translator: Arc<dyn Translate>,
    knowledge: Arc<KnowledgeBase>,
}

impl Session {
    /// Build a session talking to the real services described by `config`
    pub fn from_config(config: &GuideConfig) -> Result<Self, GuideError> {
        let knowledge = match &config.knowledge_path {
            Some(path) => KnowledgeBase::from_file(path)?,
            None => KnowledgeBase::embedded()?,
        };

        let translator = Arc::new(GoogleTranslator::with_endpoint(&config.translate_endpoint));
        let directions = Arc::new(DirectionsClient::with_endpoint(
            &config.directions_endpoint,
            config.api_key.clone(),
        ));

        Ok(Self::new(knowledge, translator, directions))
    }

    pub fn new(
        knowledge: KnowledgeBase,
        translator: Arc<dyn Translate>,
        directions: Arc<dyn DirectionsProvider>,
    ) -> Self {
        let knowledge = Arc::new(knowledge);
        let registry = HandlerRegistry::new(knowledge.clone(), translator.clone(), directions);

        Self {
            router: Router::new(),
            registry,
            translator,
            knowledge,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Process one line of user input.
    ///
    /// Service failures never surface here; only prompt I/O can fail.
    pub async fn respond(
        &self,
        raw_input: &str,
        prompt: &mut dyn Prompt,
    ) -> Result<ConversationTurn, GuideError> {
        let language = Language::detect(raw_input);
        let english_input = safe_translate(self.translator.as_ref(), raw_input, "en")
            .await
            .to_lowercase();

        tracing::debug!(
            "Detected language '{}', English input: {}",
            language.code(),
            english_input
        );

        let intent = self.router.route(&english_input);
        let handler = self
            .registry
            .get(intent)
            .ok_or(GuideError::HandlerNotFound(intent))?;

        let reply = handler.handle(prompt).await?;

        let translated_response =
            safe_translate(self.translator.as_ref(), &reply.response, language.code()).await;

        Ok(ConversationTurn {
            raw_input: raw_input.to_string(),
            language,
            english_input,
            intent,
            response: reply.response,
            detail: reply.detail,
            translated_response,
            at: Utc::now(),
        })
    }
}
