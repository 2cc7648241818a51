// Handler implementations, one per intent

mod directions;
mod emergency;
mod etiquette;
mod fallback;
mod translation;

pub use directions::DirectionsHandler;
pub use emergency::EmergencyHandler;
pub use etiquette::EtiquetteHandler;
pub use fallback::{FallbackHandler, GUIDANCE_MESSAGE};
pub use translation::TranslationHandler;

use super::directions::DirectionsProvider;
use super::knowledge::KnowledgeBase;
use super::prompt::Prompt;
use super::translator::Translate;
use super::types::{GuideError, Intent, Reply};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;

pub const NO_DATA_MESSAGE: &str = "No data available for this country.";

/// Produces the reply for one intent
#[async_trait]
pub trait Handler: Send + Sync {
    /// Build the reply, asking the user for anything the intent needs
    async fn handle(&self, prompt: &mut dyn Prompt) -> Result<Reply, GuideError>;

    /// Intent this handler serves
    fn intent(&self) -> Intent;
}

/// Registry mapping each intent to its handler
pub struct HandlerRegistry {
    handlers: HashMap<Intent, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registry with the standard handler for every intent
    pub fn new(
        knowledge: Arc<KnowledgeBase>,
        translator: Arc<dyn Translate>,
        directions: Arc<dyn DirectionsProvider>,
    ) -> Self {
        let mut registry = Self::empty();

        registry.register(Arc::new(DirectionsHandler::new(directions)));
        registry.register(Arc::new(EtiquetteHandler::new(knowledge.clone())));
        registry.register(Arc::new(EmergencyHandler::new(knowledge)));
        registry.register(Arc::new(TranslationHandler::new(translator)));
        registry.register(Arc::new(FallbackHandler));

        registry
    }

    pub fn register(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.insert(handler.intent(), handler);
    }

    pub fn get(&self, intent: Intent) -> Option<Arc<dyn Handler>> {
        self.handlers.get(&intent).cloned()
    }
}
