// Etiquette handler - cultural customs for a chosen country

use super::{Handler, NO_DATA_MESSAGE};
use crate::guide::knowledge::KnowledgeBase;
use crate::guide::prompt::Prompt;
use crate::guide::types::{GuideError, Intent, Reply};
use async_trait::async_trait;
use std::sync::Arc;

pub struct EtiquetteHandler {
    knowledge: Arc<KnowledgeBase>,
}

impl EtiquetteHandler {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

#[async_trait]
impl Handler for EtiquetteHandler {
    async fn handle(&self, prompt: &mut dyn Prompt) -> Result<Reply, GuideError> {
        let country = prompt.select("Select a country:", &self.knowledge.countries())?;

        let text = self.knowledge.etiquette(&country).unwrap_or(NO_DATA_MESSAGE);
        Ok(Reply::text(text))
    }

    fn intent(&self) -> Intent {
        Intent::Etiquette
    }
}
