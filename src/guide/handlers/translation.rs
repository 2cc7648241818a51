// Translation handler - translates user-supplied text on request

use super::Handler;
use crate::guide::prompt::Prompt;
use crate::guide::translator::{Translate, safe_translate};
use crate::guide::types::{GuideError, Intent, Reply};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranslationHandler {
    translator: Arc<dyn Translate>,
}

impl TranslationHandler {
    pub fn new(translator: Arc<dyn Translate>) -> Self {
        Self { translator }
    }
}

#[async_trait]
impl Handler for TranslationHandler {
    async fn handle(&self, prompt: &mut dyn Prompt) -> Result<Reply, GuideError> {
        prompt.say("🌐 Translation Mode Activated!");
        let text = prompt.ask("Enter text to translate:")?;
        let target = prompt.ask("Enter target language code (e.g., ta, fr, hi, ja):")?;

        if !prompt.confirm("Translate Now")? {
            return Ok(Reply::empty());
        }

        let translated = safe_translate(self.translator.as_ref(), &text, target.trim()).await;
        let detail = format!("Translated Text: {}", translated);
        Ok(Reply::text(translated).with_detail(detail))
    }

    fn intent(&self) -> Intent {
        Intent::Translation
    }
}
