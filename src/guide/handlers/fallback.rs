// Fallback handler - usage guidance when nothing else matched

use super::Handler;
use crate::guide::prompt::Prompt;
use crate::guide::types::{GuideError, Intent, Reply};
use async_trait::async_trait;

pub const GUIDANCE_MESSAGE: &str =
    "I'm your virtual guide! You can ask for directions, translations, etiquette, or emergency info.";

pub struct FallbackHandler;

#[async_trait]
impl Handler for FallbackHandler {
    async fn handle(&self, _prompt: &mut dyn Prompt) -> Result<Reply, GuideError> {
        Ok(Reply::text(GUIDANCE_MESSAGE))
    }

    fn intent(&self) -> Intent {
        Intent::Fallback
    }
}
