// Directions handler - asks for both ends of the trip and fetches the route

use super::Handler;
use crate::guide::directions::DirectionsProvider;
use crate::guide::prompt::Prompt;
use crate::guide::types::{GuideError, Intent, Reply};
use async_trait::async_trait;
use std::sync::Arc;

pub struct DirectionsHandler {
    provider: Arc<dyn DirectionsProvider>,
}

impl DirectionsHandler {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Handler for DirectionsHandler {
    async fn handle(&self, prompt: &mut dyn Prompt) -> Result<Reply, GuideError> {
        prompt.say("🗺️ Let's find directions!");
        let origin = prompt.ask("Enter starting location:")?;
        let destination = prompt.ask("Enter destination:")?;

        if !prompt.confirm("Get Directions")? {
            return Ok(Reply::empty());
        }

        let outcome = self.provider.directions(&origin, &destination).await;
        Ok(Reply::text("Here are your directions.").with_detail(outcome.to_text()))
    }

    fn intent(&self) -> Intent {
        Intent::Directions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::directions::DirectionsOutcome;
    use crate::guide::prompt::ScriptedPrompt;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl DirectionsProvider for Recorder {
        async fn directions(&self, origin: &str, destination: &str) -> DirectionsOutcome {
            self.calls
                .lock()
                .unwrap()
                .push((origin.to_string(), destination.to_string()));
            DirectionsOutcome::Steps(vec!["Head <b>north</b>".to_string()])
        }
    }

    #[tokio::test]
    async fn test_confirmed_request_returns_steps() {
        let recorder = Arc::new(Recorder::default());
        let handler = DirectionsHandler::new(recorder.clone());
        let mut prompt = ScriptedPrompt::new(["Chennai", "Madurai", "yes"]);

        let reply = handler.handle(&mut prompt).await.unwrap();
        assert_eq!(reply.response, "Here are your directions.");
        assert_eq!(reply.detail.as_deref(), Some("Head north"));
        assert_eq!(
            *recorder.calls.lock().unwrap(),
            vec![("Chennai".to_string(), "Madurai".to_string())]
        );
        assert_eq!(prompt.said, vec!["🗺️ Let's find directions!"]);
    }

    #[tokio::test]
    async fn test_declined_request_makes_no_call() {
        let recorder = Arc::new(Recorder::default());
        let handler = DirectionsHandler::new(recorder.clone());
        let mut prompt = ScriptedPrompt::new(["Chennai", "Madurai", "no"]);

        let reply = handler.handle(&mut prompt).await.unwrap();
        assert_eq!(reply, Reply::empty());
        assert!(recorder.calls.lock().unwrap().is_empty());
    }
}
