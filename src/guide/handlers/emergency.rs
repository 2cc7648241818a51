// Emergency handler - police, ambulance and fire numbers for a chosen country

use super::{Handler, NO_DATA_MESSAGE};
use crate::guide::knowledge::{EmergencyContacts, KnowledgeBase};
use crate::guide::prompt::Prompt;
use crate::guide::types::{GuideError, Intent, Reply};
use async_trait::async_trait;
use std::sync::Arc;

pub struct EmergencyHandler {
    knowledge: Arc<KnowledgeBase>,
}

impl EmergencyHandler {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self { knowledge }
    }
}

pub fn format_contacts(country: &str, contacts: &EmergencyContacts) -> String {
    format!(
        "🚨 Emergency Contacts for {}:\nPolice: {}\nAmbulance: {}\nFire: {}",
        country, contacts.police, contacts.ambulance, contacts.fire
    )
}

#[async_trait]
impl Handler for EmergencyHandler {
    async fn handle(&self, prompt: &mut dyn Prompt) -> Result<Reply, GuideError> {
        let country = prompt.select("Select your country:", &self.knowledge.countries())?;

        let text = match self.knowledge.emergency(&country) {
            Some(contacts) => format_contacts(&country, contacts),
            None => NO_DATA_MESSAGE.to_string(),
        };
        Ok(Reply::text(text))
    }

    fn intent(&self) -> Intent {
        Intent::Emergency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::handlers::testing::UnlistedCountry;
    use crate::guide::prompt::ScriptedPrompt;

    #[tokio::test]
    async fn test_japan_contacts() {
        let handler = EmergencyHandler::new(Arc::new(KnowledgeBase::embedded().unwrap()));
        let mut prompt = ScriptedPrompt::new(["Japan"]);

        let reply = handler.handle(&mut prompt).await.unwrap();
        assert_eq!(
            reply.response,
            "🚨 Emergency Contacts for Japan:\nPolice: 110\nAmbulance: 119\nFire: 119"
        );
    }

    #[tokio::test]
    async fn test_unknown_country_has_no_data() {
        let handler = EmergencyHandler::new(Arc::new(KnowledgeBase::embedded().unwrap()));

        let reply = handler.handle(&mut UnlistedCountry).await.unwrap();
        assert_eq!(reply.response, "No data available for this country.");
        assert!(reply.detail.is_none());
    }
}
