// Router - picks an intent from English text by keyword

use super::types::Intent;

/// Keywords that select an intent
#[derive(Debug, Clone)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub intent: Intent,
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Ordered rule list. The first matching rule wins, so order is significant.
#[derive(Debug, Clone)]
pub struct Router {
    rules: Vec<Rule>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Rule {
                    keywords: &["direction", "route"],
                    intent: Intent::Directions,
                },
                Rule {
                    keywords: &["etiquette", "culture"],
                    intent: Intent::Etiquette,
                },
                Rule {
                    keywords: &["emergency", "help"],
                    intent: Intent::Emergency,
                },
                Rule {
                    keywords: &["translate"],
                    intent: Intent::Translation,
                },
            ],
        }
    }

    /// Route lowercase English input; anything unmatched falls back
    pub fn route(&self, text: &str) -> Intent {
        let intent = self
            .rules
            .iter()
            .find(|rule| rule.matches(text))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Fallback);

        tracing::debug!("Routed '{}' to {}", text, intent.as_str());
        intent
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
