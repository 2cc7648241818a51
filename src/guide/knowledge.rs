// Static knowledge - per-country etiquette notes and emergency numbers

use super::types::GuideError;
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_KNOWLEDGE: &str = include_str!("../../data/knowledge.json");

#[derive(Debug, Clone, Deserialize)]
pub struct EtiquetteEntry {
    pub country: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EmergencyContacts {
    #[serde(rename = "Police")]
    pub police: String,
    #[serde(rename = "Ambulance")]
    pub ambulance: String,
    #[serde(rename = "Fire")]
    pub fire: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmergencyEntry {
    pub country: String,
    pub contacts: EmergencyContacts,
}

/// Both tables, immutable once loaded. Entry order is the order countries are offered in.
#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeBase {
    etiquette: Vec<EtiquetteEntry>,
    emergency: Vec<EmergencyEntry>,
}

impl KnowledgeBase {
    /// Tables compiled into the binary
    pub fn embedded() -> Result<Self, GuideError> {
        Self::from_json(EMBEDDED_KNOWLEDGE)
    }

    /// Load tables from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, GuideError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GuideError::Knowledge(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let knowledge: KnowledgeBase = serde_json::from_str(json)?;
        knowledge.validate()?;
        Ok(knowledge)
    }

    /// Both tables must cover exactly the same countries, each once, and not be empty
    pub fn validate(&self) -> Result<(), GuideError> {
        if self.etiquette.is_empty() || self.emergency.is_empty() {
            return Err(GuideError::Knowledge("Knowledge tables list no countries".to_string()));
        }

        let etiquette: Vec<&str> = self.etiquette.iter().map(|e| e.country.as_str()).collect();
        let emergency: Vec<&str> = self.emergency.iter().map(|e| e.country.as_str()).collect();

        for (name, countries) in [("etiquette", &etiquette), ("emergency", &emergency)] {
            for (i, country) in countries.iter().enumerate() {
                if countries[..i].contains(country) {
                    return Err(GuideError::Knowledge(format!(
                        "Duplicate country '{}' in {} table",
                        country, name
                    )));
                }
            }
        }

        let mut a = etiquette.clone();
        let mut b = emergency.clone();
        a.sort_unstable();
        b.sort_unstable();
        if a != b {
            return Err(GuideError::Knowledge(format!(
                "Etiquette countries {:?} differ from emergency countries {:?}",
                etiquette, emergency
            )));
        }

        Ok(())
    }

    /// Countries offered for selection
    pub fn countries(&self) -> Vec<&str> {
        self.etiquette.iter().map(|e| e.country.as_str()).collect()
    }

    pub fn etiquette(&self, country: &str) -> Option<&str> {
        self.etiquette
            .iter()
            .find(|e| e.country == country)
            .map(|e| e.text.as_str())
    }

    pub fn emergency(&self, country: &str) -> Option<&EmergencyContacts> {
        self.emergency
            .iter()
            .find(|e| e.country == country)
            .map(|e| &e.contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_tables_load() {
        let knowledge = KnowledgeBase::embedded().unwrap();
        assert_eq!(knowledge.countries(), vec!["India", "Japan", "France", "USA"]);
    }

    #[test]
    fn test_japan_numbers() {
        let knowledge = KnowledgeBase::embedded().unwrap();
        let japan = knowledge.emergency("Japan").unwrap();
        assert_eq!(japan.police, "110");
        assert_eq!(japan.ambulance, "119");
        assert_eq!(japan.fire, "119");
    }

    #[test]
    fn test_etiquette_lookup() {
        let knowledge = KnowledgeBase::embedded().unwrap();
        assert!(knowledge.etiquette("France").unwrap().contains("Bonjour"));
        assert!(knowledge.etiquette("Narnia").is_none());
        assert!(knowledge.emergency("Narnia").is_none());
    }

    #[test]
    fn test_mismatched_tables_are_rejected() {
        let json = r#"{
            "etiquette": [{"country": "India", "text": "x"}, {"country": "Peru", "text": "y"}],
            "emergency": [{"country": "India", "contacts": {"Police": "1", "Ambulance": "2", "Fire": "3"}}]
        }"#;
        assert!(matches!(
            KnowledgeBase::from_json(json),
            Err(GuideError::Knowledge(_))
        ));
    }

    #[test]
    fn test_empty_tables_are_rejected() {
        let json = r#"{"etiquette": [], "emergency": []}"#;
        assert!(matches!(
            KnowledgeBase::from_json(json),
            Err(GuideError::Knowledge(_))
        ));
    }

    #[test]
    fn test_duplicate_country_is_rejected() {
        let json = r#"{
            "etiquette": [{"country": "India", "text": "x"}, {"country": "India", "text": "y"}],
            "emergency": [
                {"country": "India", "contacts": {"Police": "1", "Ambulance": "2", "Fire": "3"}},
                {"country": "India", "contacts": {"Police": "1", "Ambulance": "2", "Fire": "3"}}
            ]
        }"#;
        assert!(KnowledgeBase::from_json(json).is_err());
    }

    #[test]
    fn test_missing_service_fails_to_parse() {
        let json = r#"{
            "etiquette": [{"country": "India", "text": "x"}],
            "emergency": [{"country": "India", "contacts": {"Police": "1"}}]
        }"#;
        assert!(matches!(KnowledgeBase::from_json(json), Err(GuideError::Json(_))));
    }
}
