// Directions client - step-by-step route instructions from the Google Directions API

use async_trait::async_trait;
use serde::Deserialize;

const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";

pub const NOT_FOUND_MESSAGE: &str = "Sorry, I couldn’t find directions for that route.";
pub const UNAVAILABLE_MESSAGE: &str =
    "Error fetching directions. Please check your API key or internet.";

/// Result of one directions lookup
#[derive(Debug, Clone, PartialEq)]
pub enum DirectionsOutcome {
    /// Ordered instructions of the first leg of the first route
    Steps(Vec<String>),
    /// The API answered with a status other than "OK"
    NotFound,
    /// Transport failure, malformed body or missing key
    Unavailable,
}

impl DirectionsOutcome {
    /// Render for display: one instruction per line, bold markup removed
    pub fn to_text(&self) -> String {
        match self {
            DirectionsOutcome::Steps(steps) => steps
                .iter()
                .map(|step| step.replace("<b>", "").replace("</b>", ""))
                .collect::<Vec<_>>()
                .join("\n"),
            DirectionsOutcome::NotFound => NOT_FOUND_MESSAGE.to_string(),
            DirectionsOutcome::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
        }
    }
}

/// Source of route directions
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn directions(&self, origin: &str, destination: &str) -> DirectionsOutcome;
}

pub struct DirectionsClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl DirectionsClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT, api_key)
    }

    pub fn with_endpoint(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    async fn fetch(
        &self,
        origin: &str,
        destination: &str,
        key: &str,
    ) -> Result<DirectionsOutcome, DirectionsError> {
        let body = self
            .client
            .get(&self.endpoint)
            .query(&[("origin", origin), ("destination", destination), ("key", key)])
            .send()
            .await
            .map_err(|e| DirectionsError::NetworkError(e.to_string()))?
            .text()
            .await
            .map_err(|e| DirectionsError::NetworkError(e.to_string()))?;

        parse_directions(&body)
    }
}

#[async_trait]
impl DirectionsProvider for DirectionsClient {
    async fn directions(&self, origin: &str, destination: &str) -> DirectionsOutcome {
        let Some(key) = self.api_key.as_deref() else {
            tracing::warn!("No directions API key configured");
            return DirectionsOutcome::Unavailable;
        };

        tracing::info!("Requesting directions from '{}' to '{}'", origin, destination);

        match self.fetch(origin, destination, key).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Directions request failed: {}", e);
                DirectionsOutcome::Unavailable
            }
        }
    }
}

#[derive(Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<Route>,
}

#[derive(Deserialize)]
struct Route {
    legs: Vec<Leg>,
}

#[derive(Deserialize)]
struct Leg {
    steps: Vec<Step>,
}

#[derive(Deserialize)]
struct Step {
    html_instructions: String,
}

/// Interpret a Directions API response body.
///
/// Only a status of exactly "OK" counts as success; a body that claims
/// success but lacks a route or leg is an error.
pub fn parse_directions(body: &str) -> Result<DirectionsOutcome, DirectionsError> {
    let response: DirectionsResponse =
        serde_json::from_str(body).map_err(|e| DirectionsError::ParseError(e.to_string()))?;

    if response.status != "OK" {
        tracing::debug!("Directions API status: {}", response.status);
        return Ok(DirectionsOutcome::NotFound);
    }

    let leg = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .ok_or_else(|| DirectionsError::ParseError("no route or leg in response".to_string()))?;

    Ok(DirectionsOutcome::Steps(
        leg.steps.into_iter().map(|s| s.html_instructions).collect(),
    ))
}

#[derive(Debug, thiserror::Error)]
pub enum DirectionsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_response_strips_bold_and_joins() {
        let body = r#"{
            "status": "OK",
            "routes": [{"legs": [{"steps": [
                {"html_instructions": "Turn <b>left</b>"},
                {"html_instructions": "Go straight"}
            ]}]}]
        }"#;
        let outcome = parse_directions(body).unwrap();
        assert_eq!(outcome.to_text(), "Turn left\nGo straight");
    }

    #[test]
    fn test_zero_results_is_apology() {
        let outcome = parse_directions(r#"{"status":"ZERO_RESULTS","routes":[]}"#).unwrap();
        assert_eq!(outcome, DirectionsOutcome::NotFound);
        assert_eq!(outcome.to_text(), NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_status_must_be_exactly_ok() {
        let outcome = parse_directions(r#"{"status":"ok","routes":[]}"#).unwrap();
        assert_eq!(outcome, DirectionsOutcome::NotFound);
    }

    #[test]
    fn test_malformed_bodies_are_errors() {
        assert!(parse_directions("<html>").is_err());
        assert!(parse_directions(r#"{"routes":[]}"#).is_err());
        assert!(parse_directions(r#"{"status":"OK","routes":[]}"#).is_err());
    }

    #[test]
    fn test_unavailable_text_mentions_key() {
        assert!(DirectionsOutcome::Unavailable.to_text().contains("API key"));
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable() {
        let client = DirectionsClient::with_endpoint("http://127.0.0.1:9/unused", None);
        assert_eq!(
            client.directions("Chennai", "Madurai").await,
            DirectionsOutcome::Unavailable
        );
    }
}
