//! Canned data endpoints for demos and tests.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::time;
use tracing::trace;

use crate::{FetchError, deps::ApiClient};

/// An [`ApiClient`] that answers a fixed set of endpoints after a delay.
#[derive(Debug, Clone)]
pub struct MockApiClient {
    /// Simulated round-trip time.
    latency: Duration,
}

impl Default for MockApiClient {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl MockApiClient {
    /// A client answering after `latency`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Endpoints this client answers.
    pub fn endpoints() -> &'static [&'static str] {
        &["user/profile", "transactions", "services"]
    }

    /// Canned body for `endpoint`.
    fn body(endpoint: &str) -> Option<Value> {
        let body = match endpoint {
            "user/profile" => json!({
                "name": "Ivan Ivanov",
                "email": "ivan@example.com",
                "balance": 12500.50,
                "currency": "RUB"
            }),
            "transactions" => json!([
                {"id": 1, "amount": 1500, "description": "Transfer from Romashka LLC", "date": "2023-05-15"},
                {"id": 2, "amount": -500, "description": "Service payment", "date": "2023-05-14"}
            ]),
            "services" => json!([
                {"id": "cashback", "title": "Cashback", "description": "Up to 10% back", "isActive": true},
                {"id": "currency", "title": "Currency exchange", "description": "Best rate", "isActive": true}
            ]),
            _ => return None,
        };
        Some(body)
    }
}

#[async_trait]
impl ApiClient for MockApiClient {
    async fn request(&self, endpoint: &str) -> Result<Vec<u8>, FetchError> {
        trace!(endpoint, latency_ms = self.latency.as_millis(), "mock request");
        time::sleep(self.latency).await;
        Self::body(endpoint)
            .map(|v| v.to_string().into_bytes())
            .ok_or_else(|| FetchError::UnknownEndpoint(endpoint.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_endpoints_answer_json() {
        let client = MockApiClient::new(Duration::ZERO);
        for ep in MockApiClient::endpoints() {
            let body = client.request(ep).await.unwrap();
            let parsed: Value = serde_json::from_slice(&body).unwrap();
            assert!(!parsed.is_null());
        }
    }

    #[tokio::test]
    async fn unknown_endpoint_fails() {
        let client = MockApiClient::new(Duration::ZERO);
        match client.request("auth/logout").await {
            Err(FetchError::UnknownEndpoint(ep)) => assert_eq!(ep, "auth/logout"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
