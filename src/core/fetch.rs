use crate::domain::model::SourceRecord;
use crate::utils::error::{FlowError, Result};
use reqwest::Client;
use std::collections::HashMap;

/// Single-attempt GET of one JSON object. No retry, no cache, client-default timeout.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
    ) -> Result<SourceRecord> {
        tracing::debug!("Making API request to: {}", url);

        let mut request = self.client.get(url);
        if let Some(headers) = headers {
            for (name, value) in headers {
                request = request.header(name.as_str(), value.as_str());
            }
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status.is_client_error() || status.is_server_error() {
            return Err(FlowError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        tracing::debug!("Received {} bytes", body.len());

        SourceRecord::from_json_str(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_decoded_object() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"title": "T", "body": "B", "id": 1}));
        });

        let record = HttpFetcher::new()
            .fetch(&server.url("/posts/1"), None)
            .await
            .unwrap();

        api_mock.assert();
        let expected = serde_json::json!({"title": "T", "body": "B", "id": 1});
        assert_eq!(serde_json::to_value(&record).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_fetch_sends_configured_headers() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/posts/1")
                .header("X-Api-Key", "secret");
            then.status(200).json_body(serde_json::json!({"title": "T", "body": "B"}));
        });

        let mut headers = HashMap::new();
        headers.insert("X-Api-Key".to_string(), "secret".to_string());

        let result = HttpFetcher::new()
            .fetch(&server.url("/posts/1"), Some(&headers))
            .await;

        api_mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_not_found_is_status_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(404);
        });

        let result = HttpFetcher::new().fetch(&server.url("/posts/1"), None).await;

        api_mock.assert();
        match result {
            Err(FlowError::HttpStatus { status, url }) => {
                assert_eq!(status, 404);
                assert!(url.ends_with("/posts/1"));
            }
            other => panic!("expected HttpStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_status_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(500);
        });

        let result = HttpFetcher::new().fetch(&server.url("/posts/1"), None).await;

        api_mock.assert_hits(1);
        assert!(matches!(
            result,
            Err(FlowError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_decode_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200).body("not json");
        });

        let result = HttpFetcher::new().fetch(&server.url("/posts/1"), None).await;

        api_mock.assert();
        assert!(matches!(result, Err(FlowError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_array_body_is_decode_error() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts");
            then.status(200)
                .json_body(serde_json::json!([{"title": "T", "body": "B"}]));
        });

        let result = HttpFetcher::new().fetch(&server.url("/posts"), None).await;

        api_mock.assert();
        assert!(matches!(result, Err(FlowError::Decode(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_transport_error() {
        // Nothing listens on port 1.
        let result = HttpFetcher::new()
            .fetch("http://127.0.0.1:1/posts/1", None)
            .await;

        assert!(matches!(result, Err(FlowError::Transport(_))));
    }
}
