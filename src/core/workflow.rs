use crate::core::fetch::HttpFetcher;
use crate::core::process::process_record;
use crate::core::{ConfigProvider, ProcessedRecord, SourceRecord, Workflow};
use crate::utils::error::Result;
use std::io::Write;

/// Default endpoint: a public demo post.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/posts/1";
pub const DEFAULT_FLOW_NAME: &str = "simple_prefect_workflow";

/// Fetches one post from the configured endpoint and prints its title and body.
pub struct PostWorkflow<C: ConfigProvider> {
    config: C,
    fetcher: HttpFetcher,
}

impl<C: ConfigProvider> PostWorkflow<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            fetcher: HttpFetcher::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Workflow for PostWorkflow<C> {
    fn name(&self) -> &str {
        self.config.flow_name()
    }

    async fn fetch(&self) -> Result<SourceRecord> {
        tracing::info!("Task get_data: GET {}", self.config.endpoint());
        self.fetcher
            .fetch(self.config.endpoint(), self.config.headers())
            .await
    }

    fn process(&self, record: &SourceRecord, out: &mut dyn Write) -> Result<ProcessedRecord> {
        tracing::info!("Task process_data: {} fields in record", record.fields.len());
        process_record(record, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FlowError;
    use httpmock::prelude::*;
    use std::collections::HashMap;

    struct MockConfig {
        endpoint: String,
        headers: Option<HashMap<String, String>>,
    }

    impl MockConfig {
        fn new(endpoint: String) -> Self {
            Self {
                endpoint,
                headers: None,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn flow_name(&self) -> &str {
            "test_flow"
        }

        fn endpoint(&self) -> &str {
            &self.endpoint
        }

        fn headers(&self) -> Option<&HashMap<String, String>> {
            self.headers.as_ref()
        }
    }

    #[tokio::test]
    async fn test_fetch_then_process() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"title": "T", "body": "B", "id": 1}));
        });

        let workflow = PostWorkflow::new(MockConfig::new(server.url("/posts/1")));
        assert_eq!(workflow.name(), "test_flow");

        let record = workflow.fetch().await.unwrap();
        let mut out = Vec::new();
        let processed = workflow.process(&record, &mut out).unwrap();

        api_mock.assert();
        assert_eq!(processed, ProcessedRecord::new("T"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Processing data:\n  Title: T\n  Body: B\n"
        );
    }

    #[tokio::test]
    async fn test_process_reports_missing_body() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/posts/1");
            then.status(200).json_body(serde_json::json!({"title": "T"}));
        });

        let workflow = PostWorkflow::new(MockConfig::new(server.url("/posts/1")));
        let record = workflow.fetch().await.unwrap();

        api_mock.assert();
        assert!(matches!(
            workflow.process(&record, &mut Vec::<u8>::new()),
            Err(FlowError::MissingField { ref field }) if field == "body"
        ));
    }
}
