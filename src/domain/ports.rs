use crate::domain::model::{ProcessedRecord, SourceRecord};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::io::Write;

pub trait ConfigProvider: Send + Sync {
    fn flow_name(&self) -> &str;
    fn endpoint(&self) -> &str;
    fn headers(&self) -> Option<&HashMap<String, String>>;
}

/// The two tasks a flow sequences: fetch a record, then process it.
#[async_trait]
pub trait Workflow: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> Result<SourceRecord>;
    fn process(&self, record: &SourceRecord, out: &mut dyn Write) -> Result<ProcessedRecord>;
}
