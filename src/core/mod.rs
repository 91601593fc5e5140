pub mod engine;
pub mod fetch;
pub mod process;
pub mod workflow;

pub use crate::domain::model::{ProcessedRecord, SourceRecord};
pub use crate::domain::ports::{ConfigProvider, Workflow};
pub use crate::domain::run::{FlowRun, FlowState};
pub use crate::utils::error::Result;
