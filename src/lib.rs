pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::FlowConfig;

pub use core::{
    engine::FlowEngine, fetch::HttpFetcher, workflow::PostWorkflow, FlowRun, FlowState,
    ProcessedRecord, SourceRecord,
};
pub use utils::error::{FlowError, Result};
