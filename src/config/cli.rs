use crate::config::toml_config::FlowConfig;
use crate::core::workflow::{DEFAULT_ENDPOINT, DEFAULT_FLOW_NAME};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "post-flow")]
#[command(about = "Fetch a JSON post and print its title and body")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "TOML config file; its [source] endpoint replaces --endpoint")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Resolves the settings the flow runs with: the config file when given,
    /// otherwise the command-line endpoint under the default flow name.
    pub fn resolve(&self) -> Result<FlowConfig> {
        match &self.config {
            Some(path) => FlowConfig::from_file(path),
            None => {
                let mut config = FlowConfig::default();
                config.source.endpoint = self.endpoint.clone();
                Ok(config)
            }
        }
    }

    /// Resolves and validates. Only the settings actually used are checked, so
    /// `--endpoint` is ignored once `--config` is given.
    pub fn load(&self) -> Result<FlowConfig> {
        let config = self.resolve()?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for CliConfig {
    fn flow_name(&self) -> &str {
        DEFAULT_FLOW_NAME
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}
