use crate::core::workflow::{DEFAULT_ENDPOINT, DEFAULT_FLOW_NAME};
use crate::core::ConfigProvider;
use crate::utils::error::{FlowError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use reqwest::header::{HeaderName, HeaderValue};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlowConfig {
    #[serde(default)]
    pub flow: FlowSection,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSection {
    #[serde(default = "default_flow_name")]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub headers: Option<HashMap<String, String>>,
}

fn default_flow_name() -> String {
    DEFAULT_FLOW_NAME.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for FlowSection {
    fn default() -> Self {
        Self {
            name: default_flow_name(),
            description: None,
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            headers: None,
        }
    }
}

impl FlowConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FlowError::Config {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for FlowConfig {
    fn flow_name(&self) -> &str {
        &self.flow.name
    }

    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn headers(&self) -> Option<&HashMap<String, String>> {
        self.source.headers.as_ref()
    }
}

impl Validate for FlowConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("flow.name", &self.flow.name)?;
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(headers) = &self.source.headers {
            for (name, value) in headers {
                if HeaderName::from_bytes(name.as_bytes()).is_err() {
                    return Err(FlowError::InvalidConfigValue {
                        field: "source.headers".to_string(),
                        value: name.clone(),
                        reason: "Invalid HTTP header name".to_string(),
                    });
                }
                if HeaderValue::from_str(value).is_err() {
                    return Err(FlowError::InvalidConfigValue {
                        field: format!("source.headers.{}", name),
                        value: value.clone(),
                        reason: "Invalid HTTP header value".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
