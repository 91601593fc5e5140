use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP status {status} returned by {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Response body is not a JSON object: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Missing field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' has the wrong type, expected {expected}")]
    InvalidFieldType { field: String, expected: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config file parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl FlowError {
    pub fn missing_field(field: &str) -> Self {
        FlowError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FlowError::Transport(_) | FlowError::HttpStatus { .. } => ErrorCategory::Network,
            FlowError::Decode(_)
            | FlowError::MissingField { .. }
            | FlowError::InvalidFieldType { .. } => ErrorCategory::Data,
            FlowError::Config { .. }
            | FlowError::InvalidConfigValue { .. }
            | FlowError::ConfigParse(_) => ErrorCategory::Configuration,
            FlowError::InvalidTransition { .. } | FlowError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // upstream may recover on its own, a rerun can succeed
            FlowError::Transport(_) => ErrorSeverity::Medium,
            FlowError::HttpStatus { status, .. } if *status >= 500 => ErrorSeverity::Medium,
            FlowError::HttpStatus { .. }
            | FlowError::Decode(_)
            | FlowError::MissingField { .. }
            | FlowError::InvalidFieldType { .. }
            | FlowError::Config { .. }
            | FlowError::InvalidConfigValue { .. }
            | FlowError::ConfigParse(_) => ErrorSeverity::High,
            FlowError::InvalidTransition { .. } | FlowError::Io(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FlowError::Transport(_) => "Could not reach the data endpoint".to_string(),
            FlowError::HttpStatus { status, url } => {
                format!("The endpoint {} answered with HTTP {}", url, status)
            }
            FlowError::Decode(_) => "The endpoint did not return a JSON object".to_string(),
            FlowError::MissingField { field } => {
                format!("The fetched record has no '{}' field", field)
            }
            FlowError::InvalidFieldType { field, expected } => {
                format!("The fetched record's '{}' field is not a {}", field, expected)
            }
            FlowError::InvalidTransition { .. } => "Internal workflow state error".to_string(),
            FlowError::Config { message } => format!("Invalid configuration: {}", message),
            FlowError::InvalidConfigValue { field, reason, .. } => {
                format!("Invalid configuration for '{}': {}", field, reason)
            }
            FlowError::ConfigParse(_) => "The config file is not valid TOML".to_string(),
            FlowError::Io(e) => format!("File system error: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check the endpoint URL and your network connection, then rerun",
            ErrorCategory::Data => "Make sure the endpoint returns an object with string 'title' and 'body' fields",
            ErrorCategory::Configuration => "Fix the reported option or config file entry",
            ErrorCategory::System => "Rerun with --verbose and report the log output",
        }
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;
