use thiserror::Error;

#[derive(Error, Debug)]
pub enum ComicError {
    #[error("No API key found: set {key} in the env file or export {env_var}")]
    ConfigurationMissing { key: String, env_var: String },

    #[error("Image generation failed: {status} {body}")]
    ImageGeneration { status: u16, body: String },

    #[error("Malformed image generation response: {message}")]
    MalformedResponse { message: String },

    #[error("Image download failed: {status} from {url}")]
    Download { status: u16, url: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    RemoteApi,
    Network,
    FileSystem,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ComicError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ComicError::ConfigurationMissing { .. }
            | ComicError::ConfigError { .. }
            | ComicError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            ComicError::ImageGeneration { .. } | ComicError::Download { .. } => {
                ErrorCategory::RemoteApi
            }
            ComicError::Http(_) => ErrorCategory::Network,
            ComicError::Io(_) => ErrorCategory::FileSystem,
            ComicError::MalformedResponse { .. } | ComicError::Serialization(_) => {
                ErrorCategory::Data
            }
        }
    }

    /// Transient failures are `Medium`: running again may succeed and
    /// already generated panels are served from the cache.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ComicError::Http(_) | ComicError::Download { .. } => ErrorSeverity::Medium,
            ComicError::ImageGeneration { status, .. } if *status == 429 || *status >= 500 => {
                ErrorSeverity::Medium
            }
            ComicError::Io(_) => ErrorSeverity::Critical,
            _ => ErrorSeverity::High,
        }
    }

    /// Process exit status for a failed run. Never 0.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ComicError::ConfigurationMissing { .. } => {
                "Add KEY=<your key> to .env or export OPEN_AI_KEY before running"
            }
            ComicError::ImageGeneration { status: 401, .. } => {
                "The API rejected the key; check that it is valid and active"
            }
            ComicError::ImageGeneration { status: 400, .. } => {
                "The request was rejected; check the model, size and prompt text"
            }
            ComicError::ImageGeneration { .. } => {
                "Run again later; panels generated so far are reused from the image directory"
            }
            ComicError::MalformedResponse { .. } | ComicError::Serialization(_) => {
                "Check that the endpoint speaks the image generation API"
            }
            ComicError::Download { .. } | ComicError::Http(_) => {
                "Check network connectivity and run again"
            }
            ComicError::Io(_) => "Check permissions and free space for the output directories",
            ComicError::ConfigError { .. } | ComicError::InvalidConfigValue { .. } => {
                "Fix the configuration file or CLI arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ComicError::ConfigurationMissing { .. } => "No API key configured".to_string(),
            ComicError::ImageGeneration { status, .. } => {
                format!("The image service refused to draw a panel (HTTP {})", status)
            }
            ComicError::Download { status, .. } => {
                format!("Could not download a generated panel (HTTP {})", status)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComicError>;
