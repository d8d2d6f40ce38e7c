use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShippingError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Postal code not provided")]
    MissingPostalCode,

    #[error("Invalid postal code '{value}': must contain 8 digits")]
    InvalidPostalCode { value: String },

    #[error("Malformed item at position {index}: {reason}")]
    MalformedItem { index: usize, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ShippingError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShippingError::SerializationError(_)
            | ShippingError::MissingPostalCode
            | ShippingError::InvalidPostalCode { .. }
            | ShippingError::MalformedItem { .. }
            | ShippingError::ValidationError { .. } => ErrorCategory::Input,
            ShippingError::TomlError(_)
            | ShippingError::ConfigError { .. }
            | ShippingError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ShippingError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 輸入錯誤會走預設報價，不影響服務
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ShippingError::MissingPostalCode => "No destination postal code was given".to_string(),
            ShippingError::InvalidPostalCode { value } => {
                format!("'{}' is not a valid 8-digit postal code", value)
            }
            ShippingError::MalformedItem { index, .. } => {
                format!("Item #{} of the cart could not be read", index + 1)
            }
            ShippingError::TomlError(_)
            | ShippingError::ConfigError { .. }
            | ShippingError::InvalidConfigValueError { .. } => {
                format!("Configuration problem: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ShippingError::MissingPostalCode | ShippingError::InvalidPostalCode { .. } => {
                "Provide the destination postal code with 8 digits, e.g. 01310-100"
            }
            ShippingError::MalformedItem { .. } => {
                "Item weights must be non-negative numbers and quantities whole numbers"
            }
            ShippingError::SerializationError(_) => "Check that the request body is valid JSON",
            ShippingError::TomlError(_) => "Check the TOML syntax of the configuration file",
            ShippingError::ConfigError { .. }
            | ShippingError::InvalidConfigValueError { .. } => {
                "Review the configuration file and environment variables"
            }
            ShippingError::ValidationError { .. } => "Review the values passed on the command line",
            ShippingError::IoError(_) => "Check file permissions and that the path exists",
        }
    }
}

pub type Result<T> = std::result::Result<T, ShippingError>;
