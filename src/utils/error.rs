use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Malformed score '{score}': {reason}")]
    MalformedScore { score: String, reason: String },

    #[error("Team '{team}' did not play in {home_team} vs {away_team}")]
    TeamNotInMatch {
        team: String,
        home_team: String,
        away_team: String,
    },

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Invalid source: {message}")]
    InvalidSourceError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Data,
    Contract,
    Network,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn malformed_score(score: &str, reason: impl Into<String>) -> Self {
        EtlError::MalformedScore {
            score: score.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::MalformedScore { .. } | EtlError::SerializationError(_) => {
                ErrorCategory::Data
            }
            EtlError::CsvError(_) | EtlError::ProcessingError { .. } => ErrorCategory::Data,
            EtlError::TeamNotInMatch { .. } => ErrorCategory::Contract,
            EtlError::ApiError(_) => ErrorCategory::Network,
            EtlError::ZipError(_) | EtlError::IoError(_) => ErrorCategory::Storage,
            EtlError::InvalidSourceError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Contract | ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binaries; 0 means warn and carry on.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::MalformedScore { .. } => {
                "Scores must be two whole numbers separated by an en-dash, e.g. 2–1"
            }
            EtlError::TeamNotInMatch { .. } => {
                "The team universe does not match the match data; check the first round"
            }
            EtlError::ApiError(_) => "Check the source endpoint and your network connection",
            EtlError::SerializationError(_) => "The source must be a JSON array of match objects",
            EtlError::CsvError(_) | EtlError::ProcessingError { .. } => {
                "Check the match data for unexpected characters"
            }
            EtlError::ZipError(_) | EtlError::IoError(_) => {
                "Check that the output path exists and is writable"
            }
            EtlError::InvalidSourceError { .. } => {
                "Use an http(s) URL or the path of an existing JSON file"
            }
            EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. }
            | EtlError::MissingConfigError { .. } => "Review the configuration values and retry",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::MalformedScore { score, .. } => {
                format!("A match has an unreadable score: '{}'", score)
            }
            EtlError::TeamNotInMatch { team, .. } => {
                format!("Internal error: standings asked for '{}' in a match it did not play", team)
            }
            EtlError::ApiError(_) => "Could not download the match list".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
