pub type AppResult<T> = Result<T, AppError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("invalid directory data at {path}: {message}")]
    InvalidData { path: String, message: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn invalid_data(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidData {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for AppError {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        let path = value.path().to_string();
        Self::invalid_data(path, value.into_inner().to_string())
    }
}

/// Reason a login attempt was rejected.
///
/// `SessionStore::login` collapses both variants into `false`; callers that
/// want distinct user-facing messages use `try_login` instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("identifier {identifier:?} does not end with {suffix:?}")]
    MalformedIdentifier { identifier: String, suffix: String },
    #[error("no account found for {0:?}")]
    UnknownIdentifier(String),
}

impl LoginError {
    pub fn kind(&self) -> &'static str {
        match self {
            LoginError::MalformedIdentifier { .. } => "malformed_identifier",
            LoginError::UnknownIdentifier(_) => "unknown_identifier",
        }
    }
}
