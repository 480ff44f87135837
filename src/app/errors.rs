/// Fatal failures of one invocation. Each maps to a distinct exit code.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("input error: {0}")]
    Input(String),

    #[error("authentication error: {0}")]
    Auth(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),
}

impl AppError {
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth(message.into())
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn quota(message: impl Into<String>) -> Self {
        Self::QuotaExceeded(message.into())
    }

    /// Process exit code. `2` matches clap's usage-error code.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Input(_) => 2,
            AppError::Auth(_) => 3,
            AppError::Network(_) => 4,
            AppError::QuotaExceeded(_) => 5,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest embeds the request url, which carries the api key
        let err = err.without_url();
        if err.is_timeout() {
            Self::Network(format!("request timed out: {err}"))
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::input("file not found"),
            std::io::ErrorKind::PermissionDenied => Self::input("permission denied"),
            std::io::ErrorKind::InvalidData => Self::input("file is not valid utf-8"),
            _ => Self::Input(err.to_string()),
        }
    }
}

impl From<serde_yml::Error> for AppError {
    fn from(err: serde_yml::Error) -> Self {
        Self::Input(format!("config is malformed: {err}"))
    }
}
