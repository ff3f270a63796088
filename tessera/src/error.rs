use tessera_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("invalid value '{value}' for {var}")]
    InvalidSetting { var: &'static str, value: String },

    #[error("invalid log filter: {0}")]
    LogFilter(String),

    #[error("logging already initialized")]
    LoggingInitialized,

    #[error("unknown component category: {0}")]
    UnknownCategory(String),

    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
