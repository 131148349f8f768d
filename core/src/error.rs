use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown topic filter: {0}")]
    UnknownTopicFilter(String),

    #[error("unknown sort mode: {0}")]
    UnknownSortMode(String),

    #[error("seed error: {0}")]
    Seed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl From<figment::Error> for BoardError {
    fn from(e: figment::Error) -> Self {
        BoardError::Config(Box::new(e))
    }
}

pub type BoardResult<T> = Result<T, BoardError>;
