use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Not in a teamboard project. Run 'teamboard init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .teamboard/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Entity not found: {0}")]
    EntityNotFound(String),

    #[error("Member already exists: {0}")]
    DuplicateMember(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
