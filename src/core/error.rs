use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReclaimError {
    #[error("No tile at coordinate ({0}, {1})")]
    TileNotFound(i32, i32),

    #[error("Scenario source error: {0}")]
    ScenarioSource(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReclaimError>;
